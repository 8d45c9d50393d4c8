//! Errors reported by the planning API client.

use serde_json::Value;
use thiserror::Error;

/// Failure of a single call to the planning service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-2xx status
    #[error("Server returned {status}{}", detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Http { status: u16, detail: Option<String> },

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The request could not be sent or the response could not be read
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response carried a body that does not match the expected shape
    #[error("Unexpected response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Structured detail supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Extracts the `detail` of an error body.
///
/// A string detail is returned as-is. A list detail, as produced for request
/// validation failures, is flattened by joining the `msg` of each entry.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
