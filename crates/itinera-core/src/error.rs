//! Error types for the itinera library.

use std::fmt;

use thiserror::Error;

use crate::validator::ValidationErrors;

/// Comprehensive error type for all itinera operations.
#[derive(Error, Debug)]
pub enum ItineraError {
    /// One or more draft fields failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A validated draft could not be assembled into a request
    #[error("Internal invariant violated: {message}")]
    Assertion { message: String },
    /// Input rejected at entry time, before it reaches a draft
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraError {
        ItineraError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an assertion failure for a broken internal invariant.
    pub fn assertion(message: impl Into<String>) -> Self {
        ItineraError::Assertion {
            message: message.into(),
        }
    }
}

/// Extension trait for Result to map foreign errors into configuration
/// errors with context.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error with a message.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| ItineraError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for itinera operations
pub type Result<T> = std::result::Result<T, ItineraError>;
