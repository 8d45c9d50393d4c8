//! Planning service connection settings.

use std::time::Duration;

use crate::error::{ConfigResultExt, ItineraError, Result};

/// Environment variable holding the planning service base URL.
pub const API_URL_ENV: &str = "ITINERA_API_URL";

/// Environment variable holding the request timeout in whole seconds.
pub const API_TIMEOUT_ENV: &str = "ITINERA_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL and timeout of the planning service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from `ITINERA_API_URL` and
    /// `ITINERA_API_TIMEOUT_SECS`, falling back to the defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV) {
            config.base_url = url;
        }
        if let Some(secs) = lookup(API_TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().config_context(API_TIMEOUT_ENV)?;
            config.timeout = Duration::from_secs(secs);
        }
        config.validated()
    }

    /// Checks the base URL and timeout and strips any trailing slash.
    pub fn validated(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ItineraError::Configuration {
                message: format!("Base URL must start with http:// or https://, got '{}'", self.base_url),
            });
        }
        if self.timeout.is_zero() {
            return Err(ItineraError::Configuration {
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        self.base_url = trimmed;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_and_trims_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://plans.example.com/"),
            (API_TIMEOUT_ENV, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://plans.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_TIMEOUT_ENV, "soon")])),
            Err(ItineraError::Configuration { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_TIMEOUT_ENV, "0")])),
            Err(ItineraError::Configuration { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(API_URL_ENV, "localhost:8000")])),
            Err(ItineraError::Configuration { .. })
        ));
    }
}
