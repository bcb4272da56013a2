//! Client configuration: base URL and request timeout.
//!
//! Both values are fixed defaults for this build and can be overridden from
//! the environment, the same way the mock server picks up `PORT`.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

pub const BASE_URL_ENV: &str = "CATALOG_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "CATALOG_API_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyBaseUrl { var: &'static str },
}

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
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults overridden by `CATALOG_API_BASE_URL` / `CATALOG_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyBaseUrl { var: BASE_URL_ENV });
            }
            config.base_url = url.to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                var: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_build() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_millis(8000));
    }

    #[test]
    fn env_overrides_both_values() {
        let config = ClientConfig::from_lookup(|var| match var {
            BASE_URL_ENV => Some("http://10.0.0.2:3000".to_string()),
            TIMEOUT_ENV => Some("2500".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:3000");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn unset_env_keeps_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(|var| (var == TIMEOUT_ENV).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn blank_base_url_is_rejected() {
        let err = ClientConfig::from_lookup(|var| (var == BASE_URL_ENV).then(|| "  ".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBaseUrl { .. }));
    }
}
