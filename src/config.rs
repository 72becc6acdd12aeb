//! Configuration management for the booking scheduler.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the booking scheduler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seats available per hour (default: 3)
    pub capacity_per_hour: u32,

    /// Notification service base URL; notifications are only logged when unset
    pub notify_api_url: Option<String>,

    /// API key for the notification service
    pub notify_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CAPACITY_PER_HOUR`: Seats per hour, must be positive (default: 3)
    /// - `NOTIFY_API_BASE_URL`: Base URL of the SMS/email service
    /// - `NOTIFY_API_KEY`: API key for the notification service
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Config::default();

        let capacity_per_hour = Self::parse_env_u32("CAPACITY_PER_HOUR", defaults.capacity_per_hour)?;
        if capacity_per_hour == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CAPACITY_PER_HOUR".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let notify_api_url = Self::optional_env("NOTIFY_API_BASE_URL");
        if let Some(url) = &notify_api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "NOTIFY_API_BASE_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let notify_api_key = Self::optional_env("NOTIFY_API_KEY");
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            capacity_per_hour,
            notify_api_url,
            notify_api_key,
            request_timeout,
            log_level,
        })
    }

    /// Read a variable, treating blank values as unset.
    fn optional_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .filter(|val| !val.trim().is_empty())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity_per_hour: 3,
            notify_api_url: None,
            notify_api_key: None,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "CAPACITY_PER_HOUR",
        "NOTIFY_API_BASE_URL",
        "NOTIFY_API_KEY",
        "REQUEST_TIMEOUT",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity_per_hour, 3);
        assert_eq!(config.request_timeout, 10);
        assert!(config.notify_api_url.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CAPACITY_PER_HOUR", "12");
        guard.set("NOTIFY_API_BASE_URL", "https://notify.example.com");
        guard.set("NOTIFY_API_KEY", "secret");
        guard.set("REQUEST_TIMEOUT", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.capacity_per_hour, 12);
        assert_eq!(
            config.notify_api_url.as_deref(),
            Some("https://notify.example.com")
        );
        assert_eq!(config.notify_api_key.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_zero_capacity() {
        let mut guard = EnvGuard::new();
        guard.set("CAPACITY_PER_HOUR", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CAPACITY_PER_HOUR"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("NOTIFY_API_BASE_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "NOTIFY_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_blank_url_is_unset() {
        let mut guard = EnvGuard::new();
        guard.set("NOTIFY_API_BASE_URL", "  ");

        let config = Config::from_env().unwrap();
        assert!(config.notify_api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("CAPACITY_PER_HOUR", "-4");

        let result = Config::parse_env_u32("CAPACITY_PER_HOUR", 3);
        assert!(result.is_err());

        let result = Config::parse_env_u32("NONEXISTENT_CAPACITY", 3);
        assert_eq!(result.unwrap(), 3);
    }
}
