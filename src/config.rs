//! App Configuration
//!
//! Build-time settings from `config/app.json`. Missing keys take defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_CONFIG_JSON: &str = include_str!("../config/app.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    /// Pause between a successful sign-in toast and the dashboard redirect
    pub login_redirect_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// Records kept by the rolling logger
    pub log_capacity: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "NexAI Studio".to_string(),
            login_redirect_delay_ms: 1000,
            toast_duration_ms: 4000,
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bundled config, or defaults when it does not parse.
    ///
    /// Runs before the logger exists, so the error is returned alongside
    /// for the caller to report once logging is up.
    pub fn bundled() -> (Self, Option<ConfigError>) {
        match Self::from_json(APP_CONFIG_JSON) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let (config, err) = AppConfig::bundled();
        assert!(err.is_none());
        assert_eq!(config.login_redirect_delay_ms, 1000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AppConfig::from_json(r#"{"toast_duration_ms": 1500}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.log_capacity, 200);
        assert_eq!(config.app_name, "NexAI Studio");
    }

    #[test]
    fn test_wrong_type_is_error() {
        let err = AppConfig::from_json(r#"{"log_capacity": "lots"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid app config"));
    }
}
