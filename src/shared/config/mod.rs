//! Application configuration module
//!
//! Provides the configuration file model, its builder and validation.
//!
//! ```toml
//! demo_api_url = "https://jsonplaceholder.typicode.com"
//! record_store_url = "http://localhost:5000"
//! request_timeout_secs = 10
//! ```

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base address of the read-only demo API
pub const DEFAULT_DEMO_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default base address of the writable record store
pub const DEFAULT_RECORD_STORE_URL: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Demo API base URL
    pub demo_api_url: String,
    /// Record store base URL
    pub record_store_url: String,
    /// Timeout applied to every backend request
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo_api_url: DEFAULT_DEMO_API_URL.to_string(),
            record_store_url: DEFAULT_RECORD_STORE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("demo_api_url", &self.demo_api_url)?;
        check_url("record_store_url", &self.record_store_url)?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    demo_api_url: Option<String>,
    record_store_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl AppConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            demo_api_url: Some(config.demo_api_url),
            record_store_url: Some(config.record_store_url),
            request_timeout_secs: Some(config.request_timeout_secs),
        }
    }

    /// Set the demo API URL
    pub fn demo_api_url(mut self, url: impl Into<String>) -> Self {
        self.demo_api_url = Some(url.into());
        self
    }

    /// Set the record store URL
    pub fn record_store_url(mut self, url: impl Into<String>) -> Self {
        self.record_store_url = Some(url.into());
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            demo_api_url: self.demo_api_url.unwrap_or(defaults.demo_api_url),
            record_store_url: self.record_store_url.unwrap_or(defaults.record_store_url),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
