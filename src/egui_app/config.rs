use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the demo API base URL
pub const ENV_DEMO_API_URL: &str = "USERDESK_DEMO_API_URL";
/// Environment variable overriding the record store base URL
pub const ENV_RECORD_STORE_URL: &str = "USERDESK_RECORD_STORE_URL";
/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "USERDESK_TIMEOUT_SECS";

/// Resolved application configuration.
///
/// Defaults, then `<config_dir>/userdesk/config.toml`, then environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Resolve from the platform config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        Self::resolve(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve from an optional TOML file and an environment lookup.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn resolve(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config file");
                AppConfig::from_toml_str(&std::fs::read_to_string(path)?)?
            }
            _ => AppConfig::default(),
        };

        let mut builder = AppConfigBuilder::from_config(base);
        if let Some(url) = env(ENV_DEMO_API_URL) {
            builder = builder.demo_api_url(url);
        }
        if let Some(url) = env(ENV_RECORD_STORE_URL) {
            builder = builder.record_store_url(url);
        }
        if let Some(raw) = env(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                field: "request_timeout_secs",
                message: format!("'{}' is not a number of seconds", raw),
            })?;
            builder = builder.request_timeout_secs(secs);
        }

        Self::with_builder(builder)
    }

    /// `<config_dir>/userdesk/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("userdesk");
            path.push("config.toml");
            path
        })
    }

    pub fn demo_api_url(&self) -> &str {
        &self.app.demo_api_url
    }

    pub fn record_store_url(&self) -> &str {
        &self.app.record_store_url
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.app.request_timeout_secs)
    }
}
