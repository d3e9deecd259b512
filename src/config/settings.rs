//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings the
//! notification layer reads. Configuration is loaded from a TOML file;
//! secrets (the Telegram bot token) come from environment variables
//! only, with `.env` files picked up for development.
//!
//! # Example
//!
//! ```no_run
//! use tradeherald::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("tradeherald.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::notify::NotifyConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section has defaults, so an empty file parses to a valid
/// configuration. Load from a TOML file using [`Config::load`] or parse
/// directly with [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Notification behavior.
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Telegram messenger settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails (e.g. a presence template without its placeholder).
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Also loads a `.env` file from the working directory if one
    /// exists, so the Telegram bot token can live there during
    /// development.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if !self.notify.presence_template.contains("{0}") {
            return Err(ConfigError::InvalidValue {
                field: "presence_template",
                reason: "must contain the {0} placeholder".to_string(),
            }
            .into());
        }
        if self.notify.cooldown_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cooldown_file",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.telegram.enabled && self.telegram.broadcast_chat_id == 0 {
            return Err(ConfigError::MissingField {
                field: "broadcast_chat_id",
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
