//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional: a missing file or an empty one yields the
//! defaults, and command-line flags may override individual values afterwards.
//!
//! # Example
//!
//! ```no_run
//! use servicebay::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("servicebay.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::service::{DatabaseConfig, ExportConfig, ServiceConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database file and schema source.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Service scheduling policy used by the vehicle summary.
    #[serde(default)]
    pub service: ServiceConfig,

    /// CSV export destination.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// As [`Config::load`] for a file that exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] or [`ConfigError::InvalidValue`]
    /// naming the first offending field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            }
            .into());
        }
        if self
            .database
            .schema_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "database.schema_path",
                reason: "must not be empty when set".to_string(),
            }
            .into());
        }
        if self.service.interval_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "service.interval_days",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
