//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Log formats accepted in `[logging] format`.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Events go to
    /// stderr so they never interleave with command output or `--json`.
    /// A second call in the same process is a no-op.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
    }

    pub(crate) fn is_known_format(&self) -> bool {
        LOG_FORMATS.contains(&self.format.as_str())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet_pretty_output() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "pretty");
        assert!(config.is_known_format());
    }

    #[test]
    fn unknown_format_is_flagged() {
        let config = LoggingConfig {
            level: "info".into(),
            format: "xml".into(),
        };
        assert!(!config.is_known_format());
    }
}
