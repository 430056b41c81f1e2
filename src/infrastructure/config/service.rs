//! Database, service-interval and export settings.

use std::path::PathBuf;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::DEFAULT_SERVICE_INTERVAL_DAYS;

/// Where the record store lives and how its schema is applied.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file, created on first use.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
    /// External DDL file. When unset the bundled schema is applied.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("servicebay.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            schema_path: None,
        }
    }
}

/// Service scheduling policy.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Days after the last service at which a vehicle is due again.
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,
}

const fn default_interval_days() -> u32 {
    DEFAULT_SERVICE_INTERVAL_DAYS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            interval_days: default_interval_days(),
        }
    }
}

/// CSV export destination.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory default export file names are resolved against.
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}
