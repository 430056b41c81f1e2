//! Resolved settings shared by every CLI handler.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, warn};

use super::output;

use crate::adapter::outbound::sqlite::database::BUNDLED_SCHEMA;
use crate::adapter::outbound::sqlite::RecordStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Effective configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open the configured database and bring it up to date.
    ///
    /// Creates the file if needed, applies the schema (the configured file,
    /// or the bundled one), ensures the default admin account exists and
    /// applies the configured service interval.
    ///
    /// Schema and bootstrap failures are reported and left in
    /// [`RecordStore::last_error`]; the store is still returned with whatever
    /// tables exist, and later operations fail on their own.
    pub fn open_store(&self) -> Result<RecordStore> {
        let database = &self.config.database;
        let mut store = RecordStore::open_or_create(&database.path)?;
        let applied = match &database.schema_path {
            Some(path) => store.initialize_schema_from_file(path),
            None => store.initialize_schema(BUNDLED_SCHEMA),
        };
        if let Err(e) = applied {
            warn!(error = %e, "Schema not fully applied");
            output::warning(&format!("Schema not fully applied: {e}"));
        }
        if let Err(e) = store.ensure_default_admin() {
            warn!(error = %e, "Default admin not ensured");
            output::warning(&format!("Default admin not ensured: {e}"));
        }
        store.set_service_interval_days(self.config.service.interval_days);
        debug!(path = %database.path.display(), "Record store ready");
        Ok(store)
    }

    /// Resolve a default export file name against the export directory.
    #[must_use]
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        self.config.export.directory.join(file_name)
    }
}

/// Today's local date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The current local time as `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn open_store_bootstraps_a_new_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("shop.db");
        config.service.interval_days = 90;

        let session = Session::new(config);
        let mut store = session.open_store().unwrap();
        assert!(dir.path().join("shop.db").exists());
        assert_eq!(store.count_users().unwrap(), 1);
        assert_eq!(store.service_interval_days(), 90);
    }

    #[test]
    fn partial_schema_still_opens_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("schema.sql");
        std::fs::write(&schema_path, format!("{BUNDLED_SCHEMA}\nCREATE TABLE broken (;")).unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("shop.db");
        config.database.schema_path = Some(schema_path);

        let mut store = Session::new(config).open_store().unwrap();
        assert!(matches!(store.last_error(), Some(StoreError::StatementFailed(_))));
        assert_eq!(store.count_users().unwrap(), 1);
    }

    #[test]
    fn missing_schema_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("shop.db");
        drop(Session::new(config.clone()).open_store().unwrap());

        config.database.schema_path = Some(dir.path().join("absent.sql"));
        let mut store = Session::new(config).open_store().unwrap();
        assert!(matches!(store.last_error(), Some(StoreError::IoFailed(_))));
        assert_eq!(store.count_users().unwrap(), 1);
    }

    #[test]
    fn empty_database_without_schema_still_opens() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("shop.db");
        config.database.schema_path = Some(dir.path().join("absent.sql"));

        let mut store = Session::new(config).open_store().unwrap();
        assert!(store.last_error().is_some());
        assert!(store.count_users().is_err());
    }

    #[test]
    fn export_path_uses_configured_directory() {
        let mut config = Config::default();
        config.export.directory = PathBuf::from("/srv/exports");
        let session = Session::new(config);
        assert_eq!(
            session.export_path("service_records.csv"),
            PathBuf::from("/srv/exports/service_records.csv")
        );
    }

    #[test]
    fn date_helpers_are_iso_formatted() {
        assert_eq!(today().len(), 10);
        assert_eq!(now().len(), 19);
        assert_eq!(&now()[10..11], "T");
    }
}
