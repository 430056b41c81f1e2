use std::path::{Path, PathBuf};

use servicebay::adapter::outbound::sqlite::database::BUNDLED_SCHEMA;
use servicebay::RecordStore;
use tempfile::TempDir;

/// Temporary on-disk SQLite database for integration tests.
///
/// The directory and everything in it is removed when the value is dropped.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("servicebay-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join(format!("{name}.db"));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Open (or create) the database and apply the bundled schema.
    pub fn open(&self) -> RecordStore {
        let mut store = RecordStore::open_or_create(&self.path).expect("open record store");
        store.initialize_schema(BUNDLED_SCHEMA).expect("apply schema");
        store
    }
}
