//! Database connection management using Diesel ORM.
//!
//! Opens the single SQLite connection the record store owns, applies
//! connection pragmas, and runs externally supplied DDL batches.

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::error::{StoreError, StoreResult};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    id: i32,
}

/// Open the database at `path`, creating the file if it does not exist.
///
/// # Errors
/// Returns [`StoreError::ConnectionFailed`] with the engine's message if the
/// file cannot be opened or created.
pub fn establish(path: &Path) -> StoreResult<SqliteConnection> {
    let url = path.to_str().ok_or_else(|| {
        StoreError::ConnectionFailed(format!(
            "Failed to open DB: path is not valid UTF-8: {}",
            path.display()
        ))
    })?;

    SqliteConnection::establish(url)
        .map_err(|e| StoreError::ConnectionFailed(format!("Failed to open DB: {e}")))
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> StoreResult<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    Ok(())
}

/// Execute a batch of DDL statements as one unit of text.
///
/// Statements before a failing one stay applied.
///
/// # Errors
/// Returns [`StoreError::StatementFailed`] with the engine's message.
pub fn execute_batch(conn: &mut SqliteConnection, sql: &str) -> StoreResult<()> {
    conn.batch_execute(sql)
        .map_err(|e| StoreError::StatementFailed(e.to_string()))
}

/// Row id assigned by the most recent successful insert on `conn`.
///
/// # Errors
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> StoreResult<i32> {
    let row = diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)?;
    Ok(row.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[test]
    fn establish_memory_db() {
        let conn = establish(Path::new(":memory:"));
        assert!(conn.is_ok());
    }

    #[test]
    fn establish_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        assert!(!path.exists());

        let _conn = establish(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn establish_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/records.db");

        let Err(err) = establish(&path) else {
            panic!("opening inside a missing directory should fail");
        };
        match err {
            StoreError::ConnectionFailed(message) => {
                assert!(message.starts_with("Failed to open DB: "), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn configure_sqlite_connection_sets_pragmas() {
        let mut conn = establish(Path::new(":memory:")).unwrap();
        assert!(configure_sqlite_connection(&mut conn).is_ok());
    }

    #[test]
    fn execute_batch_runs_every_statement() {
        let mut conn = establish(Path::new(":memory:")).unwrap();
        execute_batch(
            &mut conn,
            "CREATE TABLE a (x INTEGER); CREATE TABLE b (y TEXT);",
        )
        .unwrap();

        let names: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn execute_batch_reports_engine_message() {
        let mut conn = establish(Path::new(":memory:")).unwrap();
        let err = execute_batch(&mut conn, "CREATE TABLE broken (").unwrap_err();
        assert!(matches!(err, StoreError::StatementFailed(_)));
    }

    #[test]
    fn last_insert_rowid_tracks_inserts() {
        let mut conn = establish(Path::new(":memory:")).unwrap();
        execute_batch(
            &mut conn,
            "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT);
             INSERT INTO t (v) VALUES ('a');
             INSERT INTO t (v) VALUES ('b');",
        )
        .unwrap();

        assert_eq!(last_insert_rowid(&mut conn).unwrap(), 2);
    }
}
