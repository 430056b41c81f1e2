use std::fs;
use std::path::PathBuf;

use servicebay::error::{ConfigError, Error};
use servicebay::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("servicebay.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn example_config_is_valid() {
    let content = include_str!("../servicebay.example.toml");
    let config = Config::parse_toml(content).expect("example config parses");
    assert_eq!(config.service.interval_days, 180);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn config_rejects_unknown_log_level_syntax() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[logging]\nlevel = \"servicebay=loud\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.level",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid log level error, got {err}"),
        Ok(config) => panic!(
            "Expected log level to be rejected, got {}",
            config.logging.level
        ),
    }
}

#[test]
fn config_reads_schema_and_export_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        "[database]\nschema_path = \"db/schema.sql\"\n\n[export]\ndirectory = \"exports\"\n",
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.database.schema_path, Some(PathBuf::from("db/schema.sql")));
    assert_eq!(config.export.directory, PathBuf::from("exports"));
    assert_eq!(config.database.path, PathBuf::from("servicebay.db"));
}
