//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::path::PathBuf;

use daybreak_domain::{DaybreakError, StorageBackend};
use daybreak_infra::{build_store, config};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("config file written");
    path
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "daybreak.toml",
        r#"
            [storage]
            backend = "memory"

            [day]
            boundary_hour = 3
            timezone = "America/New_York"

            [logging]
            filter = "debug"
            json = true
        "#,
    );

    let config = config::load_from_file(Some(path)).expect("config loaded");

    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.day.boundary_hour, 3);
    assert_eq!(config.day.timezone.as_deref(), Some("America/New_York"));
    assert!(config.logging.json);
    assert!(config::validate(&config).is_ok());
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "config.json",
        r#"{ "storage": { "backend": "sqlite", "path": "/tmp/daybreak.db", "pool_size": 8 } }"#,
    );

    let config = config::load_from_file(Some(path)).expect("config loaded");

    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.pool_size, 8);
    assert_eq!(config.day.boundary_hour, 4);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().expect("temp dir");

    let err = config::load_from_file(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, DaybreakError::Config(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "daybreak.toml", "[storage\nbackend = ");

    assert!(matches!(config::load_from_file(Some(path)), Err(DaybreakError::Config(_))));
}

#[test]
fn test_build_store_opens_sqlite_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "daybreak.toml",
        &format!(
            "[storage]\nbackend = \"sqlite\"\npath = {:?}\n",
            dir.path().join("store.db").display().to_string()
        ),
    );
    let config = config::load_from_file(Some(path)).expect("config loaded");

    build_store(&config).expect("sqlite store built");

    assert!(dir.path().join("store.db").exists());
}
