//! Unit tests for bootstrap configuration
//!
//! Covers TOML parsing with defaults, graceful handling of a missing file,
//! and platform default locations.
//!
//! Tests that manipulate XDG_* variables are marked with #[serial] so they do
//! not race each other.

use reads_common::config::{
    default_config_path, default_database_path, LoggingConfig, TomlConfig, DATABASE_FILE_NAME,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_empty_toml_uses_defaults() {
    let config = TomlConfig::parse("").expect("empty TOML should parse");

    assert_eq!(config, TomlConfig::default());
    assert_eq!(config.phase_attempts, 1);
    assert_eq!(config.logging.level, "info");
    assert!(config.authors_dump.is_none());
    assert!(config.works_dump.is_none());
    assert!(config.database_path.is_none());
}

#[test]
fn test_full_toml_parses_all_fields() {
    let content = r#"
        authors_dump = "/data/ol_dump_authors.txt"
        works_dump = "/data/ol_dump_works.txt"
        database_path = "/var/lib/reads/catalog.db"
        phase_attempts = 3

        [logging]
        level = "debug"
    "#;

    let config = TomlConfig::parse(content).unwrap();

    assert_eq!(config.authors_dump, Some(PathBuf::from("/data/ol_dump_authors.txt")));
    assert_eq!(config.works_dump, Some(PathBuf::from("/data/ol_dump_works.txt")));
    assert_eq!(config.database_path, Some(PathBuf::from("/var/lib/reads/catalog.db")));
    assert_eq!(config.phase_attempts, 3);
    assert_eq!(config.logging, LoggingConfig { level: "debug".to_string() });
}

#[test]
fn test_logging_table_without_level_defaults_to_info() {
    let config = TomlConfig::parse("[logging]\n").unwrap();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = TomlConfig::parse("phase_attempts = \"many\"");
    match result {
        Err(reads_common::Error::Config(msg)) => assert!(msg.contains("Parse TOML failed")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_load_optional_missing_file_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let loaded = TomlConfig::load_optional(&path).expect("missing file is not an error");
    assert!(loaded.is_none());
}

#[test]
fn test_load_optional_reads_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "works_dump = \"works.txt\"\n").unwrap();

    let loaded = TomlConfig::load_optional(&path).unwrap().expect("file exists");
    assert_eq!(loaded.works_dump, Some(PathBuf::from("works.txt")));
}

#[test]
fn test_load_optional_broken_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    assert!(TomlConfig::load_optional(&path).is_err());
}

#[test]
fn test_default_database_path_file_name() {
    let path = default_database_path();
    assert_eq!(path.file_name().unwrap(), DATABASE_FILE_NAME);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_paths_follow_xdg_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let config_home = temp_dir.path().join("config");
    let data_home = temp_dir.path().join("data");

    let saved_config = env::var("XDG_CONFIG_HOME").ok();
    let saved_data = env::var("XDG_DATA_HOME").ok();
    env::set_var("XDG_CONFIG_HOME", &config_home);
    env::set_var("XDG_DATA_HOME", &data_home);

    let config_path = default_config_path();
    let db_path = default_database_path();

    match saved_config {
        Some(v) => env::set_var("XDG_CONFIG_HOME", v),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }
    match saved_data {
        Some(v) => env::set_var("XDG_DATA_HOME", v),
        None => env::remove_var("XDG_DATA_HOME"),
    }

    assert_eq!(config_path, Some(config_home.join("reads").join("config.toml")));
    assert_eq!(db_path, data_home.join("reads").join("catalog.db"));
}
