//! Bootstrap configuration and default path resolution
//!
//! The TOML file only carries bootstrap concerns: where the dumps live, where
//! the database goes, how many attempts a phase gets, and the log level.
//! Every field is optional; a missing file means "use compiled defaults".

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "reads";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Database file name inside the data directory
pub const DATABASE_FILE_NAME: &str = "catalog.db";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Path to the authors dump
    #[serde(default)]
    pub authors_dump: Option<PathBuf>,

    /// Path to the works dump
    #[serde(default)]
    pub works_dump: Option<PathBuf>,

    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Attempts per phase before a fatal error is reported (1 = no retry)
    #[serde(default = "default_phase_attempts")]
    pub phase_attempts: u32,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            authors_dump: None,
            works_dump: None,
            database_path: None,
            phase_attempts: default_phase_attempts(),
            logging: LoggingConfig::default(),
        }
    }
}

pub fn default_phase_attempts() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Load configuration from a TOML file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read TOML {} failed: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Load configuration if the file exists
    ///
    /// Returns `Ok(None)` for a missing file so the caller can warn and fall
    /// back to defaults. A file that exists but does not parse is an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

/// Default config file location: `<config_dir>/reads/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Default database location: `<data_local_dir>/reads/catalog.db`
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("./reads_data"))
        .join(DATABASE_FILE_NAME)
}
