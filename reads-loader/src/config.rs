//! Configuration resolution for reads-loader
//!
//! Each setting resolves with priority: command line (or its environment
//! variable) → TOML config file → compiled default.

use clap::{Parser, ValueEnum};
use reads_common::config::{default_config_path, default_database_path, TomlConfig};
use reads_common::{Error, Result};
use std::path::{Path, PathBuf};

/// Command-line arguments for reads-loader
#[derive(Parser, Debug, Clone)]
#[command(name = "reads-loader")]
#[command(about = "Load authors and works dumps into the catalog store")]
#[command(version)]
pub struct CliArgs {
    /// Authors dump file
    #[arg(long, env = "READS_AUTHORS_DUMP")]
    pub authors_dump: Option<PathBuf>,

    /// Works dump file
    #[arg(long, env = "READS_WORKS_DUMP")]
    pub works_dump: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, env = "READS_DATABASE")]
    pub database: Option<PathBuf>,

    /// TOML config file
    #[arg(long, env = "READS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Which phases to run
    #[arg(long, value_enum, default_value_t = PhaseSelection::All)]
    pub phase: PhaseSelection,

    /// Allow `--phase works` without running the authors phase first
    #[arg(long)]
    pub assume_authors_loaded: bool,

    /// Attempts per phase before giving up
    #[arg(long, env = "READS_PHASE_ATTEMPTS")]
    pub phase_attempts: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "READS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Write the run report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Phases selected on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSelection {
    /// Authors, then works
    All,
    /// Authors only
    Authors,
    /// Works only (requires --assume-authors-loaded)
    Works,
}

impl CliArgs {
    /// Config file to read: `--config`, else the platform default
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(default_config_path)
    }
}

/// Fully resolved loader configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub phase: PhaseSelection,
    pub authors_dump: Option<PathBuf>,
    pub works_dump: Option<PathBuf>,
    pub database_path: PathBuf,
    pub phase_attempts: u32,
    pub log_level: String,
}

impl LoaderConfig {
    /// Merge command line and TOML settings, then validate them for the selected phases
    pub fn resolve(args: &CliArgs, toml: &TomlConfig) -> Result<Self> {
        let config = Self {
            phase: args.phase,
            authors_dump: args.authors_dump.clone().or_else(|| toml.authors_dump.clone()),
            works_dump: args.works_dump.clone().or_else(|| toml.works_dump.clone()),
            database_path: args
                .database
                .clone()
                .or_else(|| toml.database_path.clone())
                .unwrap_or_else(default_database_path),
            phase_attempts: args.phase_attempts.unwrap_or(toml.phase_attempts),
            log_level: args
                .log_level
                .clone()
                .unwrap_or_else(|| toml.logging.level.clone()),
        };

        if config.phase_attempts == 0 {
            return Err(Error::InvalidInput(
                "phase_attempts must be at least 1".to_string(),
            ));
        }

        match config.phase {
            PhaseSelection::All => {
                config.authors_dump()?;
                config.works_dump()?;
            }
            PhaseSelection::Authors => {
                config.authors_dump()?;
            }
            PhaseSelection::Works => {
                if !args.assume_authors_loaded {
                    return Err(Error::InvalidInput(
                        "--phase works needs --assume-authors-loaded: the works phase resolves \
                         author names against the store"
                            .to_string(),
                    ));
                }
                config.works_dump()?;
            }
        }

        Ok(config)
    }

    pub fn authors_dump(&self) -> Result<&Path> {
        self.authors_dump.as_deref().ok_or_else(|| {
            Error::Config(
                "Authors dump not configured. Use --authors-dump, READS_AUTHORS_DUMP, \
                 or authors_dump in the TOML config"
                    .to_string(),
            )
        })
    }

    pub fn works_dump(&self) -> Result<&Path> {
        self.works_dump.as_deref().ok_or_else(|| {
            Error::Config(
                "Works dump not configured. Use --works-dump, READS_WORKS_DUMP, \
                 or works_dump in the TOML config"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["reads-loader"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).expect("arguments should parse")
    }

    fn toml_with_dumps() -> TomlConfig {
        TomlConfig {
            authors_dump: Some(PathBuf::from("/toml/authors.txt")),
            works_dump: Some(PathBuf::from("/toml/works.txt")),
            database_path: Some(PathBuf::from("/toml/catalog.db")),
            phase_attempts: 2,
            ..TomlConfig::default()
        }
    }

    #[test]
    fn test_toml_values_used_when_cli_silent() {
        let config = LoaderConfig::resolve(&args(&[]), &toml_with_dumps()).unwrap();

        assert_eq!(config.authors_dump, Some(PathBuf::from("/toml/authors.txt")));
        assert_eq!(config.works_dump, Some(PathBuf::from("/toml/works.txt")));
        assert_eq!(config.database_path, PathBuf::from("/toml/catalog.db"));
        assert_eq!(config.phase_attempts, 2);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.phase, PhaseSelection::All);
    }

    #[test]
    fn test_cli_overrides_toml() {
        let cli = args(&[
            "--authors-dump",
            "/cli/authors.txt",
            "--database",
            "/cli/catalog.db",
            "--phase-attempts",
            "5",
            "--log-level",
            "debug",
        ]);

        let config = LoaderConfig::resolve(&cli, &toml_with_dumps()).unwrap();

        assert_eq!(config.authors_dump, Some(PathBuf::from("/cli/authors.txt")));
        assert_eq!(config.works_dump, Some(PathBuf::from("/toml/works.txt")));
        assert_eq!(config.database_path, PathBuf::from("/cli/catalog.db"));
        assert_eq!(config.phase_attempts, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_database_falls_back_to_default() {
        let cli = args(&["--authors-dump", "a.txt", "--works-dump", "w.txt"]);

        let config = LoaderConfig::resolve(&cli, &TomlConfig::default()).unwrap();

        assert_eq!(config.database_path, default_database_path());
        assert_eq!(config.phase_attempts, 1);
    }

    #[test]
    fn test_missing_works_dump_is_config_error_for_full_run() {
        let cli = args(&["--authors-dump", "a.txt"]);

        let result = LoaderConfig::resolve(&cli, &TomlConfig::default());

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("Works dump")));
    }

    #[test]
    fn test_authors_phase_needs_only_authors_dump() {
        let cli = args(&["--phase", "authors", "--authors-dump", "a.txt"]);

        let config = LoaderConfig::resolve(&cli, &TomlConfig::default()).unwrap();

        assert_eq!(config.phase, PhaseSelection::Authors);
        assert!(config.works_dump.is_none());
    }

    #[test]
    fn test_works_phase_requires_assertion() {
        let without = args(&["--phase", "works", "--works-dump", "w.txt"]);
        let with = args(&["--phase", "works", "--works-dump", "w.txt", "--assume-authors-loaded"]);

        assert!(matches!(
            LoaderConfig::resolve(&without, &TomlConfig::default()),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(
            LoaderConfig::resolve(&with, &TomlConfig::default()).unwrap().phase,
            PhaseSelection::Works
        );
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let cli = args(&["--phase-attempts", "0"]);

        assert!(matches!(
            LoaderConfig::resolve(&cli, &toml_with_dumps()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let cli = args(&["--config", "/etc/reads/custom.toml"]);
        assert_eq!(cli.config_path(), Some(PathBuf::from("/etc/reads/custom.toml")));
    }
}
