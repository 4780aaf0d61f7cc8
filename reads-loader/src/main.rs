//! reads-loader - Catalog dump loader
//!
//! Loads the authors dump, then the works dump, into the catalog database.
//! Exits non-zero when a phase fails fatally; malformed lines are skipped and
//! reported without failing the run.

use anyhow::{Context, Result};
use clap::Parser;
use reads_common::config::TomlConfig;
use reads_loader::config::{CliArgs, LoaderConfig, PhaseSelection};
use reads_loader::models::LoadReport;
use reads_loader::{AuthorsLoaded, LoadOrchestrator};
use std::time::Instant;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config file is read before tracing starts so its log level applies
    let config_path = args.config_path();
    let toml_config = match &config_path {
        Some(path) => TomlConfig::load_optional(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => None,
    };
    let config_found = toml_config.is_some();
    let toml_config = toml_config.unwrap_or_default();

    let config = LoaderConfig::resolve(&args, &toml_config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .init();

    info!(
        "Starting reads-loader v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_path, config_found) {
        (Some(path), true) => info!("Config file: {}", path.display()),
        (Some(path), false) => warn!("Config file {} not found, using defaults", path.display()),
        (None, _) => warn!("No config directory on this platform, using defaults"),
    }

    info!("Database: {}", config.database_path.display());
    let db_pool = reads_common::db::init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    let orchestrator = LoadOrchestrator::new(db_pool.clone(), config.phase_attempts);
    let start_time = Instant::now();

    let phases = match config.phase {
        PhaseSelection::All => {
            orchestrator
                .execute_load(config.authors_dump()?, config.works_dump()?)
                .await?
                .phases
        }
        PhaseSelection::Authors => {
            let (report, _) = orchestrator.load_authors(config.authors_dump()?).await?;
            vec![report]
        }
        PhaseSelection::Works => {
            // LoaderConfig::resolve only accepts this with --assume-authors-loaded
            let authors = AuthorsLoaded::assume_loaded();
            vec![orchestrator.load_works(config.works_dump()?, &authors).await?]
        }
    };

    let report = LoadReport {
        phases,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    for phase in &report.phases {
        info!(
            "{}: {} lines, {} persisted, {} skipped (attempt {})",
            phase.phase, phase.lines_read, phase.persisted, phase.skipped, phase.attempt
        );
    }

    let authors = reads_loader::db::count_authors(&db_pool).await?;
    let books = reads_loader::db::count_books(&db_pool).await?;
    info!("Store now holds {} authors and {} books", authors, books);

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    db_pool.close().await;
    Ok(())
}
