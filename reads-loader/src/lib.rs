//! reads-loader library interface
//!
//! Loads an authors dump and a works dump into the catalog store. Exposed as
//! a library so the pipeline can be driven from integration tests.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{BuildError, LoadError, LoadResult, RecordError};
pub use crate::models::{LoadReport, Phase, PhaseReport};
pub use crate::services::{AuthorsLoaded, LoadOrchestrator};
