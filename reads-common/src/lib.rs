//! # Reads Common Library
//!
//! Shared code for the catalog loader:
//! - Catalog entity models (Author, Book)
//! - Database bootstrap and table creation
//! - Bootstrap TOML configuration and default paths
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{Author, Book};
pub use error::{Error, Result};
