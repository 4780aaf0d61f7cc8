//! Error types for the loader
//!
//! Errors are split by class. [`LoadError`] is fatal: it ends the current
//! phase and is returned to the orchestrator. [`RecordError`] is
//! record-malformed: the line is dropped, logged, and the phase continues.
//! A store miss while resolving an author is neither; it becomes the sentinel
//! name.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error: aborts the current phase
#[derive(Debug, Error)]
pub enum LoadError {
    /// Dump file missing or unreadable
    #[error("Failed to open dump {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stream failure mid-read (including invalid UTF-8)
    #[error("Failed to read dump {path:?} after line {line}: {source}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// Store write or lookup failed
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// reads-common error
    #[error("Common error: {0}")]
    Common(#[from] reads_common::Error),
}

/// Record-malformed: drop this line, continue the phase
#[derive(Debug, Error)]
pub enum RecordError {
    /// No `{` anywhere on the line
    #[error("no JSON start marker")]
    MissingJsonStart,

    /// Payload after the prefix is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Required field absent or not a string
    #[error("missing required field '{0}'")]
    MissingKey(&'static str),

    /// Identifier empty once its prefix is removed
    #[error("empty identifier (prefix '{prefix}')")]
    EmptyId { prefix: &'static str },

    /// An `authors` entry that is not an object
    #[error("authors[{index}] is not an object")]
    MalformedAuthorEntry { index: usize },

    /// `created.value` is not an ISO-8601 local date-time
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Outcome of building one entity from a document
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Malformed(#[from] RecordError),

    #[error(transparent)]
    Fatal(#[from] LoadError),
}

/// Result type for fatal-capable loader operations
pub type LoadResult<T> = Result<T, LoadError>;
