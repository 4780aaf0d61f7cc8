//! Reference resolver
//!
//! Turns an author id from a work into the author's display name. A miss is
//! an expected outcome: works may reference authors outside the dump.

use crate::error::LoadResult;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;

/// Name recorded for an author id with no stored author
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Resolves author ids to display names
#[async_trait]
pub trait AuthorNameResolver: Send + Sync {
    /// Stored author's name, or [`UNKNOWN_AUTHOR`] on a miss
    ///
    /// Errors are store failures only and are fatal for the phase.
    async fn resolve(&self, author_id: &str) -> LoadResult<String>;
}

/// Resolver backed by the `authors` table
#[derive(Clone)]
pub struct StoreAuthorResolver {
    db: SqlitePool,
}

impl StoreAuthorResolver {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorNameResolver for StoreAuthorResolver {
    async fn resolve(&self, author_id: &str) -> LoadResult<String> {
        let name = crate::db::authors::load_author_name(&self.db, author_id).await?;
        Ok(name.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()))
    }
}

/// In-memory resolver (id → name)
#[async_trait]
impl AuthorNameResolver for HashMap<String, String> {
    async fn resolve(&self, author_id: &str) -> LoadResult<String> {
        Ok(self
            .get(author_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()))
    }
}
