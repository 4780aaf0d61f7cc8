//! Catalog entity models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Author record, keyed by the dump id with the `/authors/` prefix removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    /// Display name (empty when the dump omits it)
    pub name: String,
    /// Personal name (empty when the dump omits it)
    pub personal_name: String,
}

/// Book record built from a work line
///
/// `author_names[i]` is the name `author_ids[i]` resolved to at load time.
/// It is a snapshot: later author changes do not propagate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_ids: Vec<String>,
    pub author_ids: Vec<String>,
    pub author_names: Vec<String>,
    pub published_date: Option<NaiveDate>,
}
