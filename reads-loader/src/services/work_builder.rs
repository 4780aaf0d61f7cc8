//! Work builder
//!
//! Maps a work document to a [`Book`]. Every field is extracted before the
//! book is assembled, so a record that fails part-way never yields a
//! half-built entity.
//!
//! Field rules:
//! - `key` is required and must be a non-empty string once `/works/` is removed
//! - `title` defaults to empty
//! - `description` is read only when it is an object (`description.value`)
//! - `covers` elements are coerced to strings, order preserved
//! - `authors[].author.key` ids are resolved to names, index-aligned
//! - `created.value` is an ISO-8601 local date-time (seconds optional) truncated to its date

use super::author_builder::AUTHOR_KEY_PREFIX;
use super::record_extractor::{opt_string, strip_key_prefix};
use super::reference_resolver::AuthorNameResolver;
use crate::error::{BuildError, RecordError};
use chrono::{NaiveDate, NaiveDateTime};
use reads_common::Book;
use serde_json::Value;

/// Prefix on work keys in the dump
pub const WORK_KEY_PREFIX: &str = "/works/";

/// `created.value` layout with seconds; the fractional part is optional
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// `created.value` layout without seconds
const CREATED_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Map a work document to a [`Book`], resolving author names through `resolver`
pub async fn build_book<R>(document: &Value, resolver: &R) -> Result<Book, BuildError>
where
    R: AuthorNameResolver + ?Sized,
{
    let id = work_id(document)?;
    let title = opt_string(document, "title");
    let description = description(document);
    let cover_ids = cover_ids(document);
    let published_date = published_date(document)?;
    let author_ids = author_ids(document)?;

    let mut author_names = Vec::with_capacity(author_ids.len());
    for author_id in &author_ids {
        author_names.push(resolver.resolve(author_id).await?);
    }

    Ok(Book {
        id,
        title,
        description,
        cover_ids,
        author_ids,
        author_names,
        published_date,
    })
}

fn work_id(document: &Value) -> Result<String, RecordError> {
    let key = match document.get("key") {
        Some(Value::String(key)) => key,
        _ => return Err(RecordError::MissingKey("key")),
    };

    let id = strip_key_prefix(key, WORK_KEY_PREFIX);
    if id.is_empty() {
        return Err(RecordError::EmptyId {
            prefix: WORK_KEY_PREFIX,
        });
    }
    Ok(id)
}

fn description(document: &Value) -> Option<String> {
    document
        .get("description")
        .filter(|d| d.is_object())
        .map(|d| opt_string(d, "value"))
}

fn cover_ids(document: &Value) -> Vec<String> {
    match document.get("covers") {
        Some(Value::Array(covers)) => covers
            .iter()
            .map(|cover| match cover {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Author ids in document order
///
/// Entries without an `author` object contribute nothing; a non-object entry
/// makes the whole record malformed.
fn author_ids(document: &Value) -> Result<Vec<String>, RecordError> {
    let Some(Value::Array(entries)) = document.get("authors") else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(RecordError::MalformedAuthorEntry { index });
        }
        if let Some(author) = entry.get("author").filter(|a| a.is_object()) {
            ids.push(strip_key_prefix(&opt_string(author, "key"), AUTHOR_KEY_PREFIX));
        }
    }
    Ok(ids)
}

fn published_date(document: &Value) -> Result<Option<NaiveDate>, RecordError> {
    let Some(created) = document.get("created").filter(|c| c.is_object()) else {
        return Ok(None);
    };

    let value = opt_string(created, "value");
    NaiveDateTime::parse_from_str(&value, CREATED_FORMAT)
        .or_else(|e| NaiveDateTime::parse_from_str(&value, CREATED_FORMAT_MINUTES).map_err(|_| e))
        .map(|timestamp| Some(timestamp.date()))
        .map_err(|source| RecordError::InvalidDate { value, source })
}
