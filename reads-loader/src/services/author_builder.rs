//! Author builder

use super::record_extractor::{opt_string, strip_key_prefix};
use reads_common::Author;
use serde_json::Value;

/// Prefix on author keys in the dump
pub const AUTHOR_KEY_PREFIX: &str = "/authors/";

/// Map an author document to an [`Author`]
///
/// Never fails: a missing `key` yields an empty id and missing names default
/// to empty. Whether an empty id may be persisted is the phase's decision.
pub fn build_author(document: &Value) -> Author {
    Author {
        id: strip_key_prefix(&opt_string(document, "key"), AUTHOR_KEY_PREFIX),
        name: opt_string(document, "name"),
        personal_name: opt_string(document, "personal_name"),
    }
}
