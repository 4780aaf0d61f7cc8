//! Record extractor
//!
//! Dump lines carry a metadata prefix (type, key, revision, timestamp, tab
//! separated) before the JSON payload. The payload starts at the first `{`.

use crate::error::RecordError;
use serde_json::Value;

/// Strip the non-JSON prefix and parse the remainder as one JSON document
pub fn extract_record(line: &str) -> Result<Value, RecordError> {
    let start = line.find('{').ok_or(RecordError::MissingJsonStart)?;
    let document = serde_json::from_str(&line[start..])?;
    Ok(document)
}

/// Text form of a field
///
/// Strings are returned as-is; numbers, booleans, objects and arrays as their
/// compact JSON text. Absent and `null` fields default to empty.
pub fn opt_string(document: &Value, field: &str) -> String {
    match document.get(field) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Remove a path-like key prefix (`/authors/OL1A` → `OL1A`)
///
/// A key without the prefix is kept whole.
pub fn strip_key_prefix(key: &str, prefix: &str) -> String {
    key.strip_prefix(prefix).unwrap_or(key).to_string()
}
