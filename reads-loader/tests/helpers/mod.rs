//! Test Helper Utilities
//!
//! Shared utilities for reads-loader integration tests

#![allow(dead_code)]

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create temporary test database with tables created
///
/// Returns (TempDir, SqlitePool) - TempDir must be kept alive for duration of test
pub async fn create_test_db() -> Result<(TempDir, SqlitePool)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test_catalog.db");

    let pool = reads_common::db::init_database(&db_path).await?;

    Ok((temp_dir, pool))
}

/// Write a dump file, one entry per line
pub fn write_dump(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("Failed to write dump");
    path
}

/// Dump line for an author, with the usual metadata prefix
pub fn author_line(id: &str, name: &str) -> String {
    format!(
        "/type/author\t/authors/{id}\t1\t2008-04-01T03:28:50.625462\t{{\"key\": \"/authors/{id}\", \"name\": \"{name}\"}}"
    )
}

/// Dump line for a work with the given author ids
pub fn work_line(id: &str, title: &str, author_ids: &[&str]) -> String {
    let authors = author_ids
        .iter()
        .map(|a| format!("{{\"author\": {{\"key\": \"/authors/{a}\"}}}}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "/type/work\t/works/{id}\t1\t2009-12-11T01:57:19.964652\t{{\"key\": \"/works/{id}\", \"title\": \"{title}\", \"authors\": [{authors}], \"created\": {{\"value\": \"2009-12-11T01:57:19.964652\"}}}}"
    )
}

/// Author row without timestamps: (id, name, personal_name)
pub type AuthorRow = (String, String, String);

/// Book row without timestamps, sequence columns as stored JSON text
pub type BookRow = (String, String, Option<String>, String, String, String, Option<String>);

/// Snapshot of both tables, ignoring timestamps
pub async fn store_snapshot(pool: &SqlitePool) -> (Vec<AuthorRow>, Vec<BookRow>) {
    let authors = sqlx::query_as(
        "SELECT id, name, personal_name FROM authors ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .unwrap();

    let books = sqlx::query_as(
        "SELECT id, title, description, cover_ids, author_ids, author_names, published_date FROM books ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .unwrap();

    (authors, books)
}
