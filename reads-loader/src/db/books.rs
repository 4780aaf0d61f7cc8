//! Book database operations
//!
//! Sequence columns (`cover_ids`, `author_ids`, `author_names`) are stored as
//! JSON arrays of strings.

use chrono::NaiveDate;
use reads_common::Book;
use sqlx::types::Json;
use sqlx::{Row, SqlitePool};

/// Save book to database (create or replace by id)
pub async fn save_book(pool: &SqlitePool, book: &Book) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO books (
            id, title, description, cover_ids, author_ids, author_names,
            published_date, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            cover_ids = excluded.cover_ids,
            author_ids = excluded.author_ids,
            author_names = excluded.author_names,
            published_date = excluded.published_date,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(&book.id)
    .bind(&book.title)
    .bind(&book.description)
    .bind(Json(&book.cover_ids))
    .bind(Json(&book.author_ids))
    .bind(Json(&book.author_names))
    .bind(book.published_date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load book by id
pub async fn load_book(pool: &SqlitePool, id: &str) -> Result<Option<Book>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, title, description, cover_ids, author_ids, author_names, published_date
        FROM books
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let cover_ids: Json<Vec<String>> = row.try_get("cover_ids")?;
    let author_ids: Json<Vec<String>> = row.try_get("author_ids")?;
    let author_names: Json<Vec<String>> = row.try_get("author_names")?;
    let published_date: Option<NaiveDate> = row.try_get("published_date")?;

    Ok(Some(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        cover_ids: cover_ids.0,
        author_ids: author_ids.0,
        author_names: author_names.0,
        published_date,
    }))
}

/// Count stored books
pub async fn count_books(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
}
