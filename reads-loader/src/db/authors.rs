//! Author database operations

use reads_common::Author;
use sqlx::{Row, SqlitePool};

/// Save author to database (create or replace by id)
pub async fn save_author(pool: &SqlitePool, author: &Author) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO authors (id, name, personal_name, created_at, updated_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            personal_name = excluded.personal_name,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(&author.id)
    .bind(&author.name)
    .bind(&author.personal_name)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load author by id
pub async fn load_author(pool: &SqlitePool, id: &str) -> Result<Option<Author>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, personal_name
        FROM authors
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(Author {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            personal_name: row.try_get("personal_name")?,
        })),
        None => Ok(None),
    }
}

/// Load only the display name of an author
pub async fn load_author_name(pool: &SqlitePool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM authors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Count stored authors
pub async fn count_authors(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await
}
