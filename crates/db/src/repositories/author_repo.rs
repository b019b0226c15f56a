//! Repository for the `authors` table.

use bookshelf_core::types::DbId;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::author::{Author, AuthorWithCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides lookups and fetch-or-create for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Return the author with exactly this name, inserting it if absent.
    ///
    /// The boolean is `true` when this call created the row. The insert is
    /// guarded by the `uq_authors_name` constraint, so concurrent callers
    /// converge on a single row.
    pub async fn get_or_create(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<(Author, bool), sqlx::Error> {
        let insert = format!(
            "INSERT INTO authors (name, created_at) VALUES (?, ?)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Author>(&insert)
            .bind(name)
            .bind(Utc::now())
            .fetch_optional(&mut *conn)
            .await?;
        if let Some(author) = inserted {
            return Ok((author, true));
        }

        let select = format!("SELECT {COLUMNS} FROM authors WHERE name = ?");
        let existing = sqlx::query_as::<_, Author>(&select)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
        Ok((existing, false))
    }

    /// Find an author by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = ?");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an author by exact name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE name = ?");
        sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all authors alphabetically (case-insensitive).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY name COLLATE NOCASE, id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// List all authors alphabetically with the number of books each has.
    pub async fn list_with_counts(pool: &SqlitePool) -> Result<Vec<AuthorWithCount>, sqlx::Error> {
        sqlx::query_as::<_, AuthorWithCount>(
            "SELECT a.id, a.name, COUNT(b.id) AS book_count
             FROM authors a
             LEFT JOIN books b ON b.author_id = a.id
             GROUP BY a.id, a.name
             ORDER BY a.name COLLATE NOCASE, a.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete an author. Its books are removed by the `ON DELETE CASCADE` rule.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
