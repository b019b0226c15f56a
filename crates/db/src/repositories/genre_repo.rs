//! Repository for the `genres` table.

use bookshelf_core::types::DbId;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::genre::{Genre, GenreWithCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides lookups and fetch-or-create for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Return the genre with exactly this name, inserting it if absent.
    ///
    /// The boolean is `true` when this call created the row. The insert is
    /// guarded by the `uq_genres_name` constraint, so concurrent callers
    /// converge on a single row.
    pub async fn get_or_create(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<(Genre, bool), sqlx::Error> {
        let insert = format!(
            "INSERT INTO genres (name, created_at) VALUES (?, ?)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Genre>(&insert)
            .bind(name)
            .bind(Utc::now())
            .fetch_optional(&mut *conn)
            .await?;
        if let Some(genre) = inserted {
            return Ok((genre, true));
        }

        let select = format!("SELECT {COLUMNS} FROM genres WHERE name = ?");
        let existing = sqlx::query_as::<_, Genre>(&select)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
        Ok((existing, false))
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = ?");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All genres, for the book form's select box.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name COLLATE NOCASE, id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// List all genres alphabetically with the number of books each has.
    pub async fn list_with_counts(pool: &SqlitePool) -> Result<Vec<GenreWithCount>, sqlx::Error> {
        sqlx::query_as::<_, GenreWithCount>(
            "SELECT g.id, g.name, COUNT(b.id) AS book_count
             FROM genres g
             LEFT JOIN books b ON b.genre_id = g.id
             GROUP BY g.id, g.name
             ORDER BY g.name COLLATE NOCASE, g.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a genre. Its books survive with `genre_id` set to NULL.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
