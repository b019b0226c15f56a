//! Genre entity model.

use bookshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A genre together with the number of books referencing it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GenreWithCount {
    pub id: DbId,
    pub name: String,
    pub book_count: i64,
}
