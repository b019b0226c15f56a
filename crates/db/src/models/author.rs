//! Author entity model.

use bookshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// An author together with the number of books referencing it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuthorWithCount {
    pub id: DbId,
    pub name: String,
    pub book_count: i64,
}
