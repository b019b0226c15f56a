//! Book entity model and DTOs.

use bookshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub genre_id: Option<DbId>,
    pub year: i32,
    pub annotation: String,
    pub review: String,
    /// Path of the cover image relative to the media root.
    pub cover: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A book joined with its author and genre names, as shown on list and
/// detail pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookDetail {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub author_name: String,
    pub genre_id: Option<DbId>,
    pub genre_name: Option<String>,
    pub year: i32,
    pub annotation: String,
    pub review: String,
    pub cover: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a book whose author and genre ids are already known.
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author_id: DbId,
    pub genre_id: Option<DbId>,
    pub year: i32,
    pub annotation: String,
    pub review: String,
    pub cover: Option<String>,
}
