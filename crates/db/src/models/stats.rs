//! Aggregate catalog counts.

use serde::Serialize;
use sqlx::FromRow;

/// Live row counts of the three catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct CatalogStats {
    pub books: i64,
    pub authors: i64,
    pub genres: i64,
}
