//! Aggregate counts for the statistics page.

use sqlx::SqlitePool;

use crate::models::stats::CatalogStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Count books, authors and genres in a single round trip.
    pub async fn counts(pool: &SqlitePool) -> Result<CatalogStats, sqlx::Error> {
        sqlx::query_as::<_, CatalogStats>(
            "SELECT
                (SELECT COUNT(*) FROM books)   AS books,
                (SELECT COUNT(*) FROM authors) AS authors,
                (SELECT COUNT(*) FROM genres)  AS genres",
        )
        .fetch_one(pool)
        .await
    }
}
