//! Loads the sample catalog into a sparse database.
//!
//! Seeding is explicit: nothing in the repository layer triggers it. Callers
//! (the book list route, startup, the admin CLI) decide when to run it.

use std::collections::HashMap;

use bookshelf_core::seed_data::{self, SeedBook};
use bookshelf_core::types::DbId;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::models::book::CreateBook;
use crate::repositories::{AuthorRepo, BookRepo, GenreRepo};

/// Rows created by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub authors_created: u32,
    pub genres_created: u32,
    pub books_created: u32,
}

/// What [`Seeder::seed_if_sparse`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already had enough books.
    Skipped { existing_books: i64 },
    Seeded(SeedReport),
}

pub struct Seeder;

impl Seeder {
    /// Load the sample dataset if the catalog holds fewer than
    /// [`seed_data::SEED_THRESHOLD`] books.
    ///
    /// The whole pass runs in one transaction. Authors and genres are matched
    /// by exact name and books by title, so repeated or concurrent runs
    /// never duplicate rows.
    pub async fn seed_if_sparse(pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
        let existing_books = BookRepo::count(pool).await?;
        if !seed_data::should_seed(existing_books) {
            return Ok(SeedOutcome::Skipped { existing_books });
        }
        Self::load(pool).await.map(SeedOutcome::Seeded)
    }

    /// Like [`Self::seed_if_sparse`], but a failure is logged and swallowed so
    /// that a page view never fails because sample data could not load.
    pub async fn seed_quietly(pool: &SqlitePool) -> Option<SeedOutcome> {
        match Self::seed_if_sparse(pool).await {
            Ok(outcome) => {
                if let SeedOutcome::Seeded(report) = outcome {
                    tracing::info!(
                        authors = report.authors_created,
                        genres = report.genres_created,
                        books = report.books_created,
                        "Sample catalog loaded",
                    );
                }
                Some(outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load sample catalog");
                None
            }
        }
    }

    async fn load(pool: &SqlitePool) -> Result<SeedReport, sqlx::Error> {
        let mut report = SeedReport::default();
        let mut tx = pool.begin().await?;

        let mut author_ids: HashMap<&str, DbId> = HashMap::new();
        for name in seed_data::AUTHORS {
            let (author, created) = AuthorRepo::get_or_create(&mut *tx, name).await?;
            report.authors_created += u32::from(created);
            author_ids.insert(name, author.id);
        }

        let mut genre_ids: HashMap<&str, DbId> = HashMap::new();
        for name in seed_data::GENRES {
            let (genre, created) = GenreRepo::get_or_create(&mut *tx, name).await?;
            report.genres_created += u32::from(created);
            genre_ids.insert(name, genre.id);
        }

        for book in &seed_data::BOOKS {
            let Some(input) = seed_row(book, &author_ids, &genre_ids) else {
                tracing::warn!(title = book.title, "Seed book references unknown author");
                continue;
            };
            if BookRepo::create_if_title_absent(&mut *tx, &input).await?.is_some() {
                report.books_created += 1;
            }
        }

        tx.commit().await?;
        tracing::debug!(?report, "Seed transaction committed");
        Ok(report)
    }
}

fn seed_row(
    book: &SeedBook,
    author_ids: &HashMap<&str, DbId>,
    genre_ids: &HashMap<&str, DbId>,
) -> Option<CreateBook> {
    let author_id = *author_ids.get(book.author)?;
    Some(CreateBook {
        title: book.title.to_string(),
        author_id,
        genre_id: genre_ids.get(book.genre).copied(),
        year: book.year,
        annotation: book.annotation.to_string(),
        review: book.review.to_string(),
        cover: None,
    })
}
