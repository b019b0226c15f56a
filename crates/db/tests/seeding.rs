//! Integration tests for the sample-catalog loader.

use assert_matches::assert_matches;
use bookshelf_core::book_form::{AuthorChoice, BookDraft, GenreChoice};
use bookshelf_core::seed_data::{AUTHORS, BOOKS, GENRES};
use bookshelf_db::repositories::{BookRepo, StatsRepo};
use bookshelf_db::seed::{SeedOutcome, SeedReport, Seeder};
use sqlx::SqlitePool;

async fn add_book(pool: &SqlitePool, title: &str) {
    let draft = BookDraft {
        title: title.to_string(),
        author: AuthorChoice::New("Local Author".into()),
        genre: GenreChoice::Unset,
        year: 2001,
        annotation: String::new(),
        review: String::new(),
    };
    BookRepo::create(pool, &draft, None).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_catalog_gets_full_dataset(pool: SqlitePool) {
    let outcome = Seeder::seed_if_sparse(&pool).await.unwrap();
    assert_eq!(
        outcome,
        SeedOutcome::Seeded(SeedReport {
            authors_created: AUTHORS.len() as u32,
            genres_created: GENRES.len() as u32,
            books_created: BOOKS.len() as u32,
        })
    );

    let stats = StatsRepo::counts(&pool).await.unwrap();
    assert_eq!((stats.authors, stats.genres, stats.books), (15, 10, 20));
}

#[sqlx::test(migrations = "./migrations")]
async fn second_run_is_skipped(pool: SqlitePool) {
    Seeder::seed_if_sparse(&pool).await.unwrap();
    let outcome = Seeder::seed_if_sparse(&pool).await.unwrap();
    assert_matches!(outcome, SeedOutcome::Skipped { existing_books: 20 });
}

#[sqlx::test(migrations = "./migrations")]
async fn sparse_catalog_keeps_existing_rows_and_skips_known_titles(pool: SqlitePool) {
    add_book(&pool, "Dune").await;
    add_book(&pool, "Fahrenheit 451").await;

    let outcome = Seeder::seed_if_sparse(&pool).await.unwrap();
    let SeedOutcome::Seeded(report) = outcome else {
        panic!("expected seeding, got {outcome:?}");
    };
    // "Fahrenheit 451" already existed, so one sample book is skipped.
    assert_eq!(report.books_created, BOOKS.len() as u32 - 1);
    assert_eq!(BookRepo::count(&pool).await.unwrap(), 21);
}

#[sqlx::test(migrations = "./migrations")]
async fn threshold_stops_seeding(pool: SqlitePool) {
    for i in 0..5 {
        add_book(&pool, &format!("Book {i}")).await;
    }
    let outcome = Seeder::seed_if_sparse(&pool).await.unwrap();
    assert_matches!(outcome, SeedOutcome::Skipped { existing_books: 5 });
    assert_eq!(StatsRepo::counts(&pool).await.unwrap().authors, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn seed_quietly_reports_outcome(pool: SqlitePool) {
    assert_matches!(Seeder::seed_quietly(&pool).await, Some(SeedOutcome::Seeded(_)));
    assert_matches!(
        Seeder::seed_quietly(&pool).await,
        Some(SeedOutcome::Skipped { .. })
    );
}
