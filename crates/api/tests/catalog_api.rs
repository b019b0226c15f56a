//! Integration tests for the statistics, authors and genres pages.

mod common;

use axum::http::StatusCode;
use bookshelf_core::book_form::{AuthorChoice, BookDraft, GenreChoice};
use bookshelf_db::repositories::{BookRepo, GenreRepo};
use bookshelf_db::seed::Seeder;
use common::{body_text, build_test_app};
use sqlx::SqlitePool;

async fn add_book(pool: &SqlitePool, title: &str, author: &str, genre: Option<&str>) {
    let draft = BookDraft {
        title: title.to_string(),
        author: AuthorChoice::New(author.to_string()),
        genre: genre.map_or(GenreChoice::Unset, |g| GenreChoice::New(g.to_string())),
        year: 2000,
        annotation: String::new(),
        review: String::new(),
    };
    BookRepo::create(pool, &draft, None).await.unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn statistics_on_empty_catalog(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = app.get("/statistics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<dd id=\"stat-books\">0</dd>"));
    assert!(html.contains("<dd id=\"stat-authors\">0</dd>"));
    assert!(html.contains("<dd id=\"stat-genres\">0</dd>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn statistics_after_seeding(pool: SqlitePool) {
    Seeder::seed_if_sparse(&pool).await.unwrap();
    let app = build_test_app(pool);

    let html = body_text(app.get("/statistics").await).await;
    assert!(html.contains("<dd id=\"stat-books\">20</dd>"));
    assert!(html.contains("<dd id=\"stat-authors\">15</dd>"));
    assert!(html.contains("<dd id=\"stat-genres\">10</dd>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authors_are_alphabetical_with_counts(pool: SqlitePool) {
    add_book(&pool, "Emma", "Jane Austen", None).await;
    add_book(&pool, "Persuasion", "Jane Austen", None).await;
    add_book(&pool, "Middlemarch", "George Eliot", None).await;
    let app = build_test_app(pool);

    let response = app.get("/authors").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    let eliot = html
        .find("<td class=\"name\">George Eliot</td><td class=\"count\">1</td>")
        .expect("George Eliot row");
    let austen = html
        .find("<td class=\"name\">Jane Austen</td><td class=\"count\">2</td>")
        .expect("Jane Austen row");
    assert!(eliot < austen);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn genres_include_empty_ones(pool: SqlitePool) {
    add_book(&pool, "Emma", "Jane Austen", Some("Romance")).await;
    {
        let mut conn = pool.acquire().await.unwrap();
        GenreRepo::get_or_create(&mut *conn, "Gothic").await.unwrap();
    }
    let app = build_test_app(pool);

    let html = body_text(app.get("/genres").await).await;
    assert!(html.contains("<td class=\"name\">Gothic</td><td class=\"count\">0</td>"));
    assert!(html.contains("<td class=\"name\">Romance</td><td class=\"count\">1</td>"));
    assert_eq!(html.matches("class=\"genre-row\"").count(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_listings_say_so(pool: SqlitePool) {
    let app = build_test_app(pool);

    assert!(body_text(app.get("/authors").await).await.contains("No authors yet."));
    assert!(body_text(app.get("/genres").await).await.contains("No genres yet."));
}
