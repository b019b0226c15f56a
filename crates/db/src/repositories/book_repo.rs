//! Repository for the `books` table.

use bookshelf_core::book_form::{AuthorChoice, BookDraft, GenreChoice};
use bookshelf_core::types::DbId;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::book::{Book, BookDetail, CreateBook};
use crate::repositories::{AuthorRepo, GenreRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author_id, genre_id, year, annotation, review, cover, \
                       created_at, updated_at";

/// Book columns joined with the author and genre names.
const DETAIL_SELECT: &str = "\
    SELECT b.id, b.title, b.author_id, a.name AS author_name, \
           b.genre_id, g.name AS genre_name, b.year, b.annotation, b.review, \
           b.cover, b.created_at, b.updated_at \
    FROM books b \
    JOIN authors a ON a.id = b.author_id \
    LEFT JOIN genres g ON g.id = b.genre_id";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Total number of books in the catalog.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
    }

    /// One page of the catalog, newest first. Ties on `created_at` fall back
    /// to descending id so the order is stable across requests.
    pub async fn list_page(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BookDetail>, sqlx::Error> {
        let query =
            format!("{DETAIL_SELECT} ORDER BY b.created_at DESC, b.id DESC LIMIT ? OFFSET ?");
        sqlx::query_as::<_, BookDetail>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a book by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = ?");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a book with its author and genre names resolved.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<BookDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE b.id = ?");
        sqlx::query_as::<_, BookDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a book whose author and genre ids are already known.
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO books
                (title, author_id, genre_id, year, annotation, review, cover, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.genre_id)
            .bind(input.year)
            .bind(&input.annotation)
            .bind(&input.review)
            .bind(&input.cover)
            .bind(now)
            .bind(now)
            .fetch_one(conn)
            .await
    }

    /// Insert a book unless one with the same title already exists.
    ///
    /// Returns `None` when a book with that title was already present.
    pub async fn create_if_title_absent(
        conn: &mut SqliteConnection,
        input: &CreateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO books
                (title, author_id, genre_id, year, annotation, review, cover, created_at, updated_at)
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (SELECT 1 FROM books WHERE title = ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.genre_id)
            .bind(input.year)
            .bind(&input.annotation)
            .bind(&input.review)
            .bind(&input.cover)
            .bind(now)
            .bind(now)
            .bind(&input.title)
            .fetch_optional(conn)
            .await
    }

    /// Create a book from a validated form draft.
    ///
    /// Fetch-or-create of a typed author or genre name and the book insert
    /// run in one transaction, so a failed insert leaves no orphan author.
    pub async fn create(
        pool: &SqlitePool,
        draft: &BookDraft,
        cover: Option<&str>,
    ) -> Result<Book, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (author_id, genre_id) = resolve_references(&mut *tx, draft).await?;
        let input = CreateBook {
            title: draft.title.clone(),
            author_id,
            genre_id,
            year: draft.year,
            annotation: draft.annotation.clone(),
            review: draft.review.clone(),
            cover: cover.map(str::to_string),
        };
        let book = Self::insert(&mut *tx, &input).await?;

        tx.commit().await?;
        Ok(book)
    }

    /// Overwrite a book from a validated form draft.
    ///
    /// `cover` of `None` keeps the stored cover. Returns `None` if the book
    /// does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        draft: &BookDraft,
        cover: Option<&str>,
    ) -> Result<Option<Book>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (author_id, genre_id) = resolve_references(&mut *tx, draft).await?;
        let query = format!(
            "UPDATE books SET
                title = ?,
                author_id = ?,
                genre_id = ?,
                year = ?,
                annotation = ?,
                review = ?,
                cover = COALESCE(?, cover),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(&draft.title)
            .bind(author_id)
            .bind(genre_id)
            .bind(draft.year)
            .bind(&draft.annotation)
            .bind(&draft.review)
            .bind(cover)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        match book {
            Some(book) => {
                tx.commit().await?;
                Ok(Some(book))
            }
            // Dropping the transaction rolls back any author/genre it created.
            None => Ok(None),
        }
    }

    /// Delete a book. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Turn the draft's author and genre choices into row ids, creating rows
/// for typed names as needed.
async fn resolve_references(
    conn: &mut SqliteConnection,
    draft: &BookDraft,
) -> Result<(DbId, Option<DbId>), sqlx::Error> {
    let author_id = match &draft.author {
        AuthorChoice::Existing(id) => *id,
        AuthorChoice::New(name) => AuthorRepo::get_or_create(&mut *conn, name).await?.0.id,
    };
    let genre_id = match &draft.genre {
        GenreChoice::Unset => None,
        GenreChoice::Existing(id) => Some(*id),
        GenreChoice::New(name) => Some(GenreRepo::get_or_create(&mut *conn, name).await?.0.id),
    };
    Ok((author_id, genre_id))
}
