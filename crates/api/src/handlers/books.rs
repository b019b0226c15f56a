//! Handlers for browsing and editing books.
//!
//! Listing and detail pages are public. Add, edit and delete require a
//! logged-in user ([`AuthUser`]). Successful writes answer with a 303
//! redirect; an invalid submission re-renders the form with inline errors
//! and status 400, and writes nothing.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use bookshelf_core::book_form::{BookSubmission, FieldErrors, MSG_INVALID_CHOICE};
use bookshelf_core::covers::{sniff_cover, CoverFormat};
use bookshelf_core::error::CoreError;
use bookshelf_core::pagination::{PageWindow, BOOKS_PER_PAGE};
use bookshelf_core::types::DbId;
use bookshelf_db::models::book::{Book, BookDetail};
use bookshelf_db::repositories::{AuthorRepo, BookRepo, GenreRepo};
use bookshelf_db::seed::Seeder;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::forms::{read_book_upload, BookUpload};
use crate::middleware::auth::{AuthUser, CurrentUser};
use crate::query::PageParams;
use crate::state::AppState;
use crate::storage::store_cover;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Pagination controls for the list template.
#[derive(Debug, Serialize)]
struct PageView {
    number: i64,
    num_pages: i64,
    total: i64,
    has_previous: bool,
    has_next: bool,
    previous_number: Option<i64>,
    next_number: Option<i64>,
    start_index: i64,
    end_index: i64,
}

impl From<PageWindow> for PageView {
    fn from(w: PageWindow) -> Self {
        Self {
            number: w.number,
            num_pages: w.num_pages,
            total: w.total,
            has_previous: w.has_previous(),
            has_next: w.has_next(),
            previous_number: w.previous_number(),
            next_number: w.next_number(),
            start_index: w.start_index(),
            end_index: w.end_index(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BookListPage {
    books: Vec<BookDetail>,
    page: PageView,
}

#[derive(Debug, Serialize)]
struct BookPage {
    book: BookDetail,
}

/// One `<option>` of the author or genre select box.
#[derive(Debug, Serialize)]
struct SelectOption {
    id: DbId,
    name: String,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct BookFormPage<'a> {
    heading: &'static str,
    action: String,
    cancel_url: String,
    form: &'a BookSubmission,
    errors: &'a FieldErrors,
    authors: Vec<SelectOption>,
    genres: Vec<SelectOption>,
    current_cover: Option<&'a str>,
}

/// Where a form is posted and what it edits.
#[derive(Debug, Clone, Copy)]
enum FormTarget<'a> {
    Add,
    Edit(&'a Book),
}

/// Result of validating and persisting a submission.
enum SaveOutcome {
    Saved(Book),
    Invalid(FieldErrors),
}

// ---------------------------------------------------------------------------
// Public pages
// ---------------------------------------------------------------------------

/// GET /
///
/// Paginated book list, newest first. When auto-seeding is enabled a sparse
/// catalog is filled with the sample dataset before the page is built.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    if state.config.auto_seed {
        Seeder::seed_quietly(&state.pool).await;
    }

    let total = BookRepo::count(&state.pool).await?;
    let window = PageWindow::resolve(params.page.as_deref(), total, BOOKS_PER_PAGE);
    let books = BookRepo::list_page(&state.pool, window.per_page, window.offset()).await?;

    let page = BookListPage {
        books,
        page: window.into(),
    };
    Ok(state.views.page("book_list", "Books", user.username(), page)?)
}

/// GET /books/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let book = find_detail_or_404(&state, id).await?;
    let title = book.title.clone();
    Ok(state
        .views
        .page("book_detail", &title, user.username(), BookPage { book })?)
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

/// GET /books/add
pub async fn add_form(State(state): State<AppState>, user: AuthUser) -> AppResult<Html<String>> {
    render_form(
        &state,
        &user,
        FormTarget::Add,
        &BookSubmission::default(),
        &FieldErrors::default(),
    )
    .await
}

/// POST /books/add
///
/// Create a book; 303 to `/` on success.
pub async fn add_submit(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Multipart,
) -> AppResult<Response> {
    let upload = read_book_upload(multipart).await?;

    match save(&state, FormTarget::Add, &upload).await? {
        SaveOutcome::Saved(book) => {
            tracing::info!(book_id = book.id, user_id = user.user_id, "Book created");
            Ok(Redirect::to("/").into_response())
        }
        SaveOutcome::Invalid(errors) => {
            let html = render_form(&state, &user, FormTarget::Add, &upload.fields, &errors).await?;
            Ok((StatusCode::BAD_REQUEST, html).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /books/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let book = find_or_404(&state, id).await?;
    let prefill = BookSubmission {
        title: book.title.clone(),
        author: book.author_id.to_string(),
        new_author: String::new(),
        genre: book.genre_id.map(|g| g.to_string()).unwrap_or_default(),
        new_genre: String::new(),
        year: book.year.to_string(),
        annotation: book.annotation.clone(),
        review: book.review.clone(),
    };
    render_form(&state, &user, FormTarget::Edit(&book), &prefill, &FieldErrors::default()).await
}

/// POST /books/{id}/edit
///
/// Update a book; 303 to its detail page on success. Submitting without a
/// cover keeps the current one.
pub async fn edit_submit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    let book = find_or_404(&state, id).await?;
    let upload = read_book_upload(multipart).await?;

    match save(&state, FormTarget::Edit(&book), &upload).await? {
        SaveOutcome::Saved(book) => {
            tracing::info!(book_id = book.id, user_id = user.user_id, "Book updated");
            Ok(Redirect::to(&format!("/books/{}", book.id)).into_response())
        }
        SaveOutcome::Invalid(errors) => {
            let html =
                render_form(&state, &user, FormTarget::Edit(&book), &upload.fields, &errors).await?;
            Ok((StatusCode::BAD_REQUEST, html).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /books/{id}/delete
///
/// Confirmation page only; nothing is deleted.
pub async fn delete_confirm(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let book = find_detail_or_404(&state, id).await?;
    Ok(state
        .views
        .page("book_delete", "Delete book", Some(&user.username), BookPage { book })?)
}

/// POST /books/{id}/delete
///
/// Delete the book; 303 to `/`. The cover file is left in place since
/// identical uploads share one file.
pub async fn delete_submit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !BookRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(book_id = id, user_id = user.user_id, "Book deleted");
    Ok(Redirect::to("/"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Book", id })
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Book> {
    BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn find_detail_or_404(state: &AppState, id: DbId) -> AppResult<BookDetail> {
    BookRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Validate a submission and, if everything passes, store the cover and
/// write the book.
///
/// All checks run before anything touches disk or the database, so an
/// invalid submission writes nothing.
async fn save(
    state: &AppState,
    target: FormTarget<'_>,
    upload: &BookUpload,
) -> AppResult<SaveOutcome> {
    let mut errors = FieldErrors::default();

    let draft = match upload.fields.validate_draft() {
        Ok(draft) => Some(draft),
        Err(field_errors) => {
            errors.merge(field_errors);
            None
        }
    };

    check_selected_references(state, &upload.fields, &mut errors).await?;

    let cover = match upload.cover.as_deref() {
        Some(bytes) => match sniff_cover(bytes) {
            Ok(format) => Some((bytes, format)),
            Err(CoreError::Validation(msg)) => {
                errors.add("cover", msg);
                None
            }
            Err(other) => return Err(other.into()),
        },
        None => None,
    };

    let draft = match draft {
        Some(draft) if errors.is_empty() => draft,
        _ => return Ok(SaveOutcome::Invalid(errors)),
    };

    // The file is written before the book row. If the row write then fails
    // the file is left unreferenced; its content-addressed name means a
    // retry of the same upload reuses it.
    let cover_path = match cover {
        Some((bytes, format)) => Some(persist_cover(state, bytes, format).await?),
        None => None,
    };

    let book = match target {
        FormTarget::Add => BookRepo::create(&state.pool, &draft, cover_path.as_deref()).await?,
        FormTarget::Edit(book) => {
            BookRepo::update(&state.pool, book.id, &draft, cover_path.as_deref())
                .await?
                .ok_or_else(|| not_found(book.id))?
        }
    };
    Ok(SaveOutcome::Saved(book))
}

/// Flag selected author/genre ids that parse but do not exist.
async fn check_selected_references(
    state: &AppState,
    fields: &BookSubmission,
    errors: &mut FieldErrors,
) -> AppResult<()> {
    if let Some(id) = selected_id(&fields.author) {
        if AuthorRepo::find_by_id(&state.pool, id).await?.is_none() {
            errors.add("author", MSG_INVALID_CHOICE);
        }
    }
    if let Some(id) = selected_id(&fields.genre) {
        if GenreRepo::find_by_id(&state.pool, id).await?.is_none() {
            errors.add("genre", MSG_INVALID_CHOICE);
        }
    }
    Ok(())
}

fn selected_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}

async fn persist_cover(state: &AppState, bytes: &[u8], format: CoverFormat) -> AppResult<String> {
    store_cover(&state.config.media_root, bytes, format)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store cover: {e}")))
}

async fn render_form(
    state: &AppState,
    user: &AuthUser,
    target: FormTarget<'_>,
    form: &BookSubmission,
    errors: &FieldErrors,
) -> AppResult<Html<String>> {
    let selected_author = selected_id(&form.author);
    let selected_genre = selected_id(&form.genre);

    let authors = AuthorRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|a| SelectOption {
            selected: Some(a.id) == selected_author,
            id: a.id,
            name: a.name,
        })
        .collect();
    let genres = GenreRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|g| SelectOption {
            selected: Some(g.id) == selected_genre,
            id: g.id,
            name: g.name,
        })
        .collect();

    let (heading, action, cancel_url, current_cover) = match target {
        FormTarget::Add => ("Add book", "/books/add".to_string(), "/".to_string(), None),
        FormTarget::Edit(book) => (
            "Edit book",
            format!("/books/{}/edit", book.id),
            format!("/books/{}", book.id),
            book.cover.as_deref(),
        ),
    };

    let page = BookFormPage {
        heading,
        action,
        cancel_url,
        form,
        errors,
        authors,
        genres,
        current_cover,
    };
    Ok(state.views.page("book_form", heading, Some(&user.username), page)?)
}
