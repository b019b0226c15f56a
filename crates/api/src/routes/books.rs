//! Route definitions for books.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// ```text
/// GET         /                    -> list
/// GET, POST   /books/add           -> add_form, add_submit
/// GET         /books/{id}          -> detail
/// GET, POST   /books/{id}/edit     -> edit_form, edit_submit
/// GET, POST   /books/{id}/delete   -> delete_confirm, delete_submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list))
        .route("/books/add", get(books::add_form).post(books::add_submit))
        .route("/books/{id}", get(books::detail))
        .route(
            "/books/{id}/edit",
            get(books::edit_form).post(books::edit_submit),
        )
        .route(
            "/books/{id}/delete",
            get(books::delete_confirm).post(books::delete_submit),
        )
}
