pub mod auth;
pub mod books;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the HTML route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        book list (?page=)
/// /books/add               add form, create (requires login)
/// /books/{id}              detail
/// /books/{id}/edit         edit form, update (requires login)
/// /books/{id}/delete       confirmation, delete (requires login)
///
/// /statistics              catalog counts
/// /authors                 authors with book counts
/// /genres                  genres with book counts
///
/// /login                   login form, login (?next=)
/// /logout                  logout (POST)
/// ```
///
/// `/health` and `/media/*` are mounted separately by the router builder.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(books::router())
        .merge(catalog::router())
        .merge(auth::router())
}
