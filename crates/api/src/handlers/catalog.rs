//! Read-only catalog pages: statistics and the author/genre listings.

use axum::extract::State;
use axum::response::Html;
use bookshelf_db::repositories::{AuthorRepo, GenreRepo, StatsRepo};
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// GET /statistics
///
/// Live counts of books, authors and genres.
pub async fn statistics(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let stats = StatsRepo::counts(&state.pool).await?;
    let html = state
        .views
        .page("statistics", "Statistics", user.username(), json!({ "stats": stats }))?;
    Ok(html)
}

/// GET /authors
pub async fn authors(State(state): State<AppState>, user: CurrentUser) -> AppResult<Html<String>> {
    let authors = AuthorRepo::list_with_counts(&state.pool).await?;
    let html = state
        .views
        .page("authors", "Authors", user.username(), json!({ "authors": authors }))?;
    Ok(html)
}

/// GET /genres
pub async fn genres(State(state): State<AppState>, user: CurrentUser) -> AppResult<Html<String>> {
    let genres = GenreRepo::list_with_counts(&state.pool).await?;
    let html = state
        .views
        .page("genres", "Genres", user.username(), json!({ "genres": genres }))?;
    Ok(html)
}
