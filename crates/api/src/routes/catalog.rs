//! Route definitions for the read-only catalog pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /statistics  -> statistics
/// GET /authors     -> authors
/// GET /genres      -> genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(catalog::statistics))
        .route("/authors", get(catalog::authors))
        .route("/genres", get(catalog::genres))
}
