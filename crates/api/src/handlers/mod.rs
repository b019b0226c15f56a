pub mod auth;
pub mod books;
pub mod catalog;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::error_page;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Fallback for paths no route matches.
pub async fn not_found(State(state): State<AppState>, user: CurrentUser) -> Response {
    let message = "The requested page does not exist.";
    match state.views.page(
        "error",
        "Page not found",
        user.username(),
        json!({ "message": message }),
    ) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render 404 page");
            error_page(StatusCode::NOT_FOUND, message)
        }
    }
}
