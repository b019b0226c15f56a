//! Handlers for logging staff in and out.

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use bookshelf_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, safe_next, session_cookie};
use crate::auth::jwt::generate_session_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::query::NextParams;
use crate::state::AppState;

const MSG_INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginPage<'a> {
    next: &'a str,
    username: &'a str,
    error: Option<&'a str>,
}

/// GET /login
pub async fn login_form(
    State(state): State<AppState>,
    Query(params): Query<NextParams>,
    user: CurrentUser,
) -> AppResult<Response> {
    let page = LoginPage {
        next: safe_next(params.next.as_deref()),
        username: "",
        error: None,
    };
    let html = state.views.page("login", "Log in", user.username(), page)?;
    Ok(html.into_response())
}

/// POST /login
///
/// Verify credentials, set the session cookie and redirect to `next`.
/// Unknown users, wrong passwords and inactive accounts all get the same
/// message and a 401.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let next = safe_next(input.next.as_deref()).to_string();
    let username = input.username.trim();

    let user = UserRepo::find_by_username(&state.pool, username).await?;
    let authenticated = match &user {
        Some(user) if user.is_active => verify_password(&input.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Unreadable password hash: {e}")))?,
        _ => false,
    };

    let user = match user {
        Some(user) if authenticated => user,
        _ => {
            tracing::info!(username, "Failed login attempt");
            let page = LoginPage {
                next: &next,
                username,
                error: Some(MSG_INVALID_LOGIN),
            };
            let html = state.views.page("login", "Log in", None, page)?;
            return Ok((StatusCode::UNAUTHORIZED, html).into_response());
        }
    };

    let token = generate_session_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;
    let cookie = session_cookie(&token, state.config.jwt.session_max_age_secs());

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(([(SET_COOKIE, cookie)], Redirect::to(&next)).into_response())
}

/// POST /logout
///
/// Clear the session cookie. Safe to call when not logged in.
pub async fn logout(user: CurrentUser) -> Response {
    if let Some(user) = &user.0 {
        tracing::info!(user_id = user.user_id, "User logged out");
    }
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/")).into_response()
}
