//! Query-string parameter types shared by handlers.

use serde::Deserialize;

/// `?page=` on the book list. Kept as a raw string so that garbage input
/// falls back to page 1 instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `?next=` on the login form.
#[derive(Debug, Default, Deserialize)]
pub struct NextParams {
    pub next: Option<String>,
}
