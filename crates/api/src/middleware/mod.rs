//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- requires a logged-in user, else redirects to the login form.
//! - [`auth::CurrentUser`] -- the logged-in user if any; never rejects.

pub mod auth;
