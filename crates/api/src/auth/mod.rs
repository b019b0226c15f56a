//! Staff authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed session tokens.
//! - [`cookie`] -- the session cookie and safe post-login redirects.

pub mod cookie;
pub mod jwt;
pub mod password;
