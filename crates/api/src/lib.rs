//! Bookshelf web application library.
//!
//! Exposes the building blocks (config, state, error handling, views, routes)
//! so integration tests and both binaries can access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
pub mod views;
