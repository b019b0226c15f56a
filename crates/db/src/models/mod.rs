//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any joined or aggregated read shapes and write DTOs.

pub mod author;
pub mod book;
pub mod genre;
pub mod stats;
pub mod user;
