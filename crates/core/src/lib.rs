//! Domain logic for the bookshelf catalog.
//!
//! Everything in this crate is free of database and HTTP dependencies:
//! form validation rules, pagination arithmetic, cover image checks, and the
//! fixed sample dataset used by the seeder.

pub mod book_form;
pub mod covers;
pub mod error;
pub mod pagination;
pub mod seed_data;
pub mod types;
