//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods that
//! accept `&SqlitePool` (or `&mut SqliteConnection` when the call must be
//! able to join a caller's transaction) as the first argument.

pub mod author_repo;
pub mod book_repo;
pub mod genre_repo;
pub mod stats_repo;
pub mod user_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use genre_repo::GenreRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
