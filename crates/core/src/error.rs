use crate::types::DbId;

/// Domain errors surfaced to the HTTP layer as error pages.
///
/// Per-field form problems are not errors in this sense; they travel as
/// [`crate::book_form::FieldErrors`] and re-render the form.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No `entity` row with this id (a book, usually).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected as a whole, e.g. an upload that is not an image.
    #[error("Invalid input: {0}")]
    Validation(String),
}
