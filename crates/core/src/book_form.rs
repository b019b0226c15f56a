//! Validation rules for the add/edit book form.
//!
//! A [`BookSubmission`] is the raw, stringly-typed form as posted by the
//! browser. [`BookSubmission::validate_draft`] turns it into a [`BookDraft`]
//! whose author and genre are either references to existing rows or names to
//! fetch-or-create, or into per-field [`FieldErrors`] for inline display.
//!
//! Checks that need the database (does the selected author id exist?) are
//! done by the caller, which appends to the same [`FieldErrors`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::types::DbId;

pub const MAX_TITLE_LEN: usize = 300;
pub const MAX_AUTHOR_NAME_LEN: usize = 200;
pub const MAX_GENRE_NAME_LEN: usize = 100;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";
pub const MSG_AUTHOR_MISSING: &str = "Select an author from the list or enter a new one.";
pub const MSG_INVALID_YEAR: &str = "Enter a whole number.";

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Attach a message to a field. Repeated identical messages are dropped.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        let messages = self.0.entry(field.to_string()).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for one field (empty slice if none).
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fold `validator` errors in, using each error's message (or its code).
    pub fn extend_from_validator(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                self.add(&field, message);
            }
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            for message in messages {
                self.add(&field, message);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Submission and draft
// ---------------------------------------------------------------------------

/// Raw book form fields as submitted. Selects arrive as id strings, empty
/// when nothing is chosen.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct BookSubmission {
    #[validate(length(max = 300, message = "Ensure this value has at most 300 characters."))]
    pub title: String,
    pub author: String,
    #[validate(length(max = 200, message = "Ensure this value has at most 200 characters."))]
    pub new_author: String,
    pub genre: String,
    #[validate(length(max = 100, message = "Ensure this value has at most 100 characters."))]
    pub new_genre: String,
    pub year: String,
    pub annotation: String,
    pub review: String,
}

/// How the book's author is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorChoice {
    Existing(DbId),
    /// Trimmed name to fetch-or-create.
    New(String),
}

/// How the book's genre is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreChoice {
    Unset,
    Existing(DbId),
    /// Trimmed name to fetch-or-create.
    New(String),
}

/// A submission that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: AuthorChoice,
    pub genre: GenreChoice,
    pub year: i32,
    pub annotation: String,
    pub review: String,
}

impl BookSubmission {
    /// Copy of the submission with surrounding whitespace stripped from every field.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            new_author: self.new_author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            new_genre: self.new_genre.trim().to_string(),
            year: self.year.trim().to_string(),
            annotation: self.annotation.trim().to_string(),
            review: self.review.trim().to_string(),
        }
    }

    /// Validate every field and resolve the author/genre choice.
    ///
    /// An author is required: either a selected id or non-empty new-author
    /// text. When neither is given both `author` and `new_author` get an
    /// error. A selected author or genre always wins over typed text.
    pub fn validate_draft(&self) -> Result<BookDraft, FieldErrors> {
        let form = self.normalized();
        let mut errors = FieldErrors::default();

        if let Err(e) = form.validate() {
            errors.extend_from_validator(&e);
        }

        if form.title.is_empty() {
            errors.add("title", MSG_REQUIRED);
        }

        let year = if form.year.is_empty() {
            errors.add("year", MSG_REQUIRED);
            None
        } else {
            match form.year.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    errors.add("year", MSG_INVALID_YEAR);
                    None
                }
            }
        };

        let author_id = parse_choice("author", &form.author, &mut errors);
        let author = match author_id {
            Some(id) => Some(AuthorChoice::Existing(id)),
            None if !form.new_author.is_empty() => Some(AuthorChoice::New(form.new_author.clone())),
            None => {
                errors.add("author", MSG_AUTHOR_MISSING);
                errors.add("new_author", MSG_AUTHOR_MISSING);
                None
            }
        };

        let genre = match parse_choice("genre", &form.genre, &mut errors) {
            Some(id) => GenreChoice::Existing(id),
            None if !form.new_genre.is_empty() => GenreChoice::New(form.new_genre.clone()),
            None => GenreChoice::Unset,
        };

        match (author, year) {
            (Some(author), Some(year)) if errors.is_empty() => Ok(BookDraft {
                title: form.title,
                author,
                genre,
                year,
                annotation: form.annotation,
                review: form.review,
            }),
            _ => Err(errors),
        }
    }
}

/// Parse a select value. Empty means "nothing chosen"; anything that is not
/// a positive integer is recorded as an invalid choice.
fn parse_choice(field: &str, raw: &str, errors: &mut FieldErrors) -> Option<DbId> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, MSG_INVALID_CHOICE);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn submission(title: &str, author: &str, new_author: &str, year: &str) -> BookSubmission {
        BookSubmission {
            title: title.into(),
            author: author.into(),
            new_author: new_author.into(),
            year: year.into(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_author_flags_both_fields() {
        let errors = submission("Dune", "", "", "1965").validate_draft().unwrap_err();
        assert_eq!(errors.get("author"), [MSG_AUTHOR_MISSING]);
        assert_eq!(errors.get("new_author"), [MSG_AUTHOR_MISSING]);
    }

    #[test]
    fn whitespace_only_new_author_counts_as_missing() {
        let errors = submission("Dune", "", "   ", "1965").validate_draft().unwrap_err();
        assert!(errors.has("author"));
        assert!(errors.has("new_author"));
    }

    #[test]
    fn new_author_is_trimmed() {
        let draft = submission("Dune", "", "  Frank Herbert ", "1965")
            .validate_draft()
            .unwrap();
        assert_eq!(draft.author, AuthorChoice::New("Frank Herbert".into()));
        assert_eq!(draft.genre, GenreChoice::Unset);
        assert_eq!(draft.year, 1965);
    }

    #[test]
    fn selected_author_wins_over_typed_name() {
        let draft = submission("Dune", "7", "Someone Else", "1965")
            .validate_draft()
            .unwrap();
        assert_eq!(draft.author, AuthorChoice::Existing(7));
    }

    #[test]
    fn genre_resolution() {
        let mut form = submission("Dune", "1", "", "1965");
        form.new_genre = " Science Fiction ".into();
        assert_eq!(
            form.validate_draft().unwrap().genre,
            GenreChoice::New("Science Fiction".into())
        );

        form.genre = "3".into();
        assert_eq!(form.validate_draft().unwrap().genre, GenreChoice::Existing(3));
    }

    #[test]
    fn garbage_select_value_is_invalid_choice() {
        let errors = submission("Dune", "abc", "Frank Herbert", "1965")
            .validate_draft()
            .unwrap_err();
        assert_eq!(errors.get("author"), [MSG_INVALID_CHOICE]);
        assert!(!errors.has("new_author"));
    }

    #[test]
    fn year_must_be_an_integer() {
        let errors = submission("Dune", "1", "", "nineteen").validate_draft().unwrap_err();
        assert_eq!(errors.get("year"), [MSG_INVALID_YEAR]);

        let errors = submission("Dune", "1", "", "").validate_draft().unwrap_err();
        assert_eq!(errors.get("year"), [MSG_REQUIRED]);
    }

    #[test]
    fn title_is_required_and_bounded() {
        let errors = submission("  ", "1", "", "1965").validate_draft().unwrap_err();
        assert_eq!(errors.get("title"), [MSG_REQUIRED]);

        let long_title = "x".repeat(MAX_TITLE_LEN + 1);
        let errors = submission(&long_title, "1", "", "1965")
            .validate_draft()
            .unwrap_err();
        assert!(errors.has("title"));

        let exact = "я".repeat(MAX_TITLE_LEN);
        assert_matches!(submission(&exact, "1", "", "1965").validate_draft(), Ok(_));
    }

    #[test]
    fn new_author_length_is_bounded() {
        let name = "a".repeat(MAX_AUTHOR_NAME_LEN + 1);
        let errors = submission("Dune", "", &name, "1965").validate_draft().unwrap_err();
        assert!(errors.has("new_author"));
    }

    #[test]
    fn new_genre_length_is_bounded() {
        let mut form = submission("Dune", "1", "", "1965");
        form.new_genre = "g".repeat(MAX_GENRE_NAME_LEN + 1);
        let errors = form.validate_draft().unwrap_err();
        assert!(errors.has("new_genre"));
    }

    #[test]
    fn field_errors_merge_without_duplicates() {
        let mut a = FieldErrors::default();
        a.add("author", MSG_INVALID_CHOICE);
        let mut b = FieldErrors::default();
        b.add("author", MSG_INVALID_CHOICE);
        b.add("cover", "bad image");
        a.merge(b);
        assert_eq!(a.get("author").len(), 1);
        assert_eq!(a.get("cover"), ["bad image"]);
    }
}
