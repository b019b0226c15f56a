//! Decoding of the multipart book form.

use axum::extract::Multipart;
use bookshelf_core::book_form::BookSubmission;

use crate::error::AppResult;

/// A decoded add/edit submission: the text fields plus the raw cover upload.
#[derive(Debug, Default)]
pub struct BookUpload {
    pub fields: BookSubmission,
    /// `None` when no file was chosen. A chosen but empty file is kept as
    /// `Some` so that validation can report it.
    pub cover: Option<Vec<u8>>,
}

/// Read every part of a `multipart/form-data` book submission.
///
/// Unknown parts are ignored. Size limits are enforced by the router's body
/// limit; exceeding it surfaces as [`crate::error::AppError::Upload`].
pub async fn read_book_upload(mut multipart: Multipart) -> AppResult<BookUpload> {
    let mut upload = BookUpload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        if name == "cover" {
            let has_filename = field.file_name().is_some_and(|f| !f.is_empty());
            let data = field.bytes().await?;
            if has_filename || !data.is_empty() {
                upload.cover = Some(data.to_vec());
            }
            continue;
        }

        let value = field.text().await?;
        let fields = &mut upload.fields;
        match name.as_str() {
            "title" => fields.title = value,
            "author" => fields.author = value,
            "new_author" => fields.new_author = value,
            "genre" => fields.genre = value,
            "new_genre" => fields.new_genre = value,
            "year" => fields.year = value,
            "annotation" => fields.annotation = value,
            "review" => fields.review = value,
            _ => {}
        }
    }

    Ok(upload)
}
