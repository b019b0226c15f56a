//! Cover image checks and storage naming.
//!
//! Uploads are identified by sniffing their magic bytes rather than trusting
//! the client-supplied filename or content type. Stored covers are
//! content-addressed so re-uploading the same image reuses the same file.

use image::ImageFormat;
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Directory (relative to the media root) that holds uploaded covers.
pub const COVER_DIR: &str = "book_covers";

const MSG_EMPTY_UPLOAD: &str = "The submitted file is empty.";
const MSG_NOT_AN_IMAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";

/// Image formats accepted as book covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl CoverFormat {
    pub fn extension(self) -> &'static str {
        match self {
            CoverFormat::Png => "png",
            CoverFormat::Jpeg => "jpg",
            CoverFormat::Gif => "gif",
            CoverFormat::WebP => "webp",
        }
    }
}

/// Identify the image format of an uploaded cover.
pub fn sniff_cover(bytes: &[u8]) -> Result<CoverFormat, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation(MSG_EMPTY_UPLOAD.to_string()));
    }
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => Ok(CoverFormat::Png),
        Ok(ImageFormat::Jpeg) => Ok(CoverFormat::Jpeg),
        Ok(ImageFormat::Gif) => Ok(CoverFormat::Gif),
        Ok(ImageFormat::WebP) => Ok(CoverFormat::WebP),
        _ => Err(CoreError::Validation(MSG_NOT_AN_IMAGE.to_string())),
    }
}

/// Relative storage path for a cover: `book_covers/<sha256>.<ext>`.
pub fn cover_relative_path(bytes: &[u8], format: CoverFormat) -> String {
    let digest = Sha256::digest(bytes);
    format!("{COVER_DIR}/{digest:x}.{}", format.extension())
}
