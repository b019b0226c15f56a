//! On-disk storage for uploaded covers.

use std::path::Path;

use bookshelf_core::covers::{cover_relative_path, CoverFormat};

/// Write a cover under `media_root` and return its path relative to the
/// media root (what the `books.cover` column stores).
///
/// Covers are content-addressed, so an identical upload reuses the file
/// already on disk.
pub async fn store_cover(
    media_root: &Path,
    bytes: &[u8],
    format: CoverFormat,
) -> std::io::Result<String> {
    let relative = cover_relative_path(bytes, format);
    let dest = media_root.join(&relative);

    if tokio::fs::try_exists(&dest).await? {
        tracing::debug!(path = %relative, "Cover already stored");
        return Ok(relative);
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&dest, bytes).await?;
    tracing::info!(path = %relative, size = bytes.len(), "Stored cover");

    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR-test-bytes";

    #[tokio::test]
    async fn writes_once_and_reuses() {
        let dir = tempfile::tempdir().unwrap();

        let first = store_cover(dir.path(), PNG, CoverFormat::Png).await.unwrap();
        assert!(first.starts_with("book_covers/"));
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), PNG);

        let second = store_cover(dir.path(), PNG, CoverFormat::Png).await.unwrap();
        assert_eq!(first, second);
    }
}
