//! Product ingestion service.
//!
//! Validates one admin submission (product fields + bulk redemption keys +
//! optional image), persists the image to the public upload directory, and
//! writes the product and its keys in one transaction.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::db::products::{NewProduct, ProductRepository};
use crate::models::ProductWithKeys;

/// Errors that can occur during product ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Title missing or empty.
    #[error("title is required")]
    MissingTitle,

    /// Price missing, unparseable, or negative.
    #[error("invalid price")]
    InvalidPrice,

    /// The `keys` field was not a JSON array of strings.
    #[error("Invalid keys format")]
    InvalidKeysFormat,

    /// Writing the uploaded image to disk failed.
    #[error("failed to store image: {0}")]
    ImageWrite(#[from] std::io::Error),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// An uploaded image file, as pulled out of the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original client-side file name; sanitized before use.
    pub file_name: String,
    pub data: Vec<u8>,
}

/// One validated-enough admin product submission.
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub is_new: bool,
    /// Raw `keys` form field: a JSON-encoded array of strings.
    pub keys: String,
    pub image: Option<UploadedImage>,
}

/// Product ingestion service.
pub struct IngestService<'a> {
    products: ProductRepository<'a>,
    upload_dir: &'a Path,
}

impl<'a> IngestService<'a> {
    /// Create a new ingestion service writing images under `upload_dir`.
    #[must_use]
    pub const fn new(pool: &'a PgPool, upload_dir: &'a Path) -> Self {
        Self {
            products: ProductRepository::new(pool),
            upload_dir,
        }
    }

    /// Ingest one product submission.
    ///
    /// The image (when present) is written to disk before the database
    /// write. There is no cleanup of the stored file if the insert then
    /// fails; an orphaned upload is harmless and the admin just resubmits.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::MissingTitle` / `InvalidPrice` on field
    /// validation failure, `InvalidKeysFormat` if the keys payload is not
    /// JSON, `ImageWrite` on I/O failure, and `Repository` on database
    /// failure.
    pub async fn ingest(
        &self,
        submission: ProductSubmission,
    ) -> Result<ProductWithKeys, IngestError> {
        if submission.title.trim().is_empty() {
            return Err(IngestError::MissingTitle);
        }
        if submission.price < Decimal::ZERO {
            return Err(IngestError::InvalidPrice);
        }
        if submission
            .original_price
            .is_some_and(|p| p < Decimal::ZERO)
        {
            return Err(IngestError::InvalidPrice);
        }

        let codes = parse_keys_field(&submission.keys)?;

        let image = match submission.image {
            Some(upload) if !upload.data.is_empty() => {
                Some(self.store_image(&upload).await?)
            }
            _ => None,
        };

        let created = self
            .products
            .create_with_keys(
                NewProduct {
                    title: submission.title,
                    description: submission.description,
                    price: submission.price,
                    original_price: submission.original_price,
                    category: submission.category,
                    image,
                    is_new: submission.is_new,
                },
                &codes,
            )
            .await?;

        Ok(created)
    }

    /// Write the image under a timestamped name and return its served path.
    async fn store_image(&self, upload: &UploadedImage) -> Result<String, std::io::Error> {
        let file_name = stored_file_name(Utc::now().timestamp_millis(), &upload.file_name);
        write_upload(self.upload_dir, &file_name, &upload.data).await?;

        Ok(format!("/uploads/{file_name}"))
    }
}

/// Write upload bytes under `dir`, creating the directory if needed.
async fn write_upload(dir: &Path, file_name: &str, data: &[u8]) -> Result<(), std::io::Error> {
    let path: PathBuf = dir.join(file_name);

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, data).await?;

    Ok(())
}

/// Parse the `keys` form field: a JSON-encoded array of strings, each of
/// which may itself hold several newline-delimited codes.
///
/// An empty field means "no keys" rather than malformed input.
///
/// # Errors
///
/// Returns `IngestError::InvalidKeysFormat` when the payload is not a JSON
/// string array.
pub fn parse_keys_field(raw: &str) -> Result<Vec<String>, IngestError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<String> =
        serde_json::from_str(raw).map_err(|_| IngestError::InvalidKeysFormat)?;

    Ok(entries.iter().flat_map(|e| parse_key_lines(e)).collect())
}

/// Split a newline-delimited key list into individual codes.
///
/// Lines are trimmed; blank and whitespace-only lines are dropped.
/// Duplicates pass through untouched and become separate key rows.
pub fn parse_key_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Replace every character outside `[A-Za-z0-9.]` with `_`.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
        .collect()
}

/// Build the on-disk name for an upload: epoch-millisecond prefix plus the
/// sanitized original name.
fn stored_file_name(epoch_millis: i64, original: &str) -> String {
    format!("{epoch_millis}_{}", sanitize_file_name(original))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lines_trim_and_drop_blanks() {
        assert_eq!(
            parse_key_lines("ABC-1\n\nXYZ-2\n  \n"),
            vec!["ABC-1".to_owned(), "XYZ-2".to_owned()]
        );
    }

    #[test]
    fn test_key_lines_keep_duplicates() {
        assert_eq!(
            parse_key_lines("SAME-1\nSAME-1"),
            vec!["SAME-1".to_owned(), "SAME-1".to_owned()]
        );
    }

    #[test]
    fn test_key_lines_empty_input() {
        assert!(parse_key_lines("").is_empty());
        assert!(parse_key_lines("   \n \n").is_empty());
    }

    #[test]
    fn test_keys_field_json_array() {
        let codes = parse_keys_field(r#"["K1","K2\nK3"]"#).unwrap();
        assert_eq!(codes, vec!["K1".to_owned(), "K2".to_owned(), "K3".to_owned()]);
    }

    #[test]
    fn test_keys_field_empty_means_no_keys() {
        assert!(parse_keys_field("").unwrap().is_empty());
    }

    #[test]
    fn test_keys_field_rejects_non_json() {
        assert!(matches!(
            parse_keys_field("ABC-1\nXYZ-2"),
            Err(IngestError::InvalidKeysFormat)
        ));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("cover art (1).png"), "cover_art__1_.png");
        assert_eq!(sanitize_file_name("ok.jpeg"), "ok.jpeg");
    }

    #[test]
    fn test_stored_file_name_has_timestamp_prefix() {
        assert_eq!(
            stored_file_name(1_700_000_000_000, "box art.png"),
            "1700000000000_box_art.png"
        );
    }

    #[tokio::test]
    async fn test_write_upload_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");

        write_upload(&dir, "1_cover.png", b"png bytes").await.unwrap();

        let written = tokio::fs::read(dir.join("1_cover.png")).await.unwrap();
        assert_eq!(written, b"png bytes");
    }
}
