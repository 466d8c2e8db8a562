//! Storage of uploaded equipment images

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{AppResult, InputError};

/// Width of the `equipment.image` column
const MAX_IMAGE_NAME: usize = 200;

static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid file name pattern"));

/// File received from the equipment registration form
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name claimed by the client
    pub file_name: String,
    pub bytes: Bytes,
}

/// Reduce a client-supplied file name to a safe storage key.
///
/// Directory components cannot survive: separators become word breaks and
/// leading dots are trimmed, so `../../etc/passwd` becomes `etc_passwd`.
pub fn sanitize_filename(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let joined = ascii
        .replace(['/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    UNSAFE_FILENAME_CHARS
        .replace_all(&joined, "")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

/// Directory holding uploaded images, keyed by sanitized file name
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an uploaded image and return the name it was stored under.
    ///
    /// An empty claimed file name means no file was chosen and nothing is
    /// written. An existing file with the same name is overwritten.
    pub async fn save(&self, image: &UploadedImage) -> AppResult<Option<String>> {
        if image.file_name.trim().is_empty() {
            return Ok(None);
        }

        let name = sanitize_filename(&image.file_name);
        if name.is_empty() {
            return Err(InputError::InvalidFileName(image.file_name.clone()).into());
        }
        if name.len() > MAX_IMAGE_NAME {
            return Err(InputError::TooLong("image", MAX_IMAGE_NAME).into());
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&name), &image.bytes).await?;

        tracing::debug!(file = %name, size = image.bytes.len(), "Stored uploaded image");
        Ok(Some(name))
    }

    /// Remove a stored image. Failures, including a missing file, are logged
    /// and otherwise ignored.
    pub async fn remove(&self, name: &str) {
        let path = self.dir.join(sanitize_filename(name));
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(file = %path.display(), "Removed uploaded image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file = %path.display(), "Uploaded image already gone")
            }
            Err(e) => tracing::warn!(file = %path.display(), "Could not remove uploaded image: {}", e),
        }
    }
}
