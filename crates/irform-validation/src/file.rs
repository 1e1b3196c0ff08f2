//! Uploaded-file validators

use serde::{Deserialize, Serialize};

/// What the file validators need to know about an upload.
pub trait FileMeta {
    /// Size in bytes
    fn size(&self) -> u64;

    /// Declared MIME type, e.g. `image/png`
    fn mime_type(&self) -> &str;
}

/// Plain description of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

impl FileMeta for FileInfo {
    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// File size must lie in `min..=max` bytes. No file is valid.
pub fn is_valid_file_size<F: FileMeta>(file: Option<&F>, min: u64, max: u64) -> bool {
    file.map_or(true, |f| (min..=max).contains(&f.size()))
}

/// Declared MIME type must be one of `allowed`. No file is valid.
pub fn is_valid_file_type<F: FileMeta, S: AsRef<str>>(file: Option<&F>, allowed: &[S]) -> bool {
    file.map_or(true, |f| {
        allowed.iter().any(|mime| mime.as_ref() == f.mime_type())
    })
}

/// Every file must satisfy [`is_valid_file_size`]. An empty batch is valid.
pub fn are_valid_files_size<F: FileMeta>(files: &[F], min: u64, max: u64) -> bool {
    files.iter().all(|f| is_valid_file_size(Some(f), min, max))
}

/// Every file must satisfy [`is_valid_file_type`]. An empty batch is valid.
pub fn are_valid_files_type<F: FileMeta, S: AsRef<str>>(files: &[F], allowed: &[S]) -> bool {
    files.iter().all(|f| is_valid_file_type(Some(f), allowed))
}
