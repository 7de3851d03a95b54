//! Uploaded documents: a file name plus its raw bytes.
//!
//! The command-line front end plays the part of an upload form. It reads each
//! input path into an [`UploadedFile`], walking directories in file-name order
//! so that a batch always runs in a stable sequence.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ProcessError;
use crate::processor::DocumentFormat;
use crate::sanitize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name including its extension, without any directory part.
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads a file from disk, keeping only its file name.
    pub fn from_path(path: &Path) -> Result<Self, ProcessError> {
        let content = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { name, content })
    }

    /// Extension of the file name, or an empty string when there is none.
    pub fn extension(&self) -> &str {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(self.extension())
    }
}

/// Reads every input into memory. Plain files are taken as-is; directories are
/// walked recursively and their files appended in file-name order.
pub fn collect_uploads(inputs: &[PathBuf]) -> Result<Vec<UploadedFile>, ProcessError> {
    let mut uploads = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            uploads.push(UploadedFile::from_path(input)?);
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| ProcessError::ReadDocument {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| input.clone()),
                source: e.into(),
            })?;

            if entry.file_type().is_file() {
                tracing::debug!(file = %sanitize::redact_path(entry.path()), "Collected upload");
                uploads.push(UploadedFile::from_path(entry.path())?);
            }
        }
    }

    Ok(uploads)
}
