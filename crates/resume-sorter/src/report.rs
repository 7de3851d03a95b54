//! Batch results: the filename → category table and its CSV export.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StorageError;

/// Column headers of the results table and CSV.
pub const RESULT_COLUMNS: [&str; 2] = ["filename", "category"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub filename: String,
    pub category: String,
}

/// A file that was skipped because its extension is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWarning {
    pub filename: String,
    pub message: String,
}

/// A supported file that could not be extracted, scored or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: String,
    pub started_at: DateTime<Utc>,
    pub results: Vec<ClassificationResult>,
    pub warnings: Vec<BatchWarning>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            started_at: Utc::now(),
            results: Vec::new(),
            warnings: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Renders the results as a plain-text table with aligned columns.
    pub fn render_table(&self) -> String {
        let filename_width = self
            .results
            .iter()
            .map(|r| r.filename.chars().count())
            .chain(std::iter::once(RESULT_COLUMNS[0].len()))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&format!(
            "{:<width$}  {}\n",
            RESULT_COLUMNS[0],
            RESULT_COLUMNS[1],
            width = filename_width
        ));
        for result in &self.results {
            output.push_str(&format!(
                "{:<width$}  {}\n",
                result.filename,
                result.category,
                width = filename_width
            ));
        }
        output
    }

    /// Serializes the results as UTF-8 CSV with a `filename,category` header.
    pub fn to_csv(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        // Header is written explicitly so an empty batch still has one.
        writer.write_record(RESULT_COLUMNS)?;
        for result in &self.results {
            writer.serialize(result)?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), StorageError> {
        let bytes = self.to_csv().map_err(|e| StorageError::WriteFile {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path, bytes).map_err(|e| StorageError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
