use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::sanitize;

/// Writes classified files into `<root>/<category>/<filename>`.
///
/// A file with the same name in the same category is overwritten; there is
/// no conflict renaming.
pub struct FileStorage {
    output_directory: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Creates the output root if it does not exist yet.
    pub fn ensure_root(&self) -> Result<(), StorageError> {
        self.ensure_directory(&self.output_directory)
    }

    pub fn store(
        &self,
        category: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<PathBuf, StorageError> {
        for component in [category, filename] {
            if !sanitize::is_single_component(component) {
                return Err(StorageError::InvalidPathComponent(component.to_string()));
            }
        }

        self.ensure_root()?;

        let dir_path = self.output_directory.join(category);
        self.ensure_directory(&dir_path)?;

        let file_path = dir_path.join(filename);
        std::fs::write(&file_path, content).map_err(|e| StorageError::WriteFile {
            path: file_path.clone(),
            source: e,
        })?;

        Ok(file_path)
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StorageError> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
