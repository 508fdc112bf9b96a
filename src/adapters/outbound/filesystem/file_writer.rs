use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::security::reject_existing_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
/// An existing file at the output path is overwritten unless it is a symlink.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Creates `dir` and its parents if missing
    ///
    /// # Errors
    /// Returns `SbomError::FileWriteError` when `dir` is a symlink, is not a
    /// directory, or cannot be created
    pub fn ensure_directory(dir: &Path) -> Result<()> {
        reject_existing_symlink(dir).map_err(|e| SbomError::FileWriteError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        if dir.exists() && !dir.is_dir() {
            return Err(SbomError::FileWriteError {
                path: dir.to_path_buf(),
                details: "Output path exists and is not a directory".to_string(),
            }
            .into());
        }

        fs::create_dir_all(dir).map_err(|e| {
            SbomError::FileWriteError {
                path: dir.to_path_buf(),
                details: format!("Failed to create output directory: {}", e),
            }
            .into()
        })
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SbomError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        reject_existing_symlink(&self.output_path).map_err(|e| SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        fs::write(&self.output_path, content).map_err(|e| SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
