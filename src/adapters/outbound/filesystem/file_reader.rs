use crate::ports::outbound::{EnvironmentReader, ManifestReader};
use crate::sbom_generation::domain::Ecosystem;
use crate::shared::error::SbomError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both EnvironmentReader and ManifestReader ports.
/// Every read goes through the symlink and size checks in `shared::security`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentReader for FileSystemReader {
    fn read_environment(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::EnvFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        read_checked_file(path, "environment defaults file").map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(
        &self,
        repository_path: &Path,
        repository: &str,
        ecosystem: Ecosystem,
    ) -> Result<String> {
        let manifest = ecosystem.manifest_file();
        let manifest_path = repository_path.join(manifest);

        if !manifest_path.exists() {
            return Err(SbomError::ManifestNotFound {
                repository: repository.to_string(),
                manifest: manifest.to_string(),
            }
            .into());
        }

        read_checked_file(&manifest_path, manifest).map_err(|e| {
            SbomError::FileReadError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
