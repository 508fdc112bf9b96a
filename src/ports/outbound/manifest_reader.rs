use crate::sbom_generation::domain::Ecosystem;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading a fetched repository's dependency manifest
pub trait ManifestReader {
    /// Reads the manifest for `ecosystem` at the root of `repository_path`
    ///
    /// # Arguments
    /// * `repository_path` - Local checkout of the repository
    /// * `repository` - Repository name, used in error messages
    /// * `ecosystem` - Selects the manifest file name
    ///
    /// # Errors
    /// Returns `SbomError::ManifestNotFound` when the manifest is missing
    fn read_manifest(
        &self,
        repository_path: &Path,
        repository: &str,
        ecosystem: Ecosystem,
    ) -> Result<String>;
}
