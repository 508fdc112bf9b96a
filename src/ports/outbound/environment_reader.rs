use crate::shared::Result;
use std::path::Path;

/// EnvironmentReader port for reading the environment defaults file
pub trait EnvironmentReader {
    /// Reads the raw `KEY=VALUE` file at `path`
    ///
    /// # Errors
    /// Returns `SbomError::EnvFileNotFound` when the file does not exist, or a
    /// read error when it cannot be read. Callers treat both as recoverable.
    fn read_environment(&self, path: &Path) -> Result<String>;
}
