use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// RepositoryFetcher port for obtaining a local copy of a source repository
///
/// Fetching is best-effort: the use case turns every error into a warning
/// and carries on without that repository.
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    /// Fetches `url` into a scratch subdirectory called `name`
    ///
    /// # Returns
    /// Local path of the checkout
    ///
    /// # Errors
    /// Returns `SbomError::FetchFailed` or `SbomError::FetchTimeout`
    async fn fetch(&self, url: &str, name: &str) -> Result<PathBuf>;
}
