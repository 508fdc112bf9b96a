use crate::shared::Result;

/// OutputPresenter port for presenting final output
pub trait OutputPresenter {
    /// Presents rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing fails (permissions, missing directory, disk space)
    fn present(&self, content: &str) -> Result<()>;
}
