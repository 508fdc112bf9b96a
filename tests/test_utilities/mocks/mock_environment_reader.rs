use risx_mssp_sbom::prelude::*;
use risx_mssp_sbom::shared::error::SbomError;
use std::path::Path;

/// Mock EnvironmentReader serving fixed content, or "not found" when empty
pub struct MockEnvironmentReader {
    pub content: Option<String>,
}

impl MockEnvironmentReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl EnvironmentReader for MockEnvironmentReader {
    fn read_environment(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(SbomError::EnvFileNotFound {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}
