use crate::sbom_generation::catalog::{ChildRepository, CHILD_REPOSITORIES};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path of the `KEY=VALUE` environment defaults file
    pub env_file: PathBuf,
    /// Child repositories to fetch and parse, in order
    pub repositories: Vec<ChildRepository>,
    /// Names of repositories that must not be fetched
    pub skip_repositories: Vec<String>,
    /// When false, no repository is fetched at all
    pub fetch_repositories: bool,
}

impl SbomRequest {
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::default()
    }

    /// Whether `repository` should be fetched for this run
    pub fn should_fetch(&self, repository: &ChildRepository) -> bool {
        self.fetch_repositories
            && !self
                .skip_repositories
                .iter()
                .any(|name| name == repository.name)
    }
}

/// Builder for [`SbomRequest`]
#[derive(Debug, Default)]
pub struct SbomRequestBuilder {
    env_file: Option<PathBuf>,
    repositories: Option<Vec<ChildRepository>>,
    skip_repositories: Vec<String>,
    no_fetch: bool,
}

impl SbomRequestBuilder {
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Overrides the built-in child repository list
    pub fn repositories(mut self, repositories: Vec<ChildRepository>) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn skip_repositories(mut self, names: Vec<String>) -> Self {
        self.skip_repositories = names;
        self
    }

    pub fn no_fetch(mut self, no_fetch: bool) -> Self {
        self.no_fetch = no_fetch;
        self
    }

    /// # Errors
    /// Returns a validation error when no environment file was given
    pub fn build(self) -> Result<SbomRequest> {
        let env_file = self.env_file.ok_or_else(|| SbomError::Validation {
            message: "env_file is required".to_string(),
        })?;

        Ok(SbomRequest {
            env_file,
            repositories: self
                .repositories
                .unwrap_or_else(|| CHILD_REPOSITORIES.to_vec()),
            skip_repositories: self.skip_repositories,
            fetch_repositories: !self.no_fetch,
        })
    }
}
