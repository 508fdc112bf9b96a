use crate::sbom_generation::catalog::ChildRepository;
use crate::sbom_generation::domain::{Component, SbomMetadata};

/// SbomResponse - Internal response DTO from the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Every collected component, in collection order
    pub components: Vec<Component>,
    /// Timestamp, tool information and serial number for this run
    pub metadata: SbomMetadata,
    /// Child repositories that were scanned (or attempted)
    pub repositories: Vec<ChildRepository>,
    /// Names of repositories that contributed nothing because a fetch or parse failed
    pub failed_repositories: Vec<String>,
}

impl SbomResponse {
    pub fn new(
        components: Vec<Component>,
        metadata: SbomMetadata,
        repositories: Vec<ChildRepository>,
        failed_repositories: Vec<String>,
    ) -> Self {
        Self {
            components,
            metadata,
            repositories,
            failed_repositories,
        }
    }
}
