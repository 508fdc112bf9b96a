//! SBOM read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all SBOM data in a query-optimized format.

use super::component_view::ComponentView;
use crate::sbom_generation::domain::ComponentKind;

/// Main read model for SBOM data, consumed by both formatters
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    /// The platform the SBOM describes
    pub application: ApplicationView,
    /// Components in collection order
    pub components: Vec<ComponentView>,
    /// Child repositories, in scan order
    pub repositories: Vec<RepositoryView>,
}

impl SbomReadModel {
    /// Components whose group equals `group`, in collection order
    pub fn components_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a ComponentView> + 'a {
        self.components.iter().filter(move |c| c.group == group)
    }

    pub fn components_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &ComponentView> {
        self.components.iter().filter(move |c| c.kind == kind)
    }
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// UTC generation time, `%Y-%m-%dT%H:%M:%SZ`
    pub timestamp: String,
    /// Local generation date, `%Y-%m-%d`
    pub generated_date: String,
    pub tool_vendor: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` serial number
    pub serial_number: String,
}

/// View representation of the top-level application
#[derive(Debug, Clone)]
pub struct ApplicationView {
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    pub website: String,
    pub vcs: String,
}

/// View representation of a scanned child repository
#[derive(Debug, Clone)]
pub struct RepositoryView {
    pub name: String,
    pub url: String,
    pub title: String,
    pub kind_description: String,
}
