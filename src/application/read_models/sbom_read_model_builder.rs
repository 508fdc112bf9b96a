//! Builder for constructing SbomReadModel from domain objects
//!
//! This module provides the builder that transforms domain objects into
//! the query-optimized read model.

use super::component_view::{ComponentView, PropertyView};
use super::sbom_read_model::{ApplicationView, RepositoryView, SbomMetadataView, SbomReadModel};
use crate::sbom_generation::catalog::{ChildRepository, PlatformDescriptor, PLATFORM};
use crate::sbom_generation::domain::{Component, SbomMetadata};
use chrono::Local;

/// Builder for constructing SbomReadModel from domain objects
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds a SbomReadModel from domain objects
    ///
    /// # Arguments
    /// * `components` - Every collected component, in collection order
    /// * `metadata` - SBOM metadata (timestamp, tool info, serial number)
    /// * `repositories` - Child repositories the run covered
    pub fn build(
        components: &[Component],
        metadata: &SbomMetadata,
        repositories: &[ChildRepository],
    ) -> SbomReadModel {
        SbomReadModel {
            metadata: Self::build_metadata(metadata),
            application: Self::build_application(&PLATFORM),
            components: components.iter().map(Self::build_component).collect(),
            repositories: repositories.iter().map(Self::build_repository).collect(),
        }
    }

    /// Converts domain metadata to view representation
    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp(),
            generated_date: metadata
                .generated_at()
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string(),
            tool_vendor: metadata.tool_vendor().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
        }
    }

    fn build_application(platform: &PlatformDescriptor) -> ApplicationView {
        ApplicationView {
            bom_ref: platform.bom_ref.to_string(),
            name: platform.name.to_string(),
            version: platform.version.to_string(),
            description: platform.description.to_string(),
            license: platform.license.to_string(),
            website: platform.website.to_string(),
            vcs: platform.vcs.to_string(),
        }
    }

    fn build_component(component: &Component) -> ComponentView {
        ComponentView {
            kind: component.kind(),
            bom_ref: component.bom_ref().to_string(),
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: component.purl().map(str::to_string),
            scope: component.scope().map(|s| s.as_str().to_string()),
            group: component.group().to_string(),
            description: component.description().to_string(),
            properties: component
                .properties()
                .iter()
                .map(|p| PropertyView {
                    name: p.name.clone(),
                    value: p.value.clone(),
                })
                .collect(),
        }
    }

    fn build_repository(repository: &ChildRepository) -> RepositoryView {
        RepositoryView {
            name: repository.name.to_string(),
            url: repository.url.to_string(),
            title: repository.title.to_string(),
            kind_description: repository.kind_description.to_string(),
        }
    }
}
