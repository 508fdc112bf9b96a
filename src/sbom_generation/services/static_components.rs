use crate::sbom_generation::catalog::{ExternalDataSource, ExternalRepository};
use crate::sbom_generation::domain::{Component, ComponentKind, PackageUrl};
use crate::shared::Result;

pub const EXTERNAL_REPOSITORIES_GROUP: &str = "External Repositories";
pub const EXTERNAL_DATA_SOURCES_GROUP: &str = "External Data Sources";

/// Converts the fixed external repository and data source lists into components
pub struct StaticComponents;

impl StaticComponents {
    /// Library components for repositories cloned by the installer
    pub fn external_repositories(repositories: &[ExternalRepository]) -> Result<Vec<Component>> {
        repositories
            .iter()
            .map(|repo| {
                let purl = PackageUrl::github(repo.source, repo.version);
                Component::builder(ComponentKind::Library, &purl, repo.name, repo.version)
                    .purl(&purl)
                    .group(EXTERNAL_REPOSITORIES_GROUP)
                    .description(repo.purpose)
                    .property("source", repo.source)
                    .build()
            })
            .collect()
    }

    /// Data components for rule sets and reference datasets
    pub fn external_data_sources(sources: &[ExternalDataSource]) -> Result<Vec<Component>> {
        sources
            .iter()
            .map(|source| {
                let purl = PackageUrl::generic(source.name, source.version);
                Component::builder(ComponentKind::Data, &purl, source.name, source.version)
                    .purl(&purl)
                    .group(EXTERNAL_DATA_SOURCES_GROUP)
                    .description(source.purpose)
                    .property("url", source.url)
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::catalog::{EXTERNAL_DATA_SOURCES, EXTERNAL_REPOSITORIES};

    #[test]
    fn test_external_repositories() {
        let components = StaticComponents::external_repositories(EXTERNAL_REPOSITORIES).unwrap();
        assert_eq!(components.len(), EXTERNAL_REPOSITORIES.len());

        let elk = &components[0];
        assert_eq!(elk.kind(), ComponentKind::Library);
        assert_eq!(elk.name(), "docker-elk");
        assert_eq!(elk.version(), "commit 629aea49");
        assert_eq!(elk.bom_ref(), "pkg:github/deviantony/docker-elk@commit 629aea49");
        assert_eq!(elk.group(), "External Repositories");
        assert_eq!(elk.scope(), None);
        assert_eq!(elk.property("source"), Some("deviantony/docker-elk"));
    }

    #[test]
    fn test_external_data_sources() {
        let components = StaticComponents::external_data_sources(EXTERNAL_DATA_SOURCES).unwrap();
        assert_eq!(components.len(), EXTERNAL_DATA_SOURCES.len());

        let yara = &components[0];
        assert_eq!(yara.kind(), ComponentKind::Data);
        assert_eq!(yara.bom_ref(), "pkg:generic/yara-forge-rules@20240922");
        assert_eq!(yara.group(), "External Data Sources");
        assert_eq!(yara.description(), "YARA rules for Strelka file analysis");
        assert_eq!(yara.property("url"), Some("yara-forge/yara-forge-rules"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(StaticComponents::external_repositories(&[]).unwrap().is_empty());
        assert!(StaticComponents::external_data_sources(&[]).unwrap().is_empty());
    }
}
