use crate::sbom_generation::domain::Ecosystem;

/// A platform repository whose manifest is cloned and parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRepository {
    pub name: &'static str,
    pub url: &'static str,
    pub ecosystem: Ecosystem,
    /// Heading used for the repository's dependency table
    pub title: &'static str,
    /// What kind of code the repository holds
    pub kind_description: &'static str,
}

/// A third-party repository cloned by the platform installer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalRepository {
    pub name: &'static str,
    /// `owner/repo` on GitHub
    pub source: &'static str,
    /// Tag, or `commit <sha>` for pinned commits
    pub version: &'static str,
    pub purpose: &'static str,
}

/// Rule sets and reference datasets consumed by platform components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalDataSource {
    pub name: &'static str,
    pub url: &'static str,
    pub version: &'static str,
    pub purpose: &'static str,
}

pub const CHILD_REPOSITORIES: &[ChildRepository] = &[
    ChildRepository {
        name: "risx-mssp-python",
        url: "https://github.com/10RootOrg/risx-mssp-python",
        ecosystem: Ecosystem::Python,
        title: "Python Dependencies",
        kind_description: "Python Scripts and Modules",
    },
    ChildRepository {
        name: "risx-mssp-back",
        url: "https://github.com/10RootOrg/risx-mssp-back",
        ecosystem: Ecosystem::NodeJs,
        title: "Node.js Backend Dependencies",
        kind_description: "Node.js/Express Backend API",
    },
    ChildRepository {
        name: "risx-mssp-front",
        url: "https://github.com/10RootOrg/risx-mssp-front",
        ecosystem: Ecosystem::NodeJs,
        title: "Node.js Frontend Dependencies",
        kind_description: "React Frontend Application",
    },
];

pub const EXTERNAL_REPOSITORIES: &[ExternalRepository] = &[
    ExternalRepository {
        name: "docker-elk",
        source: "deviantony/docker-elk",
        version: "commit 629aea49",
        purpose: "ELK stack docker configuration",
    },
    ExternalRepository {
        name: "iris-web",
        source: "dfir-iris/iris-web",
        version: "v2.4.10",
        purpose: "DFIR-IRIS incident response platform",
    },
];

pub const EXTERNAL_DATA_SOURCES: &[ExternalDataSource] = &[
    ExternalDataSource {
        name: "YARA Forge Rules",
        url: "yara-forge/yara-forge-rules",
        version: "20240922",
        purpose: "YARA rules for Strelka file analysis",
    },
    ExternalDataSource {
        name: "Velociraptor Artifacts",
        url: "10RootOrg/Velociraptor-Artifacts",
        version: "main",
        purpose: "Custom Velociraptor artifact definitions",
    },
    ExternalDataSource {
        name: "DFIQ",
        url: "google/dfiq",
        version: "main",
        purpose: "Digital Forensics Investigation Questions",
    },
    ExternalDataSource {
        name: "AllthingsTimesketch Tags",
        url: "blueteam0ps/AllthingsTimesketch",
        version: "latest",
        purpose: "Timesketch tag configurations",
    },
    ExternalDataSource {
        name: "YARA Rules (Bartblaze)",
        url: "bartblaze/YARA-rules",
        version: "main",
        purpose: "Additional YARA rules for Strelka",
    },
];

/// Looks up a child repository by name
pub fn find_child_repository(name: &str) -> Option<&'static ChildRepository> {
    CHILD_REPOSITORIES.iter().find(|repo| repo.name == name)
}
