use super::{PackageJsonParser, RequirementsParser};
use crate::sbom_generation::domain::{Component, Ecosystem};
use crate::shared::Result;

/// Selects the parser for a repository's ecosystem
pub struct ManifestParser;

impl ManifestParser {
    pub fn parse(ecosystem: Ecosystem, content: &str, repository: &str) -> Result<Vec<Component>> {
        match ecosystem {
            Ecosystem::Python => RequirementsParser::parse(content, repository),
            Ecosystem::NodeJs => PackageJsonParser::parse(content, repository),
        }
    }
}
