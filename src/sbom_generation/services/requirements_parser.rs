use crate::sbom_generation::catalog::describe;
use crate::sbom_generation::domain::{
    Component, ComponentKind, Ecosystem, PackageUrl, Scope, LATEST_VERSION,
};
use crate::shared::Result;
use regex::Regex;
use std::sync::OnceLock;

/// `name`, then an optional run of comparison characters, then the rest as version.
///
/// Extras and environment markers (`pkg[extra]; python_version<"3"`)
/// end up inside the version.
fn requirement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([a-zA-Z0-9_-]+)([<>=!]+)?(.+)?$").expect("requirement pattern is valid")
    })
}

/// A single requirement line split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub operator: Option<String>,
    pub version: String,
}

/// Parser for flat `requirements.txt` manifests
pub struct RequirementsParser;

impl RequirementsParser {
    /// Splits one line, or returns `None` for blanks, `#` comments,
    /// option lines starting with `-`, and lines the pattern rejects.
    pub fn parse_line(line: &str) -> Option<Requirement> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            return None;
        }

        let captures = requirement_pattern().captures(line)?;
        let name = captures.get(1)?.as_str().to_string();
        let operator = captures.get(2).map(|m| m.as_str().to_string());
        let version = captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| LATEST_VERSION.to_string());

        Some(Requirement {
            name,
            operator,
            version,
        })
    }

    /// Produces one required library per accepted line, grouped under `repository`
    pub fn parse(content: &str, repository: &str) -> Result<Vec<Component>> {
        content
            .lines()
            .filter_map(Self::parse_line)
            .map(|requirement| {
                let purl = PackageUrl::pypi(&requirement.name, &requirement.version);
                Component::builder(
                    ComponentKind::Library,
                    &purl,
                    requirement.name.as_str(),
                    requirement.version.as_str(),
                )
                .purl(&purl)
                .scope(Scope::Required)
                .group(repository)
                .description(describe(Ecosystem::Python, &requirement.name))
                .build()
            })
            .collect()
    }
}
