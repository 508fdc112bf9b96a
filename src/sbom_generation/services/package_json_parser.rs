use crate::sbom_generation::catalog::describe;
use crate::sbom_generation::domain::{Component, ComponentKind, Ecosystem, PackageUrl, Scope};
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Characters stripped from the front of a version range to form the locator version
const RANGE_OPERATORS: &[char] = &['^', '~', '>', '=', '<'];

/// The two dependency maps of a `package.json`; everything else is ignored
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
}

/// Parser for Node.js `package.json` manifests
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Strips leading range operators: `^4.18.0` becomes `4.18.0`
    pub fn clean_version(version: &str) -> &str {
        version.trim_start_matches(RANGE_OPERATORS)
    }

    /// Produces one library per entry, `dependencies` first (scope required)
    /// then `devDependencies` (scope optional), each in file order.
    ///
    /// Entries whose version is not a string are skipped. Invalid JSON is an error.
    pub fn parse(content: &str, repository: &str) -> Result<Vec<Component>> {
        let manifest: PackageManifest = serde_json::from_str(content)?;

        let sections = [
            (&manifest.dependencies, Scope::Required),
            (&manifest.dev_dependencies, Scope::Optional),
        ];

        let mut components = Vec::new();
        for (entries, scope) in sections {
            for (name, version) in entries {
                let Some(version) = version.as_str() else {
                    continue;
                };
                components.push(Self::build_component(name, version, scope, repository)?);
            }
        }

        Ok(components)
    }

    fn build_component(
        name: &str,
        version: &str,
        scope: Scope,
        repository: &str,
    ) -> Result<Component> {
        let purl = PackageUrl::npm(name, Self::clean_version(version));
        Component::builder(ComponentKind::Library, &purl, name, version)
            .purl(&purl)
            .scope(scope)
            .group(repository)
            .description(describe(Ecosystem::NodeJs, name))
            .build()
    }
}
