use crate::sbom_generation::catalog::{ContainerEntry, VersionSource};
use crate::sbom_generation::domain::{
    Component, ComponentKind, EnvironmentDefaults, PackageUrl, PurlType,
};
use crate::shared::Result;

/// Turns the container catalog into container components
pub struct ContainerResolver;

impl ContainerResolver {
    /// Version of `entry`: the environment value when its key is set,
    /// otherwise the declared default. Pinned versions ignore the environment.
    pub fn resolve_version<'a>(entry: &'a ContainerEntry, env: &'a EnvironmentDefaults) -> &'a str {
        match entry.version {
            VersionSource::Pinned(version) => version,
            VersionSource::Environment { key, default } => env.get(key).unwrap_or(default),
        }
    }

    pub fn resolve_entry(entry: &ContainerEntry, env: &EnvironmentDefaults) -> Result<Component> {
        let version = Self::resolve_version(entry, env);
        let image = entry.image.reference();
        let identity = PackageUrl::new(PurlType::Docker, entry.name, version);

        Component::builder(ComponentKind::Container, &identity, entry.name, version)
            .purl(&PackageUrl::docker_image(image, version))
            .group(entry.group)
            .description(entry.description)
            .property("image", image)
            .build()
    }

    /// One component per entry, in catalog order
    pub fn resolve(catalog: &[ContainerEntry], env: &EnvironmentDefaults) -> Result<Vec<Component>> {
        catalog
            .iter()
            .map(|entry| Self::resolve_entry(entry, env))
            .collect()
    }
}
