mod container_resolver;
mod manifest_parser;
mod package_json_parser;
mod requirements_parser;
mod sbom_generator;
mod static_components;

pub use container_resolver::ContainerResolver;
pub use manifest_parser::ManifestParser;
pub use package_json_parser::PackageJsonParser;
pub use requirements_parser::{Requirement, RequirementsParser};
pub use sbom_generator::SbomGenerator;
pub use static_components::{
    StaticComponents, EXTERNAL_DATA_SOURCES_GROUP, EXTERNAL_REPOSITORIES_GROUP,
};
