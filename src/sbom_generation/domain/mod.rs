pub mod component;
pub mod ecosystem;
pub mod environment;
pub mod package_url;
pub mod sbom_metadata;

pub use component::{
    Component, ComponentBuilder, ComponentKind, Property, Scope, LATEST_VERSION, UNVERSIONED,
};
pub use ecosystem::Ecosystem;
pub use environment::EnvironmentDefaults;
pub use package_url::{PackageUrl, PurlType};
pub use sbom_metadata::SbomMetadata;
