//! Hand-maintained inventory data embedded in the tool: which repositories
//! to scan, which container images the platform runs, which external
//! repositories and datasets it pulls in, and display purposes for known packages.
pub mod containers;
pub mod platform;
pub mod purposes;
pub mod repositories;

pub use containers::{
    ContainerEntry, ImageSource, VersionSource, CONTAINER_CATALOG, CONTAINER_GROUP_ORDER,
};
pub use platform::{PlatformDescriptor, PLATFORM};
pub use purposes::describe;
pub use repositories::{
    find_child_repository, ChildRepository, ExternalDataSource, ExternalRepository,
    CHILD_REPOSITORIES, EXTERNAL_DATA_SOURCES, EXTERNAL_REPOSITORIES,
};
