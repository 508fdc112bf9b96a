//! Domain layer: component records, the embedded catalogs and the pure
//! services that turn manifests and catalogs into components.
pub mod catalog;
pub mod domain;
pub mod services;
