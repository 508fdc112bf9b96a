//! risx-mssp-sbom - SBOM aggregator for the Risx-MSSP platform
//!
//! This library collects dependency and infrastructure metadata for the
//! multi-repository Risx-MSSP platform and renders it as a CycloneDX 1.5
//! document and a Markdown report, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Component records, embedded catalogs and parsers
//! - **Application Layer** (`application`): The generation use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, git, console and formatter implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use risx_mssp_sbom::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     GitRepositoryFetcher::new(Duration::from_secs(120))?,
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SbomRequest::builder()
//!     .env_file("setup_platform/resources/default.env")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let model = SbomReadModelBuilder::build(
//!     &response.components,
//!     &response.metadata,
//!     &response.repositories,
//! );
//! println!("{}", CycloneDxFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{CycloneDxFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::git::GitRepositoryFetcher;
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        EnvironmentReader, ManifestReader, OutputPresenter, ProgressReporter, RepositoryFetcher,
        SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Component, ComponentKind, Ecosystem, EnvironmentDefaults, PackageUrl, SbomMetadata, Scope,
    };
    pub use crate::sbom_generation::services::{ManifestParser, SbomGenerator};
    pub use crate::shared::Result;
}
