use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Vendor recorded in the CycloneDX `metadata.tools` entry
pub const TOOL_VENDOR: &str = "10Root";

/// SbomGenerator service for generating SBOM metadata
///
/// Every call produces a fresh timestamp and a random v4 serial number,
/// so two runs never share a serial.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with current timestamp and unique serial number
    pub fn generate_metadata(tool_vendor: &str, tool_name: &str, tool_version: &str) -> SbomMetadata {
        SbomMetadata::new(
            Utc::now(),
            tool_vendor.to_string(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata for this tool, using the compile-time name and version from Cargo.toml
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(
            TOOL_VENDOR,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }
}
