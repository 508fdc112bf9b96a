use chrono::{DateTime, Utc};

/// SbomMetadata value object: who generated the document, when, and its run-unique serial number
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    generated_at: DateTime<Utc>,
    tool_vendor: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_vendor: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            generated_at,
            tool_vendor,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Generation time in UTC with second precision (`2024-01-01T00:00:00Z`)
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    pub fn tool_vendor(&self) -> &str {
        &self.tool_vendor
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
