/// The two artifacts written by every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable CycloneDX 1.5 JSON
    Json,
    /// Human-readable Markdown report
    Markdown,
}

impl OutputFormat {
    /// Every format, in the order the files are written
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Markdown];

    /// File name inside the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "sbom.json",
            OutputFormat::Markdown => "SBOM.md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
