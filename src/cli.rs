use clap::Parser;
use std::path::PathBuf;

/// Generate a CycloneDX SBOM and Markdown report for the Risx-MSSP platform
#[derive(Parser, Debug)]
#[command(name = "risx-mssp-sbom")]
#[command(version)]
#[command(
    about = "Generate a CycloneDX SBOM and Markdown report for the Risx-MSSP platform",
    long_about = None
)]
pub struct Args {
    /// Directory for sbom.json and SBOM.md (defaults to <project-root>/sbom)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Root of the Risx-MSSP platform checkout
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Path to a config file (defaults to risx-mssp-sbom.config.yml in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not clone child repositories; report catalog components only
    #[arg(long)]
    pub no_fetch: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
