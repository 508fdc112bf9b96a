use risx_mssp_sbom::adapters::outbound::console::StderrProgressReporter;
use risx_mssp_sbom::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use risx_mssp_sbom::adapters::outbound::git::GitRepositoryFetcher;
use risx_mssp_sbom::application::dto::{OutputFormat, SbomRequest, SbomResponse};
use risx_mssp_sbom::application::factories::FormatterFactory;
use risx_mssp_sbom::application::read_models::SbomReadModelBuilder;
use risx_mssp_sbom::application::use_cases::GenerateSbomUseCase;
use risx_mssp_sbom::cli::Args;
use risx_mssp_sbom::config::{discover_config, load_config_from_path, Settings};
use risx_mssp_sbom::ports::outbound::{OutputPresenter, ProgressReporter};
use risx_mssp_sbom::shared::error::{ExitCode, SbomError};
use risx_mssp_sbom::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    validate_project_path(&args.project_root)?;

    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&args.project_root)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(&args, config);

    let request = SbomRequest::builder()
        .env_file(settings.env_file.clone())
        .skip_repositories(settings.skip_repositories.clone())
        .no_fetch(settings.no_fetch)
        .build()?;

    // Create adapters (Dependency Injection). The fetcher owns the scratch
    // directory; it is removed when the use case is dropped, on every path.
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        GitRepositoryFetcher::new(settings.clone_timeout)?,
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    eprintln!("🚀 Starting SBOM generation...");
    let response = use_case.execute(request).await?;
    drop(use_case);

    let reporter = StderrProgressReporter::new();
    let written = write_outputs(&response, &settings.output_dir, &reporter)?;
    report_summary(&response, &written, &reporter);

    Ok(())
}

/// Renders every output format into `output_dir`, creating it if needed
fn write_outputs(
    response: &SbomResponse,
    output_dir: &Path,
    reporter: &StderrProgressReporter,
) -> Result<Vec<PathBuf>> {
    FileSystemWriter::ensure_directory(output_dir)?;

    let model = SbomReadModelBuilder::build(
        &response.components,
        &response.metadata,
        &response.repositories,
    );

    let mut written = Vec::new();
    for format in OutputFormat::ALL {
        reporter.report(FormatterFactory::progress_message(format));

        let content = FormatterFactory::create(format).format(&model)?;
        let writer = FileSystemWriter::new(output_dir.join(format.file_name()));
        writer.present(&content)?;
        written.push(writer.output_path().to_path_buf());
    }

    Ok(written)
}

fn report_summary(response: &SbomResponse, written: &[PathBuf], reporter: &StderrProgressReporter) {
    if !response.failed_repositories.is_empty() {
        reporter.report_warning(&format!(
            "No components collected from: {}",
            response.failed_repositories.join(", ")
        ));
    }

    reporter.report_completion("✅ SBOM generation complete!");
    for path in written {
        reporter.report(&format!("   - {}", path.display()));
    }
    reporter.report(&format!(
        "   - Total components: {}",
        response.components.len()
    ));
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
