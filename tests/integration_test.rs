/// Integration tests for the application layer
mod test_utilities;

use risx_mssp_sbom::sbom_generation::catalog::{
    CONTAINER_CATALOG, EXTERNAL_DATA_SOURCES, EXTERNAL_REPOSITORIES,
};
use risx_mssp_sbom::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::mocks::*;

const REQUIREMENTS_TXT: &str = "\
# Core
requests==2.31.0
PyYAML>=6.0.1
-r extra.txt

openai
";

const BACKEND_PACKAGE_JSON: &str = r#"{
  "name": "risx-mssp-back",
  "dependencies": {
    "express": "^4.18.2",
    "mysql2": "~3.6.5"
  },
  "devDependencies": {
    "nodemon": ">=3.0.1"
  }
}"#;

const FRONTEND_PACKAGE_JSON: &str = r#"{
  "name": "risx-mssp-front",
  "dependencies": { "react": "^18.2.0" }
}"#;

/// Lays out three fake checkouts the way a clone would leave them
fn create_checkouts(root: &Path) -> MockRepositoryFetcher {
    let checkout = |name: &str, file: &str, content: &str| -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
        dir
    };

    MockRepositoryFetcher::new()
        .with_checkout(
            "risx-mssp-python",
            checkout("risx-mssp-python", "requirements.txt", REQUIREMENTS_TXT),
        )
        .with_checkout(
            "risx-mssp-back",
            checkout("risx-mssp-back", "package.json", BACKEND_PACKAGE_JSON),
        )
        .with_checkout(
            "risx-mssp-front",
            checkout("risx-mssp-front", "package.json", FRONTEND_PACKAGE_JSON),
        )
}

fn request() -> SbomRequest {
    SbomRequest::builder()
        .env_file("setup_platform/resources/default.env")
        .build()
        .unwrap()
}

fn static_count() -> usize {
    CONTAINER_CATALOG.len() + EXTERNAL_REPOSITORIES.len() + EXTERNAL_DATA_SOURCES.len()
}

fn find<'a>(components: &'a [Component], name: &str) -> &'a Component {
    components
        .iter()
        .find(|c| c.name() == name)
        .unwrap_or_else(|| panic!("component {} not collected", name))
}

#[tokio::test]
async fn test_generate_sbom_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let fetcher = create_checkouts(temp_dir.path());
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new("ELASTIC_VERSION=\"8.17.0\"\n# comment\nNGINX_VERSION=1.27.0-alpine\n"),
        fetcher.clone(),
        FileSystemReader::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.components.len(), 3 + 3 + 1 + static_count());
    assert!(response.failed_repositories.is_empty());
    assert_eq!(
        fetcher.fetched_names(),
        vec!["risx-mssp-python", "risx-mssp-back", "risx-mssp-front"]
    );

    let requests = find(&response.components, "requests");
    assert_eq!(requests.bom_ref(), "pkg:pypi/requests@2.31.0");
    assert_eq!(requests.scope(), Some(Scope::Required));

    let openai = find(&response.components, "openai");
    assert_eq!(openai.version(), "latest");

    let nodemon = find(&response.components, "nodemon");
    assert_eq!(nodemon.version(), ">=3.0.1");
    assert_eq!(nodemon.purl(), Some("pkg:npm/nodemon@3.0.1"));
    assert_eq!(nodemon.scope(), Some(Scope::Optional));

    let kibana = find(&response.components, "kibana");
    assert_eq!(kibana.version(), "8.17.0");

    assert!(progress_reporter.warnings().is_empty());
}

#[tokio::test]
async fn test_missing_env_file_uses_catalog_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::missing(),
        create_checkouts(temp_dir.path()),
        FileSystemReader::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(find(&response.components, "nginx").version(), "1.19.3-alpine");
    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("setup_platform/resources/default.env"));
}

#[tokio::test]
async fn test_unreachable_repository_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("risx-mssp-front");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), FRONTEND_PACKAGE_JSON).unwrap();
    let fetcher = MockRepositoryFetcher::new().with_checkout("risx-mssp-front", dir);
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new(""),
        fetcher,
        FileSystemReader::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.components.len(), 1 + static_count());
    assert_eq!(
        response.failed_repositories,
        vec!["risx-mssp-python".to_string(), "risx-mssp-back".to_string()]
    );
    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("https://github.com/10RootOrg/risx-mssp-python"));
}

#[tokio::test]
async fn test_checkout_without_manifest_contributes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("risx-mssp-python");
    fs::create_dir_all(&empty).unwrap();
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new(""),
        MockRepositoryFetcher::new().with_checkout("risx-mssp-python", empty),
        FileSystemReader::new(),
        progress_reporter.clone(),
    );
    let request = SbomRequest::builder()
        .env_file("default.env")
        .skip_repositories(vec!["risx-mssp-back".to_string(), "risx-mssp-front".to_string()])
        .build()
        .unwrap();

    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.components.len(), static_count());
    assert_eq!(
        progress_reporter.warnings(),
        vec!["requirements.txt not found in risx-mssp-python".to_string()]
    );
}

#[tokio::test]
async fn test_json_component_count_matches_markdown_total() {
    let temp_dir = TempDir::new().unwrap();
    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new(""),
        create_checkouts(temp_dir.path()),
        FileSystemReader::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request()).await.unwrap();
    let model = SbomReadModelBuilder::build(
        &response.components,
        &response.metadata,
        &response.repositories,
    );

    let json: Value =
        serde_json::from_str(&FormatterFactory::create(OutputFormat::Json).format(&model).unwrap())
            .unwrap();
    let markdown = FormatterFactory::create(OutputFormat::Markdown)
        .format(&model)
        .unwrap();

    let json_count = json["components"].as_array().unwrap().len();
    assert_eq!(json_count, response.components.len());
    assert!(markdown.contains(&format!("| **Total Components** | **{}** |", json_count)));
    assert!(markdown.contains("| Python Dependencies | 3 |"));
    assert!(markdown.contains("| Node.js Backend Dependencies | 3 |"));
    assert!(markdown.contains("| Node.js Frontend Dependencies | 1 |"));
}

#[tokio::test]
async fn test_serial_numbers_differ_between_runs() {
    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new(""),
        MockRepositoryFetcher::new(),
        FileSystemReader::new(),
        MockProgressReporter::new(),
    );
    let offline = || {
        SbomRequest::builder()
            .env_file("default.env")
            .no_fetch(true)
            .build()
            .unwrap()
    };

    let first = use_case.execute(offline()).await.unwrap();
    let second = use_case.execute(offline()).await.unwrap();

    assert_ne!(first.metadata.serial_number(), second.metadata.serial_number());
    assert_eq!(first.components.len(), static_count());
}

#[tokio::test]
async fn test_scratch_directory_removed_after_run() {
    let fetcher = GitRepositoryFetcher::new(Duration::from_secs(30)).unwrap();
    let scratch = fetcher.scratch_dir().to_path_buf();
    assert!(scratch.is_dir());

    let use_case = GenerateSbomUseCase::new(
        MockEnvironmentReader::new(""),
        fetcher,
        FileSystemReader::new(),
        MockProgressReporter::new(),
    );
    let request = SbomRequest::builder()
        .env_file("default.env")
        .no_fetch(true)
        .build()
        .unwrap();

    use_case.execute(request).await.unwrap();
    drop(use_case);

    assert!(!scratch.exists());
}
