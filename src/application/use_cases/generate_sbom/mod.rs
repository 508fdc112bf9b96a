use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{
    EnvironmentReader, ManifestReader, ProgressReporter, RepositoryFetcher,
};
use crate::sbom_generation::catalog::{
    ChildRepository, CONTAINER_CATALOG, EXTERNAL_DATA_SOURCES, EXTERNAL_REPOSITORIES,
};
use crate::sbom_generation::domain::{Component, EnvironmentDefaults};
use crate::sbom_generation::services::{
    ContainerResolver, ManifestParser, SbomGenerator, StaticComponents,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the aggregation pipeline using generic
/// dependency injection for all infrastructure dependencies. Stages run
/// strictly in order: environment, child repositories, containers,
/// external repositories, external data sources.
///
/// Only programming errors abort `execute`; a missing environment file,
/// a failed clone or an unreadable manifest is reported as a warning and
/// the stage simply contributes fewer components.
///
/// # Type Parameters
/// * `ER` - EnvironmentReader implementation
/// * `RF` - RepositoryFetcher implementation
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<ER, RF, MR, PR> {
    environment_reader: ER,
    repository_fetcher: RF,
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<ER, RF, MR, PR> GenerateSbomUseCase<ER, RF, MR, PR>
where
    ER: EnvironmentReader,
    RF: RepositoryFetcher,
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        environment_reader: ER,
        repository_fetcher: RF,
        manifest_reader: MR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            environment_reader,
            repository_fetcher,
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Returns
    /// SbomResponse containing every component in collection order
    pub async fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Environment defaults for container versions
        let environment = self.load_environment(&request.env_file);

        // Step 2: Child repository manifests
        let mut components = Vec::new();
        let failed_repositories = self
            .scan_child_repositories(&request, &mut components)
            .await?;

        // Step 3: Container catalog
        self.progress_reporter.report("🐳 Resolving container images...");
        let containers = ContainerResolver::resolve(CONTAINER_CATALOG, &environment)?;
        self.report_count("container image(s)", containers.len());
        components.extend(containers);

        // Step 4: Static external records
        self.progress_reporter
            .report("📦 Adding external repositories...");
        let external_repositories = StaticComponents::external_repositories(EXTERNAL_REPOSITORIES)?;
        self.report_count("external repository(ies)", external_repositories.len());
        components.extend(external_repositories);

        self.progress_reporter
            .report("🗂️  Adding external data sources...");
        let data_sources = StaticComponents::external_data_sources(EXTERNAL_DATA_SOURCES)?;
        self.report_count("external data source(s)", data_sources.len());
        components.extend(data_sources);

        // Step 5: Metadata for this run
        let metadata = SbomGenerator::generate_default_metadata();

        self.progress_reporter
            .report(&format!("✅ Collected {} component(s)", components.len()));

        Ok(SbomResponse::new(
            components,
            metadata,
            request.repositories,
            failed_repositories,
        ))
    }

    /// Loads environment defaults, falling back to an empty map
    fn load_environment(&self, path: &Path) -> EnvironmentDefaults {
        self.progress_reporter.report(&format!(
            "📖 Loading environment defaults from: {}",
            path.display()
        ));

        match self.environment_reader.read_environment(path) {
            Ok(content) => {
                let environment = EnvironmentDefaults::parse(&content);
                self.report_count("environment value(s)", environment.len());
                environment
            }
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "{}; container versions fall back to catalog defaults",
                    e
                ));
                EnvironmentDefaults::new()
            }
        }
    }

    /// Fetches and parses every child repository in order
    ///
    /// # Returns
    /// Names of repositories that contributed nothing because a fetch or parse failed
    async fn scan_child_repositories(
        &self,
        request: &SbomRequest,
        components: &mut Vec<Component>,
    ) -> Result<Vec<String>> {
        if !request.fetch_repositories {
            self.progress_reporter
                .report("⏭️  Skipping child repositories (fetching disabled)");
            return Ok(Vec::new());
        }

        let (to_fetch, skipped): (Vec<&ChildRepository>, Vec<&ChildRepository>) = request
            .repositories
            .iter()
            .partition(|repository| request.should_fetch(repository));

        for repository in skipped {
            self.progress_reporter
                .report(&format!("⏭️  Skipping {} (excluded by configuration)", repository.name));
        }

        let total = to_fetch.len();
        let mut failed = Vec::new();
        for (index, repository) in to_fetch.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(repository.name));

            match self.scan_repository(repository).await {
                Ok(found) => {
                    self.progress_reporter.report(&format!(
                        "   - {}: {} dependency(ies)",
                        repository.name,
                        found.len()
                    ));
                    components.extend(found);
                }
                Err(e) => {
                    self.progress_reporter.report_warning(&e.to_string());
                    failed.push(repository.name.to_string());
                }
            }
        }
        if total > 0 {
            self.progress_reporter.report_progress(total, total, None);
        }

        Ok(failed)
    }

    /// Clones one repository and parses its manifest
    async fn scan_repository(&self, repository: &ChildRepository) -> Result<Vec<Component>> {
        let checkout = self
            .repository_fetcher
            .fetch(repository.url, repository.name)
            .await?;

        let content =
            self.manifest_reader
                .read_manifest(&checkout, repository.name, repository.ecosystem)?;

        ManifestParser::parse(repository.ecosystem, &content, repository.name).map_err(|e| {
            SbomError::ManifestParseError {
                repository: repository.name.to_string(),
                manifest: repository.ecosystem.manifest_file().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn report_count(&self, label: &str, count: usize) {
        self.progress_reporter
            .report(&format!("   - {} {}", count, label));
    }
}
