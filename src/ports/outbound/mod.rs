/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the filesystem, git and the console.
pub mod environment_reader;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_fetcher;

pub use environment_reader::EnvironmentReader;
pub use formatter::SbomFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_fetcher::RepositoryFetcher;
