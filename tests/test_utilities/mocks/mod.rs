/// Mock implementations for testing
mod mock_environment_reader;
mod mock_progress_reporter;
mod mock_repository_fetcher;

pub use mock_environment_reader::MockEnvironmentReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_fetcher::MockRepositoryFetcher;
