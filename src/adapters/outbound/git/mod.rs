/// Git adapters for fetching child repositories
mod git_fetcher;

pub use git_fetcher::{GitRepositoryFetcher, DEFAULT_CLONE_TIMEOUT};
