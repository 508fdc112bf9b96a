use async_trait::async_trait;
use risx_mssp_sbom::prelude::*;
use risx_mssp_sbom::shared::error::SbomError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock RepositoryFetcher that hands out prepared local checkouts
///
/// Repositories without a registered checkout fail like an unreachable remote.
#[derive(Default, Clone)]
pub struct MockRepositoryFetcher {
    checkouts: HashMap<String, PathBuf>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

impl MockRepositoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checkout(mut self, name: &str, path: PathBuf) -> Self {
        self.checkouts.insert(name.to_string(), path);
        self
    }

    pub fn fetched_names(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryFetcher for MockRepositoryFetcher {
    async fn fetch(&self, url: &str, name: &str) -> Result<PathBuf> {
        self.fetched.lock().unwrap().push(name.to_string());

        self.checkouts.get(name).cloned().ok_or_else(|| {
            SbomError::FetchFailed {
                url: url.to_string(),
                details: "repository not found".to_string(),
            }
            .into()
        })
    }
}
