use crate::ports::outbound::RepositoryFetcher;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;

/// Upper bound for a single clone
pub const DEFAULT_CLONE_TIMEOUT: Duration = Duration::from_secs(120);

/// GitRepositoryFetcher adapter that shallow-clones repositories with the `git` CLI
///
/// All checkouts live in one scratch directory owned by the fetcher.
/// Dropping the fetcher removes the directory and everything cloned into it,
/// whether the run finished, returned early with an error, or panicked.
///
/// Clones are hardened: hooks and templates are disabled, and only the
/// default branch tip is fetched. A clone that exceeds the timeout is killed.
pub struct GitRepositoryFetcher {
    scratch: TempDir,
    timeout: Duration,
}

impl GitRepositoryFetcher {
    /// Creates the scratch directory under the system temp dir
    ///
    /// # Errors
    /// Returns an error if the scratch directory cannot be created
    pub fn new(timeout: Duration) -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix("sbom-")
            .tempdir()
            .map_err(|e| anyhow::anyhow!("Failed to create scratch directory: {}", e))?;

        Ok(Self { scratch, timeout })
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn checkout_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(SbomError::Validation {
                message: format!("Invalid checkout directory name: '{}'", name),
            }
            .into());
        }
        Ok(self.scratch.path().join(name))
    }

    fn clone_command(url: &str, destination: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.env("GIT_TEMPLATE_DIR", "")
            .env("GIT_TERMINAL_PROMPT", "0")
            .args([
                "clone",
                "--depth",
                "1",
                "--single-branch",
                "--no-tags",
                "-c",
                "core.hooksPath=/dev/null",
                "-c",
                "advice.detachedHead=false",
                "--quiet",
            ])
            .arg(url)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl RepositoryFetcher for GitRepositoryFetcher {
    async fn fetch(&self, url: &str, name: &str) -> Result<PathBuf> {
        let destination = self.checkout_path(name)?;

        let child = Self::clone_command(url, &destination)
            .spawn()
            .map_err(|e| SbomError::FetchFailed {
                url: url.to_string(),
                details: format!("could not run git: {}", e),
            })?;

        // Dropping the timed-out future drops the child, which kills it
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| SbomError::FetchTimeout {
                url: url.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|e| SbomError::FetchFailed {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SbomError::FetchFailed {
                url: url.to_string(),
                details: format!("git exited with {}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        Ok(destination)
    }
}
