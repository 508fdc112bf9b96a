//! Configuration file support for risx-mssp-sbom.
//!
//! Provides YAML-based configuration through `risx-mssp-sbom.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::git::DEFAULT_CLONE_TIMEOUT;
use crate::cli::Args;
use crate::sbom_generation::catalog::find_child_repository;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "risx-mssp-sbom.config.yml";

/// Environment defaults file, relative to the project root
pub const DEFAULT_ENV_FILE: &str = "setup_platform/resources/default.env";

/// Output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "sbom";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub clone_timeout_secs: Option<u64>,
    pub skip_repositories: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging CLI arguments, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
    pub env_file: PathBuf,
    pub clone_timeout: Duration,
    pub skip_repositories: Vec<String>,
    pub no_fetch: bool,
}

impl Settings {
    /// CLI flags win over config values, which win over built-in defaults.
    /// Relative config paths are resolved against the project root.
    pub fn resolve(args: &Args, config: ConfigFile) -> Self {
        let project_root = args.project_root.clone();

        let output_dir = match (&args.output_dir, config.output_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => project_root.join(dir),
            (None, None) => project_root.join(DEFAULT_OUTPUT_DIR),
        };
        let env_file = project_root.join(config.env_file.unwrap_or_else(|| DEFAULT_ENV_FILE.into()));
        let clone_timeout = config
            .clone_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CLONE_TIMEOUT);

        Self {
            project_root,
            output_dir,
            env_file,
            clone_timeout,
            skip_repositories: config.skip_repositories.unwrap_or_default(),
            no_fetch: args.no_fetch,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.clone_timeout_secs == Some(0) {
        bail!(
            "Invalid config: clone_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            DEFAULT_CLONE_TIMEOUT.as_secs()
        );
    }

    if let Some(ref skip) = config.skip_repositories {
        for (i, name) in skip.iter().enumerate() {
            if find_child_repository(name).is_none() {
                bail!(
                    "Invalid config: skip_repositories[{}] '{}' is not a known child repository.\n\n\
                     💡 Hint: Use one of risx-mssp-python, risx-mssp-back, risx-mssp-front.",
                    i,
                    name
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
