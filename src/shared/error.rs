use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Both output files were written
    Success = 0,
    /// Unrecoverable error (output directory, file I/O, invalid config)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM aggregation.
///
/// Fetch and manifest variants are recoverable: the use case turns them into
/// warnings. Write, path and validation variants abort the run.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Environment defaults file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    #[error("{manifest} not found in {repository}")]
    ManifestNotFound {
        repository: String,
        manifest: String,
    },

    #[error("Failed to parse {manifest} in {repository}\nDetails: {details}")]
    ManifestParseError {
        repository: String,
        manifest: String,
        details: String,
    },

    #[error("Failed to clone {url}: {details}")]
    FetchFailed { url: String, details: String },

    #[error("Timeout cloning {url} (gave up after {}s)", timeout.as_secs())]
    FetchTimeout { url: String, timeout: Duration },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project root: {path}\nReason: {reason}\n\n💡 Hint: Run from the platform checkout or pass --project-root")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for domain constructors and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
