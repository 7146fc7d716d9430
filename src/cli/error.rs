//! CLI-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot render config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => exitcode::DATAERR,
            CliError::FileNotFound(_) => exitcode::NOINPUT,
            CliError::Io { .. } => exitcode::IOERR,
            CliError::Config(_) | CliError::Serialize(_) => exitcode::CONFIG,
            CliError::Usage(_) => exitcode::USAGE,
        }
    }
}
