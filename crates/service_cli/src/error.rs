//! CLI error types

use thiserror::Error;

/// Errors surfaced by the refdata CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required file or directory is missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value is invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Flatfile access failed outside the worker pool
    #[error(transparent)]
    Flatfile(#[from] adapter_flatfile::FlatfileError),

    /// Engine run failed
    #[error(transparent)]
    Engine(#[from] refdata_engine::EngineError),
}

/// Convenience result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
