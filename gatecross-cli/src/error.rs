//! CLI error type.

use thiserror::Error;

use gatecross::config::ConfigError;
use gatecross::logging::LoggingError;
use gatecross::reader::ReaderError;
use gatecross::GeometryError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The track file could not be read.
    #[error("Failed to read track: {0}")]
    Track(#[from] ReaderError),

    /// The gate or track geometry is unusable.
    #[error("{0}")]
    Geometry(#[from] GeometryError),

    /// Logging could not be set up.
    #[error("{0}")]
    Logging(#[from] LoggingError),

    /// Results could not be serialized.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}
