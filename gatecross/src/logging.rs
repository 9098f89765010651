//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries call [`init_logging`]
//! once at startup to install a formatted subscriber on stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter, preferring `RUST_LOG` over `default_directive`.
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(default_directive).map_err(|e| LoggingError::InvalidFilter {
        directive: default_directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Output goes to stderr so stdout stays free for results.
pub fn init_logging(default_directive: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Filter directive for a `-v` count, falling back to `configured`.
pub fn directive_for_verbosity(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_is_rejected() {
        // RUST_LOG, when set in the test environment, takes precedence
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("gatecross=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }

    #[test]
    fn test_valid_directive() {
        assert!(build_filter("gatecross=debug,warn").is_ok());
    }

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(directive_for_verbosity(0, "warn"), "warn");
        assert_eq!(directive_for_verbosity(1, "warn"), "info");
        assert_eq!(directive_for_verbosity(2, "warn"), "debug");
        assert_eq!(directive_for_verbosity(7, "warn"), "trace");
    }
}
