//! Shared command setup: configuration loading and logging.

use std::path::PathBuf;

use gatecross::config::ConfigFile;
use gatecross::logging::{directive_for_verbosity, init_logging};
use tracing::debug;

use crate::error::CliError;

/// Options accepted by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub verbose: u8,
}

/// Loads configuration and installs logging before a command runs.
pub struct CliRunner {
    config: ConfigFile,
}

impl CliRunner {
    /// Load the config file and start logging.
    pub fn new(global: &GlobalArgs) -> Result<Self, CliError> {
        let config = match &global.config {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let directive = directive_for_verbosity(global.verbose, &config.logging.level);
        init_logging(&directive)?;
        debug!(filter = %directive, "Logging initialized");

        Ok(Self { config })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }
}
