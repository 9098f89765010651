//! Configuration CLI commands.
//!
//! Provides `config path` and `config show` for inspecting the settings the
//! other commands will use.

use clap::Subcommand;
use gatecross::config::{config_file_path, ConfigFile};

use crate::error::CliError;
use crate::runner::GlobalArgs;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,
}

/// Run a config subcommand.
pub fn run(global: &GlobalArgs, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(global),
        ConfigCommands::Show => run_show(global),
    }
}

/// Show the configuration file path.
fn run_path(global: &GlobalArgs) -> Result<(), CliError> {
    let path = match &global.config {
        Some(path) => path.clone(),
        None => config_file_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

/// Show the effective configuration as INI.
fn run_show(global: &GlobalArgs) -> Result<(), CliError> {
    let config = match &global.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    print!("{}", render(&config)?);
    Ok(())
}

fn render(config: &ConfigFile) -> Result<String, CliError> {
    let mut buf = Vec::new();
    config
        .to_ini()
        .write_to(&mut buf)
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
