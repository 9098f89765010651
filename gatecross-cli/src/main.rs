//! Gatecross CLI - Command-line interface
//!
//! Finds the instants at which a recorded track crosses a gate line.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::common::{OutputFormatArg, PositionArg};
use commands::config::ConfigCommands;
use error::CliError;
use runner::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "gatecross", version, about = "Detect gate crossings in recorded tracks")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a track for gate crossings
    Scan {
        /// Track file (JSON array of {time, x, y})
        #[arg(long, short)]
        track: PathBuf,

        /// Gate as X1,Y1,X2,Y2 (overrides [gate] in the config file)
        #[arg(long, short, allow_hyphen_values = true)]
        gate: Option<String>,

        /// Treat x/y as longitude/latitude and project to Web Mercator
        #[arg(long)]
        geographic: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Which position to report for each crossing
        #[arg(long, value_enum)]
        position: Option<PositionArg>,

        /// Accept tracks whose timestamps go backwards
        #[arg(long)]
        allow_unordered: bool,
    },

    /// Interpolate the tracked position at an instant
    Position {
        /// Track file (JSON array of {time, x, y})
        #[arg(long, short)]
        track: PathBuf,

        /// Instant in RFC 3339, e.g. 2019-11-07T08:44:49.473Z
        #[arg(long)]
        at: String,

        /// Treat x/y as longitude/latitude and project to Web Mercator
        #[arg(long)]
        geographic: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let global = GlobalArgs {
        config: cli.config_file,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Scan {
            track,
            gate,
            geographic,
            format,
            position,
            allow_unordered,
        } => commands::scan::run(
            &global,
            commands::scan::ScanArgs {
                track,
                gate,
                geographic,
                format,
                position,
                allow_unordered,
            },
        ),
        Commands::Position {
            track,
            at,
            geographic,
            format,
        } => commands::position::run(
            &global,
            commands::position::PositionArgs {
                track,
                at,
                geographic,
                format,
            },
        ),
        Commands::Config { command } => commands::config::run(&global, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_with_negative_gate() {
        let cli = Cli::try_parse_from([
            "gatecross",
            "scan",
            "--track",
            "track.json",
            "--gate",
            "-10.5,3,-10.5,9",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan { gate, .. } => assert_eq!(gate.as_deref(), Some("-10.5,3,-10.5,9")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
