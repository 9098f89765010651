//! Position command - interpolate where the tracked object was at an instant.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use gatecross::config::OutputFormat;
use gatecross::reader::{read_track_file, ReadOptions};
use gatecross::track::locate_position;
use serde_json::json;

use super::common::{display_point, format_time, resolve_coordinates, OutputFormatArg};
use crate::error::CliError;
use crate::runner::{CliRunner, GlobalArgs};

/// Arguments for the position command.
pub struct PositionArgs {
    pub track: PathBuf,
    pub at: String,
    pub geographic: bool,
    pub format: Option<OutputFormatArg>,
}

/// Run the position command.
pub fn run(global: &GlobalArgs, args: PositionArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    let config = runner.config();

    let at = parse_instant(&args.at)?;
    let coordinates = resolve_coordinates(args.geographic, config);
    let track = read_track_file(
        &args.track,
        ReadOptions::default().with_coordinates(coordinates),
    )?;

    let point = locate_position(track, at)?.ok_or_else(|| {
        CliError::InvalidArgument(
            "track needs at least two samples with distinct timestamps".to_string(),
        )
    })?;
    let shown = display_point(point, coordinates);

    match args.format.map(Into::into).unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{}\t{}\t{}", format_time(at), shown.x, shown.y),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "time": format_time(at),
                "x": shown.x,
                "y": shown.y,
            }))?
        ),
    }

    Ok(())
}

/// Parse an RFC 3339 instant into UTC.
fn parse_instant(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidArgument(format!("'{}' is not an RFC 3339 time: {}", value, e)))
}
