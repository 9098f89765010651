//! Scan command - find gate crossings in a track file.

use std::path::PathBuf;

use gatecross::config::OutputFormat;
use gatecross::projection::CoordinateSystem;
use gatecross::reader::{read_track_file, ReadOptions};
use gatecross::track::{CrossingEvent, CrossingScanner, Gate, PositionMode};
use serde_json::json;

use super::common::{
    display_point, format_time, resolve_coordinates, resolve_gate, OutputFormatArg, PositionArg,
};
use crate::error::CliError;
use crate::runner::{CliRunner, GlobalArgs};

/// Arguments for the scan command.
pub struct ScanArgs {
    pub track: PathBuf,
    pub gate: Option<String>,
    pub geographic: bool,
    pub format: Option<OutputFormatArg>,
    pub position: Option<PositionArg>,
    pub allow_unordered: bool,
}

/// Run the scan command.
pub fn run(global: &GlobalArgs, args: ScanArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    let config = runner.config();

    let coordinates = resolve_coordinates(args.geographic, config);
    let (p1, p2) = resolve_gate(args.gate.as_deref(), config)?;
    let gate = Gate::new(coordinates.to_planar(p1), coordinates.to_planar(p2))?;

    let mut options = ReadOptions::default().with_coordinates(coordinates);
    if args.allow_unordered {
        options = options.allow_unordered();
    }
    let track = read_track_file(&args.track, options)?;

    let events: Vec<CrossingEvent> = CrossingScanner::new(gate, track).collect();

    let format = args.format.map(Into::into).unwrap_or(config.output.format);
    let mode = args.position.map(Into::into).unwrap_or(config.output.position);

    print!("{}", render_events(&events, mode, coordinates, format)?);
    Ok(())
}

/// Render events for stdout.
fn render_events(
    events: &[CrossingEvent],
    mode: PositionMode,
    coordinates: CoordinateSystem,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(events
            .iter()
            .map(|event| {
                let p = display_point(event.position(mode), coordinates);
                format!("{}\t{}\t{}\n", format_time(event.time), p.x, p.y)
            })
            .collect()),
        OutputFormat::Json => {
            let records: Vec<_> = events
                .iter()
                .map(|event| {
                    let p = display_point(event.position(mode), coordinates);
                    json!({
                        "time": format_time(event.time),
                        "x": p.x,
                        "y": p.y,
                    })
                })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&records)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use gatecross::{Point, Sample};

    fn event() -> CrossingEvent {
        let start = Sample::new(
            Utc.with_ymd_and_hms(2019, 11, 7, 8, 44, 49).unwrap(),
            995.27,
            2000.3,
        );
        CrossingEvent::new(
            start.time + TimeDelta::milliseconds(473),
            &start,
            Point::new(1000.0, 2000.25),
        )
    }

    #[test]
    fn test_render_text_segment_start() {
        let out = render_events(
            &[event()],
            PositionMode::SegmentStart,
            CoordinateSystem::Planar,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "2019-11-07T08:44:49.473Z\t995.27\t2000.3\n");
    }

    #[test]
    fn test_render_json_intersection() {
        let out = render_events(
            &[event()],
            PositionMode::Intersection,
            CoordinateSystem::Planar,
            OutputFormat::Json,
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["time"], "2019-11-07T08:44:49.473Z");
        assert_eq!(parsed[0]["x"], 1000.0);
        assert_eq!(parsed[0]["y"], 2000.25);
    }

    #[test]
    fn test_render_no_events() {
        let text = render_events(
            &[],
            PositionMode::SegmentStart,
            CoordinateSystem::Planar,
            OutputFormat::Text,
        )
        .unwrap();
        assert!(text.is_empty());

        let json = render_events(
            &[],
            PositionMode::SegmentStart,
            CoordinateSystem::Planar,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
