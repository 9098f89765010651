//! Common types and utilities shared across CLI commands.

use chrono::SecondsFormat;
use clap::ValueEnum;
use gatecross::config::{ConfigFile, OutputFormat};
use gatecross::projection::{from_web_mercator, CoordinateSystem};
use gatecross::track::PositionMode;
use gatecross::Point;

use crate::error::CliError;

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// One line per result
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Crossing position selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PositionArg {
    /// Position of the sample starting the crossing segment
    SegmentStart,
    /// Point where the segment meets the gate line
    Intersection,
}

impl From<PositionArg> for PositionMode {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::SegmentStart => PositionMode::SegmentStart,
            PositionArg::Intersection => PositionMode::Intersection,
        }
    }
}

/// Parse a gate given as `X1,Y1,X2,Y2`.
pub fn parse_gate(value: &str) -> Result<(Point, Point), CliError> {
    let coords = value
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                CliError::InvalidArgument(format!("'{}' is not a number in gate '{}'", part, value))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [x1, y1, x2, y2] => Ok((Point::new(*x1, *y1), Point::new(*x2, *y2))),
        _ => Err(CliError::InvalidArgument(format!(
            "gate must be X1,Y1,X2,Y2, got '{}'",
            value
        ))),
    }
}

/// Resolve the gate: CLI takes precedence, then config.
pub fn resolve_gate(cli_gate: Option<&str>, config: &ConfigFile) -> Result<(Point, Point), CliError> {
    match (cli_gate, &config.gate) {
        (Some(value), _) => parse_gate(value),
        (None, Some(gate)) => Ok((gate.p1, gate.p2)),
        (None, None) => Err(CliError::Config(
            "No gate defined. Use --gate X1,Y1,X2,Y2 or set [gate] in config.ini".to_string(),
        )),
    }
}

/// Resolve the coordinate system: `--geographic` wins, then config.
pub fn resolve_coordinates(geographic: bool, config: &ConfigFile) -> CoordinateSystem {
    if geographic {
        CoordinateSystem::Geographic
    } else {
        config.track.coordinates
    }
}

/// Convert a planar point back into the track's own coordinates for display.
///
/// Geographic points are reported as (longitude, latitude).
pub fn display_point(point: Point, coordinates: CoordinateSystem) -> Point {
    match coordinates {
        CoordinateSystem::Planar => point,
        CoordinateSystem::Geographic => {
            let (lat, lon) = from_web_mercator(point);
            Point::new(lon, lat)
        }
    }
}

/// Format an instant the way all commands print it.
pub fn format_time(time: chrono::DateTime<chrono::Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecross::config::GateSettings;
    use gatecross::projection::to_web_mercator;

    #[test]
    fn test_parse_gate() {
        let (p1, p2) = parse_gate("1000, 1950,1000,2050.5").unwrap();
        assert_eq!(p1, Point::new(1000.0, 1950.0));
        assert_eq!(p2, Point::new(1000.0, 2050.5));
    }

    #[test]
    fn test_parse_gate_rejects_bad_input() {
        assert!(parse_gate("1,2,3").is_err());
        assert!(parse_gate("1,2,3,4,5").is_err());
        assert!(parse_gate("1,2,three,4").is_err());
    }

    #[test]
    fn test_cli_gate_overrides_config() {
        let config = ConfigFile {
            gate: Some(GateSettings {
                p1: Point::new(1.0, 2.0),
                p2: Point::new(3.0, 4.0),
            }),
            ..Default::default()
        };

        assert_eq!(
            resolve_gate(Some("5,6,7,8"), &config).unwrap().0,
            Point::new(5.0, 6.0)
        );
        assert_eq!(resolve_gate(None, &config).unwrap().0, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_missing_gate_is_config_error() {
        let err = resolve_gate(None, &ConfigFile::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_display_point_returns_lon_lat() {
        let planar = to_web_mercator(53.63, 9.98);
        let shown = display_point(planar, CoordinateSystem::Geographic);
        assert!((shown.x - 9.98).abs() < 1e-9);
        assert!((shown.y - 53.63).abs() < 1e-9);
    }
}
