//! Track data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One timestamped position of the tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the position was recorded.
    pub time: DateTime<Utc>,
    /// Planar x coordinate.
    pub x: f64,
    /// Planar y coordinate.
    pub y: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(time: DateTime<Utc>, x: f64, y: f64) -> Self {
        Self { time, x, y }
    }

    /// The sample's position.
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Whether both samples are at exactly the same position.
    pub fn is_coincident(&self, other: &Sample) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Which position a [`CrossingEvent`] should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// Start of the crossing segment (legacy output).
    #[default]
    SegmentStart,
    /// Geometric intersection with the gate line.
    Intersection,
}

impl PositionMode {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionMode::SegmentStart => "segment_start",
            PositionMode::Intersection => "intersection",
        }
    }
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "segment_start" => Ok(PositionMode::SegmentStart),
            "intersection" => Ok(PositionMode::Intersection),
            other => Err(format!(
                "unknown position mode '{}' (expected segment_start or intersection)",
                other
            )),
        }
    }
}

/// A detected crossing of the gate line.
///
/// `time` is the interpolated crossing instant. `x` and `y` hold the
/// position of the sample that starts the crossing segment, not the
/// crossing point itself; the geometric crossing point is kept in
/// `intersection`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossingEvent {
    /// Interpolated crossing instant, rounded to the millisecond.
    pub time: DateTime<Utc>,
    /// x of the segment's starting sample.
    pub x: f64,
    /// y of the segment's starting sample.
    pub y: f64,
    /// Where the segment meets the gate line.
    pub intersection: Point,
}

impl CrossingEvent {
    /// Build an event for a crossing found on the segment starting at `start`.
    pub fn new(time: DateTime<Utc>, start: &Sample, intersection: Point) -> Self {
        Self {
            time,
            x: start.x,
            y: start.y,
            intersection,
        }
    }

    /// The position selected by `mode`.
    pub fn position(&self, mode: PositionMode) -> Point {
        match mode {
            PositionMode::SegmentStart => Point {
                x: self.x,
                y: self.y,
            },
            PositionMode::Intersection => self.intersection,
        }
    }
}

impl fmt::Display for CrossingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.x,
            self.y
        )
    }
}
