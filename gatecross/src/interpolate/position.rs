//! Position interpolation at an arbitrary instant.

use chrono::{DateTime, Utc};

use super::millis_between;
use crate::geometry::{GeometryError, Point};
use crate::track::Sample;

/// Estimate where the object was at `at`, assuming straight-line motion
/// at constant speed from `start` to `end`.
///
/// `at` is not clamped: instants outside the segment extrapolate along
/// the same line.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroDuration`] when both samples share a
/// timestamp.
pub fn interpolate_position(
    start: &Sample,
    end: &Sample,
    at: DateTime<Utc>,
) -> Result<Point, GeometryError> {
    if start.time == end.time {
        return Err(GeometryError::ZeroDuration { time: start.time });
    }

    let fraction = millis_between(start.time, at) / millis_between(start.time, end.time);

    Ok(Point {
        x: start.x + (end.x - start.x) * fraction,
        y: start.y + (end.y - start.y) * fraction,
    })
}
