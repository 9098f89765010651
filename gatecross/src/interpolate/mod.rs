//! Linear interpolation between two timestamped samples.
//!
//! Two directions are supported:
//!
//! - **Time from position**: given where along a segment a crossing
//!   happened, estimate when it happened ([`interpolate_time`],
//!   [`interpolate_crossing_time`]).
//! - **Position from time**: given an instant, estimate where the object
//!   was ([`interpolate_position`]).
//!
//! Times are `chrono` UTC instants; crossing times are rounded to the
//! nearest millisecond.

mod position;
mod time;

pub use position::interpolate_position;
pub use time::{dominant_axis, interpolate_crossing_time, interpolate_time};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coordinate axis of the planar frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Signed span between two instants in fractional milliseconds.
///
/// Microsecond resolution is kept when the span fits; longer spans fall
/// back to whole milliseconds.
pub(crate) fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000.0,
        None => delta.num_milliseconds() as f64,
    }
}
