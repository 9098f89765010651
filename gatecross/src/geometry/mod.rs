//! Planar line geometry.
//!
//! Lines are kept in implicit form: a coefficient pair `(alpha, beta)` such
//! that every point `(x, y)` on the line satisfies
//! `alpha * x + beta * y = LINE_RHS`. Both the line construction and the
//! line-line intersection reduce to the same 2×2 linear system, solved in
//! closed form by Cramer's rule.
//!
//! # Limitations
//!
//! Because the right-hand side is fixed at 1, a line passing through the
//! origin has no representation. Constructing one fails with
//! [`GeometryError::DegenerateLine`]. Callers working in a projected frame
//! should choose one whose origin lies well away from the data.

mod bounds;
mod line;

pub use bounds::within_bounds;
pub use line::{intersect, Line, LINE_RHS};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpolate::Axis;

/// A point in the common planar frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors raised by geometric construction and interpolation.
///
/// Parallel lines are deliberately absent: they are an ordinary outcome of
/// [`intersect`] and are reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The two defining points coincide or are collinear with the origin.
    #[error("Degenerate line through {p1} and {p2}: points coincide or are collinear with the origin")]
    DegenerateLine { p1: Point, p2: Point },

    /// The segment does not move along the axis used for interpolation.
    #[error("Degenerate segment: zero displacement along the {axis} axis")]
    DegenerateSegment { axis: Axis },

    /// An interpolated instant is not finite or lies outside the supported
    /// date range.
    #[error("Interpolated time offset of {offset_ms} ms cannot be represented")]
    UnrepresentableTime { offset_ms: f64 },

    /// Both samples carry the same timestamp, so no rate can be derived.
    #[error("Degenerate segment: both samples are at {time}")]
    ZeroDuration { time: DateTime<Utc> },
}
