//! Implicit line representation and intersection.

use super::{GeometryError, Point};

/// Right-hand side of the implicit line equation `alpha * x + beta * y = LINE_RHS`.
pub const LINE_RHS: f64 = 1.0;

/// Relative determinant magnitude below which a 2×2 system is treated as singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// An infinite line in implicit form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    alpha: f64,
    beta: f64,
}

impl Line {
    /// Build the line through two points.
    ///
    /// Solves `[x1 y1; x2 y2] · [alpha beta]ᵗ = [1 1]ᵗ`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the points coincide,
    /// when either is the origin, or when both lie on a common line through
    /// the origin.
    pub fn through(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        solve([p1.x, p1.y], [p2.x, p2.y])
            .map(|(alpha, beta)| Self { alpha, beta })
            .ok_or(GeometryError::DegenerateLine { p1, p2 })
    }

    /// Coefficient applied to `x`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Coefficient applied to `y`.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Evaluate the left-hand side of the line equation at `point`.
    ///
    /// Equals [`LINE_RHS`] for points on the line.
    pub fn evaluate(&self, point: Point) -> f64 {
        self.alpha * point.x + self.beta * point.y
    }

    /// Crossing point of two infinite lines, or `None` if they are parallel.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        solve([self.alpha, self.beta], [other.alpha, other.beta]).map(|(x, y)| Point { x, y })
    }
}

/// Intersect the segment `p1`→`p2`, extended to an infinite line, with `reference`.
///
/// Returns `Ok(None)` when the lines are parallel. That outcome is expected
/// and callers should simply move on to the next segment.
///
/// When the segment holds a coordinate constant, the result carries that
/// coordinate exactly rather than the solver's rounded value.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] when the segment's own line
/// cannot be represented.
pub fn intersect(p1: Point, p2: Point, reference: &Line) -> Result<Option<Point>, GeometryError> {
    let segment = Line::through(p1, p2)?;
    Ok(segment.intersection(reference).map(|mut point| {
        if p1.x == p2.x {
            point.x = p1.x;
        }
        if p1.y == p2.y {
            point.y = p1.y;
        }
        point
    }))
}

/// Solve `[a b; c d] · [u v]ᵗ = [LINE_RHS LINE_RHS]ᵗ` by Cramer's rule.
fn solve([a, b]: [f64; 2], [c, d]: [f64; 2]) -> Option<(f64, f64)> {
    let det = a * d - b * c;
    let scale = (a * d).abs() + (b * c).abs();

    // scale == 0 implies det == 0, which the comparison also catches
    if !det.is_finite() || det.abs() <= SINGULAR_TOLERANCE * scale {
        return None;
    }

    let u = LINE_RHS * (d - b) / det;
    let v = LINE_RHS * (a - c) / det;
    Some((u, v))
}
