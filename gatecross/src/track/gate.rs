//! The reference line tracks are scanned against.

use std::fmt;

use crate::geometry::{GeometryError, Line, Point};

/// A validated reference line, such as a runway threshold.
///
/// The implicit line is built once at construction, so a malformed gate is
/// rejected before any scanning starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    p1: Point,
    p2: Point,
    line: Line,
}

impl Gate {
    /// Create a gate through two points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the points coincide or
    /// are collinear with the origin.
    pub fn new(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        let line = Line::through(p1, p2)?;
        Ok(Self { p1, p2, line })
    }

    /// The two points the gate was defined by.
    pub fn endpoints(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    /// The gate's implicit line.
    pub fn line(&self) -> &Line {
        &self.line
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_gate() {
        let gate = Gate::new(Point::new(0.5, -0.2), Point::new(0.5, 0.4)).unwrap();
        assert_eq!(
            gate.endpoints(),
            (Point::new(0.5, -0.2), Point::new(0.5, 0.4))
        );
        assert!((gate.line().alpha() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gate_with_identical_points_fails_fast() {
        let p = Point::new(1000.0, 500.0);
        let err = Gate::new(p, p).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateLine { .. }));
        assert!(err.to_string().contains("Degenerate line"));
    }

    #[test]
    fn test_gate_through_origin_fails_fast() {
        assert!(Gate::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)).is_err());
    }
}
