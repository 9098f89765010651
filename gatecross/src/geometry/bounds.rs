//! Finite segment containment.

use super::Point;

/// Check whether `candidate` lies in the closed bounding box of `p1` and `p2`.
///
/// The candidate is expected to already satisfy the segment's line
/// equation, so the box test is enough to place it on the finite segment.
/// Both boundaries are inclusive and no slack is applied.
pub fn within_bounds(p1: Point, p2: Point, candidate: Point) -> bool {
    within_interval(p1.x, p2.x, candidate.x) && within_interval(p1.y, p2.y, candidate.y)
}

#[inline]
fn within_interval(a: f64, b: f64, value: f64) -> bool {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    (min..=max).contains(&value)
}
