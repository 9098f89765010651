//! Crossing-time interpolation.

use chrono::{DateTime, TimeDelta, Utc};

use super::{millis_between, Axis};
use crate::geometry::{GeometryError, Point};
use crate::track::Sample;

/// Interpolate the instant at which the `axis` coordinate reached `crossing`.
///
/// Computes `t1 + round_ms((crossing - pos1) / (pos2 - pos1) * (t2 - t1))`.
/// No clamping is applied, so a `crossing` outside `[pos1, pos2]`
/// extrapolates.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateSegment`] when `pos1 == pos2`, and
/// [`GeometryError::UnrepresentableTime`] when the offset is not finite or
/// the result falls outside the range `chrono` can represent.
pub fn interpolate_time(
    axis: Axis,
    (pos1, t1): (f64, DateTime<Utc>),
    (pos2, t2): (f64, DateTime<Utc>),
    crossing: f64,
) -> Result<DateTime<Utc>, GeometryError> {
    let displacement = pos2 - pos1;
    if displacement == 0.0 {
        return Err(GeometryError::DegenerateSegment { axis });
    }

    let fraction = (crossing - pos1) / displacement;
    let offset_ms = (fraction * millis_between(t1, t2)).round();
    let unrepresentable = GeometryError::UnrepresentableTime { offset_ms };

    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    if !offset_ms.is_finite() || offset_ms < i64::MIN as f64 || offset_ms >= i64::MAX as f64 {
        return Err(unrepresentable);
    }

    TimeDelta::try_milliseconds(offset_ms as i64)
        .and_then(|offset| t1.checked_add_signed(offset))
        .ok_or(unrepresentable)
}

/// The axis along which the segment `start`→`end` moves the furthest.
///
/// Ties go to [`Axis::X`].
pub fn dominant_axis(start: &Sample, end: &Sample) -> Axis {
    if (end.x - start.x).abs() >= (end.y - start.y).abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Interpolate the instant at which the segment `start`→`end` passed `crossing`.
///
/// Interpolates on the [`dominant_axis`] so the division never uses the
/// displacement of a nearly stationary coordinate.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateSegment`] when the segment does not
/// move at all.
pub fn interpolate_crossing_time(
    start: &Sample,
    end: &Sample,
    crossing: Point,
) -> Result<DateTime<Utc>, GeometryError> {
    let axis = dominant_axis(start, end);
    match axis {
        Axis::X => interpolate_time(axis, (start.x, start.time), (end.x, end.time), crossing.x),
        Axis::Y => interpolate_time(axis, (start.y, start.time), (end.y, end.time), crossing.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 11, 7, h, m, s).unwrap()
    }

    #[test]
    fn test_midpoint_crossing() {
        let time =
            interpolate_time(Axis::X, (0.0, at(10, 0, 0)), (1.0, at(10, 0, 40)), 0.5).unwrap();
        assert_eq!(time, at(10, 0, 20));
    }

    #[test]
    fn test_crossing_at_endpoints() {
        let t1 = at(10, 0, 0);
        let t2 = at(10, 0, 40);
        assert_eq!(interpolate_time(Axis::X, (2.0, t1), (6.0, t2), 2.0).unwrap(), t1);
        assert_eq!(interpolate_time(Axis::X, (2.0, t1), (6.0, t2), 6.0).unwrap(), t2);
    }

    #[test]
    fn test_decreasing_coordinate() {
        let time =
            interpolate_time(Axis::X, (10.0, at(10, 0, 0)), (0.0, at(10, 0, 10)), 7.5).unwrap();
        assert_eq!(time, at(10, 0, 2) + TimeDelta::milliseconds(500));
    }

    #[test]
    fn test_rounds_to_nearest_millisecond() {
        // 1/3 of one second is 333.33ms
        let time = interpolate_time(Axis::X, (0.0, at(10, 0, 0)), (3.0, at(10, 0, 1)), 1.0).unwrap();
        assert_eq!(time, at(10, 0, 0) + TimeDelta::milliseconds(333));

        // 2/3 of one second is 666.67ms
        let time = interpolate_time(Axis::X, (0.0, at(10, 0, 0)), (3.0, at(10, 0, 1)), 2.0).unwrap();
        assert_eq!(time, at(10, 0, 0) + TimeDelta::milliseconds(667));
    }

    #[test]
    fn test_zero_displacement_is_degenerate() {
        let result = interpolate_time(Axis::Y, (4.0, at(10, 0, 0)), (4.0, at(10, 0, 5)), 4.0);
        assert_eq!(
            result,
            Err(GeometryError::DegenerateSegment { axis: Axis::Y })
        );
    }

    #[test]
    fn test_far_extrapolation_is_an_error() {
        let t1 = at(10, 0, 0);
        let t2 = at(10, 0, 40);

        let result = interpolate_time(Axis::X, (0.0, t1), (1.0, t2), 1.0e20);
        assert!(matches!(
            result,
            Err(GeometryError::UnrepresentableTime { .. })
        ));

        // Fits in an i64 of milliseconds but not in a DateTime
        let result = interpolate_time(Axis::X, (0.0, t1), (1.0, t2), 1.0e13);
        assert!(matches!(
            result,
            Err(GeometryError::UnrepresentableTime { .. })
        ));
    }

    #[test]
    fn test_non_finite_crossing_is_an_error() {
        let t1 = at(10, 0, 0);
        let t2 = at(10, 0, 40);

        for crossing in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = interpolate_time(Axis::X, (0.0, t1), (1.0, t2), crossing);
            assert!(
                matches!(result, Err(GeometryError::UnrepresentableTime { .. })),
                "crossing {} gave {:?}",
                crossing,
                result
            );
        }
    }

    #[test]
    fn test_moderate_extrapolation_is_allowed() {
        let time = interpolate_time(Axis::X, (0.0, at(10, 0, 0)), (1.0, at(10, 0, 40)), 1.5);
        assert_eq!(time, Ok(at(10, 1, 0)));
    }

    #[test]
    fn test_dominant_axis_prefers_larger_displacement() {
        let start = Sample::new(at(10, 0, 0), 0.0, 0.0);
        assert_eq!(dominant_axis(&start, &Sample::new(at(10, 0, 1), 5.0, 1.0)), Axis::X);
        assert_eq!(dominant_axis(&start, &Sample::new(at(10, 0, 1), 1.0, -5.0)), Axis::Y);
        assert_eq!(dominant_axis(&start, &Sample::new(at(10, 0, 1), -3.0, 3.0)), Axis::X);
    }

    #[test]
    fn test_crossing_time_uses_moving_axis() {
        // y is constant, so interpolating on it would fail
        let start = Sample::new(at(10, 0, 0), 0.0, 0.2);
        let end = Sample::new(at(10, 0, 40), 1.0, 0.2);
        let time = interpolate_crossing_time(&start, &end, Point::new(0.5, 0.2)).unwrap();
        assert_eq!(time, at(10, 0, 20));
    }

    #[test]
    fn test_crossing_time_on_y_axis() {
        let start = Sample::new(at(10, 0, 0), 3.0, 100.0);
        let end = Sample::new(at(10, 0, 10), 3.1, 200.0);
        let time = interpolate_crossing_time(&start, &end, Point::new(3.025, 125.0)).unwrap();
        assert_eq!(time, at(10, 0, 2) + TimeDelta::milliseconds(500));
    }

    #[test]
    fn test_crossing_time_stationary_segment_is_degenerate() {
        let start = Sample::new(at(10, 0, 0), 3.0, 3.0);
        let end = Sample::new(at(10, 0, 10), 3.0, 3.0);
        assert_eq!(
            interpolate_crossing_time(&start, &end, Point::new(3.0, 3.0)),
            Err(GeometryError::DegenerateSegment { axis: Axis::X })
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_interpolated_time_stays_within_segment(
                pos1 in -1.0e5..1.0e5_f64,
                length in 1.0e-3..1.0e4_f64,
                fraction in 0.0..=1.0_f64,
                duration_ms in 1i64..3_600_000,
            ) {
                let t1 = at(10, 0, 0);
                let t2 = t1 + TimeDelta::milliseconds(duration_ms);
                let pos2 = pos1 + length;
                let crossing = (pos1 + fraction * length).clamp(pos1, pos2);

                let time = interpolate_time(Axis::X, (pos1, t1), (pos2, t2), crossing)?;
                prop_assert!(time >= t1 && time <= t2, "{} outside [{}, {}]", time, t1, t2);
            }
        }
    }
}
