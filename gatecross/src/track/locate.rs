//! Position lookup along a track.

use chrono::{DateTime, Utc};

use super::Sample;
use crate::geometry::{GeometryError, Point};
use crate::interpolate::interpolate_position;

/// Estimate the tracked object's position at `at`.
///
/// Walks the track once and interpolates within the first pair of
/// consecutive samples whose end is at or after `at`. Instants before the
/// first sample extrapolate backwards from the first pair; instants past
/// the last sample extrapolate from the last pair. Pairs sharing a
/// timestamp are ignored.
///
/// Returns `Ok(None)` when the track has no two samples with distinct
/// timestamps.
pub fn locate_position<T>(track: T, at: DateTime<Utc>) -> Result<Option<Point>, GeometryError>
where
    T: IntoIterator<Item = Sample>,
{
    let mut previous: Option<Sample> = None;
    let mut last_pair: Option<(Sample, Sample)> = None;

    for sample in track {
        if let Some(start) = previous.replace(sample) {
            if start.time == sample.time {
                continue;
            }
            if sample.time >= at {
                return interpolate_position(&start, &sample, at).map(Some);
            }
            last_pair = Some((start, sample));
        }
    }

    last_pair
        .map(|(start, end)| interpolate_position(&start, &end, at))
        .transpose()
}
