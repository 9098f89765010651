//! Single-pass crossing detection.

use std::iter::FusedIterator;

use tracing::{debug, info, trace};

use super::{CrossingEvent, Gate, Sample};
use crate::geometry::{intersect, within_bounds, GeometryError, Point};
use crate::interpolate::interpolate_crossing_time;

/// Counters gathered while scanning a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Samples pulled from the track.
    pub samples: usize,
    /// Segments examined (one fewer than samples for a non-empty track).
    pub segments: usize,
    /// Segments skipped because both samples are at the same position.
    pub stationary: usize,
    /// Segments parallel to the gate.
    pub parallel: usize,
    /// Segments whose own line could not be represented.
    pub degenerate: usize,
    /// Crossings emitted.
    pub crossings: usize,
}

/// Lazily yields the crossings of a track over a gate.
///
/// Pulls one sample at a time and keeps only the previous one, so memory
/// use does not depend on track length. Once the track is exhausted the
/// scanner stays exhausted.
///
/// # Example
///
/// ```ignore
/// let gate = Gate::new(p1, p2)?;
/// let mut scanner = CrossingScanner::new(gate, track);
/// let first = scanner.next();
/// ```
#[derive(Debug)]
pub struct CrossingScanner<I> {
    gate: Gate,
    track: I,
    previous: Option<Sample>,
    stats: ScanStats,
    exhausted: bool,
}

impl<I> CrossingScanner<I>
where
    I: Iterator<Item = Sample>,
{
    /// Create a scanner over `track`.
    pub fn new<T>(gate: Gate, track: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = Sample>,
    {
        debug!(gate = %gate, "Starting track scan");
        Self {
            gate,
            track: track.into_iter(),
            previous: None,
            stats: ScanStats::default(),
            exhausted: false,
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Whether the underlying track has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Examine one segment, returning the crossing it contains, if any.
    fn examine(&mut self, start: &Sample, end: &Sample) -> Option<CrossingEvent> {
        if start.is_coincident(end) {
            self.stats.stationary += 1;
            trace!(time = %start.time, "Skipping stationary segment");
            return None;
        }

        let (from, to) = (start.position(), end.position());
        let point = match intersect(from, to, self.gate.line()) {
            Ok(Some(point)) => point,
            Ok(None) => {
                self.stats.parallel += 1;
                trace!(time = %start.time, "Segment is parallel to the gate");
                return None;
            }
            Err(e) => {
                self.stats.degenerate += 1;
                debug!(time = %start.time, error = %e, "Skipping segment with unrepresentable line");
                return None;
            }
        };

        if !within_bounds(from, to, point) {
            trace!(time = %start.time, point = %point, "Gate line meets segment outside its extent");
            return None;
        }

        self.crossing(start, end, point)
    }

    fn crossing(&self, start: &Sample, end: &Sample, point: Point) -> Option<CrossingEvent> {
        match interpolate_crossing_time(start, end, point) {
            Ok(time) => {
                debug!(time = %time, point = %point, "Gate crossing detected");
                Some(CrossingEvent::new(time, start, point))
            }
            Err(e) => {
                debug!(time = %start.time, error = %e, "Could not interpolate crossing time");
                None
            }
        }
    }

    fn finish(&mut self) {
        self.exhausted = true;
        self.previous = None;
        info!(
            gate = %self.gate,
            samples = self.stats.samples,
            segments = self.stats.segments,
            stationary = self.stats.stationary,
            parallel = self.stats.parallel,
            degenerate = self.stats.degenerate,
            crossings = self.stats.crossings,
            "Track scan complete"
        );
    }
}

impl<I> Iterator for CrossingScanner<I>
where
    I: Iterator<Item = Sample>,
{
    type Item = CrossingEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        loop {
            let Some(sample) = self.track.next() else {
                self.finish();
                return None;
            };
            self.stats.samples += 1;

            let Some(start) = self.previous.replace(sample) else {
                continue;
            };
            self.stats.segments += 1;

            if let Some(event) = self.examine(&start, &sample) {
                self.stats.crossings += 1;
                return Some(event);
            }
        }
    }
}

impl<I> FusedIterator for CrossingScanner<I> where I: Iterator<Item = Sample> {}

/// Scan a track against the gate through `p1` and `p2`.
///
/// Returns every crossing in encounter order, possibly none.
///
/// # Errors
///
/// Fails before reading any sample if the gate points are degenerate.
/// Per-segment problems never abort the scan.
pub fn scan_crossings<T>(p1: Point, p2: Point, track: T) -> Result<Vec<CrossingEvent>, GeometryError>
where
    T: IntoIterator<Item = Sample>,
{
    let gate = Gate::new(p1, p2)?;
    Ok(CrossingScanner::new(gate, track).collect())
}
