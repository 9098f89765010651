//! Track file reader.
//!
//! Track files are JSON arrays of samples:
//!
//! ```json
//! [
//!   { "time": "2019-11-07T08:44:10Z", "x": 1095.4, "y": 2201.7 },
//!   { "time": "2019-11-07T08:44:11Z", "x": 1105.2, "y": 2201.9 }
//! ]
//! ```
//!
//! Timestamps are RFC 3339 and may carry any UTC offset; they are
//! normalised to UTC. With [`CoordinateSystem::Geographic`], `x` is read as
//! longitude and `y` as latitude and both are projected to Web Mercator.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::projection::CoordinateSystem;
use crate::track::Sample;

/// Errors that can occur while reading a track.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not a valid track document.
    #[error("Invalid track file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A sample is timestamped before its predecessor.
    #[error("Sample {index} at {time} is earlier than the previous sample at {previous}")]
    OutOfOrder {
        index: usize,
        time: DateTime<Utc>,
        previous: DateTime<Utc>,
    },
}

/// Options controlling how a track is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Interpretation of sample coordinates.
    pub coordinates: CoordinateSystem,
    /// Reject tracks whose timestamps go backwards.
    pub require_ordered: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            coordinates: CoordinateSystem::Planar,
            require_ordered: true,
        }
    }
}

impl ReadOptions {
    /// Set the coordinate system.
    pub fn with_coordinates(mut self, coordinates: CoordinateSystem) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Accept tracks regardless of timestamp order.
    pub fn allow_unordered(mut self) -> Self {
        self.require_ordered = false;
        self
    }
}

/// Read a track file from disk.
pub fn read_track_file(path: &Path, options: ReadOptions) -> Result<Vec<Sample>, ReaderError> {
    let file = File::open(path)?;
    let samples = read_track(BufReader::new(file), options)?;
    debug!(path = %path.display(), samples = samples.len(), "Loaded track");
    Ok(samples)
}

/// Read a track from any byte source.
pub fn read_track<R: Read>(reader: R, options: ReadOptions) -> Result<Vec<Sample>, ReaderError> {
    let raw: Vec<Sample> = serde_json::from_reader(reader)?;
    prepare(raw, options)
}

/// Read a track from a string.
pub fn parse_track(content: &str, options: ReadOptions) -> Result<Vec<Sample>, ReaderError> {
    let raw: Vec<Sample> = serde_json::from_str(content)?;
    prepare(raw, options)
}

fn prepare(raw: Vec<Sample>, options: ReadOptions) -> Result<Vec<Sample>, ReaderError> {
    if options.require_ordered {
        check_order(&raw)?;
    }

    Ok(raw
        .into_iter()
        .map(|sample| {
            let p = options.coordinates.to_planar(sample.position());
            Sample::new(sample.time, p.x, p.y)
        })
        .collect())
}

fn check_order(samples: &[Sample]) -> Result<(), ReaderError> {
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            return Err(ReaderError::OutOfOrder {
                index: index + 1,
                time: pair[1].time,
                previous: pair[0].time,
            });
        }
    }
    Ok(())
}
