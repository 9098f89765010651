//! Track scanning against a reference gate.
//!
//! A track is an ordered, single-pass sequence of [`Sample`]s. Each pair of
//! consecutive samples forms a straight segment; the [`CrossingScanner`]
//! walks those segments once and yields a [`CrossingEvent`] whenever a
//! segment intersects the [`Gate`] line within its finite extent.
//!
//! # Example
//!
//! ```ignore
//! use gatecross::geometry::Point;
//! use gatecross::track::{scan_crossings, Sample};
//!
//! let events = scan_crossings(
//!     Point::new(0.5, -0.2),
//!     Point::new(0.5, 0.4),
//!     samples,
//! )?;
//!
//! for event in &events {
//!     println!("crossed at {}", event.time);
//! }
//! ```
//!
//! The track must be in non-decreasing time order. The scanner does not
//! check this; readers in [`crate::reader`] do.

mod gate;
mod locate;
mod model;
mod scanner;

pub use gate::Gate;
pub use locate::locate_position;
pub use model::{CrossingEvent, PositionMode, Sample};
pub use scanner::{scan_crossings, CrossingScanner, ScanStats};
