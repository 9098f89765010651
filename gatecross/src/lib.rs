//! Gatecross - gate crossing detection for recorded tracks
//!
//! This library finds when, and approximately where, a moving object's
//! recorded 2D track crosses a fixed reference line such as a runway
//! threshold.
//!
//! # Modules
//!
//! - [`geometry`]: implicit lines, intersection and segment containment
//! - [`interpolate`]: crossing-time and position interpolation
//! - [`track`]: samples, gates and the single-pass crossing scanner
//! - [`projection`]: WGS84 to Web Mercator for geographic tracks
//! - [`reader`]: JSON track files
//! - [`config`]: INI configuration
//! - [`logging`]: tracing subscriber setup for binaries

pub mod config;
pub mod geometry;
pub mod interpolate;
pub mod logging;
pub mod projection;
pub mod reader;
pub mod track;

pub use geometry::{GeometryError, Line, Point};
pub use track::{scan_crossings, CrossingEvent, CrossingScanner, Gate, Sample};
