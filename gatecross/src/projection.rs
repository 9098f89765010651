//! Geographic to planar projection.
//!
//! Scanning needs a planar frame. Tracks recorded as WGS84 latitude and
//! longitude are projected to spherical Web Mercator metres first; the
//! gate must be projected the same way.
//!
//! Web Mercator's origin sits in the Gulf of Guinea, so gates anywhere
//! near an airfield are far from it and remain representable as implicit
//! lines.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Earth radius used by spherical Web Mercator, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Maximum latitude representable in Web Mercator (degrees).
pub const MAX_LAT: f64 = 85.05112878;

/// Minimum latitude representable in Web Mercator (degrees).
pub const MIN_LAT: f64 = -85.05112878;

/// How sample coordinates in a track file are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// `x`/`y` are already planar and are used as-is.
    #[default]
    Planar,
    /// `x` is longitude and `y` latitude, in degrees.
    Geographic,
}

impl CoordinateSystem {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSystem::Planar => "planar",
            CoordinateSystem::Geographic => "geographic",
        }
    }

    /// Bring a point from this coordinate system into the planar frame.
    pub fn to_planar(&self, point: Point) -> Point {
        match self {
            CoordinateSystem::Planar => point,
            CoordinateSystem::Geographic => to_web_mercator(point.y, point.x),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planar" => Ok(CoordinateSystem::Planar),
            "geographic" | "wgs84" => Ok(CoordinateSystem::Geographic),
            other => Err(format!(
                "unknown coordinate system '{}' (expected planar or geographic)",
                other
            )),
        }
    }
}

/// Project latitude/longitude in degrees to Web Mercator metres.
///
/// Latitude is clamped to [`MIN_LAT`]..=[`MAX_LAT`].
#[inline]
pub fn to_web_mercator(lat: f64, lon: f64) -> Point {
    let lat_rad = lat.clamp(MIN_LAT, MAX_LAT).to_radians();

    Point {
        x: EARTH_RADIUS_M * lon.to_radians(),
        y: EARTH_RADIUS_M * (PI / 4.0 + lat_rad / 2.0).tan().ln(),
    }
}

/// Inverse of [`to_web_mercator`], returning `(lat, lon)` in degrees.
#[inline]
pub fn from_web_mercator(point: Point) -> (f64, f64) {
    let lon = (point.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - PI / 2.0).to_degrees();
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_island_is_origin() {
        let p = to_web_mercator(0.0, 0.0);
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_x() {
        let p = to_web_mercator(0.0, 180.0);
        assert!((p.x - 20_037_508.342789244).abs() < 1e-6);
    }

    #[test]
    fn test_max_latitude_is_square() {
        let p = to_web_mercator(MAX_LAT, 180.0);
        assert!(
            (p.y - p.x).abs() < 1.0,
            "Mercator world should be square: x={}, y={}",
            p.x,
            p.y
        );
    }

    #[test]
    fn test_latitude_is_clamped() {
        assert_eq!(to_web_mercator(90.0, 10.0), to_web_mercator(MAX_LAT, 10.0));
    }

    #[test]
    fn test_roundtrip_hamburg() {
        let (lat, lon) = (53.6304, 9.9882);
        let (back_lat, back_lon) = from_web_mercator(to_web_mercator(lat, lon));
        assert!((back_lat - lat).abs() < 1e-9);
        assert!((back_lon - lon).abs() < 1e-9);
    }

    #[test]
    fn test_geographic_points_swap_axes() {
        let planar = CoordinateSystem::Geographic.to_planar(Point::new(9.9882, 53.6304));
        assert_eq!(planar, to_web_mercator(53.6304, 9.9882));
        assert_eq!(
            CoordinateSystem::Planar.to_planar(Point::new(1.0, 2.0)),
            Point::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_coordinate_system_parsing() {
        assert_eq!("Planar".parse::<CoordinateSystem>(), Ok(CoordinateSystem::Planar));
        assert_eq!("wgs84".parse::<CoordinateSystem>(), Ok(CoordinateSystem::Geographic));
        assert!("utm".parse::<CoordinateSystem>().is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_projection_roundtrip(
                lat in -85.0..85.0_f64,
                lon in -180.0..180.0_f64,
            ) {
                let (back_lat, back_lon) = from_web_mercator(to_web_mercator(lat, lon));
                prop_assert!((back_lat - lat).abs() < 1e-9);
                prop_assert!((back_lon - lon).abs() < 1e-9);
            }
        }
    }
}
