//! Latitude/longitude coordinates on the unit sphere.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Magnitudes below this are treated as trigonometric round-off and snapped to zero.
pub const SNAP_EPSILON: f64 = 1e-10;

/// A point on the sphere in radians.
///
/// Latitude is in `[-π/2, π/2]`, longitude in `(-π, π]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoCoord {
    /// Angle north of the equator.
    pub latitude: f64,
    /// Angle east of the prime meridian.
    pub longitude: f64,
}

impl GeoCoord {
    /// Construct a coordinate, wrapping the longitude into `(-π, π]`.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude: normalize_longitude(longitude),
        }
    }

    /// Construct from degrees.
    #[must_use]
    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg * PI / 180.0, longitude_deg * PI / 180.0)
    }

    /// Direction on the unit sphere in the height-field frame: `y` points
    /// north, the prime meridian lies on `+x` and longitude grows towards `+z`.
    #[inline]
    #[must_use]
    pub fn to_unit_vector(self) -> DVec3 {
        let cos_lat = libm::cos(self.latitude);
        DVec3::new(
            cos_lat * libm::cos(self.longitude),
            libm::sin(self.latitude),
            cos_lat * libm::sin(self.longitude),
        )
    }
}

/// Wrap a longitude into `(-π, π]`.
#[must_use]
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = longitude % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Replace values within [`SNAP_EPSILON`] of zero with exactly `0.0`.
#[inline]
#[must_use]
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < SNAP_EPSILON { 0.0 } else { value }
}
