//! Great-circle midpoint between two latitude/longitude coordinates.

use crate::{GeoCoord, normalize_longitude, snap_to_zero};

/// Midpoint of the great-circle arc from `a` to `b`.
///
/// Interpolates on the sphere rather than averaging angles, so arcs crossing the
/// antimeridian or passing near a pole still land halfway along the arc. The
/// longitude is wrapped into `(-π, π]` and both components are snapped to zero
/// below [`crate::SNAP_EPSILON`].
#[must_use]
pub fn spherical_midpoint(a: GeoCoord, b: GeoCoord) -> GeoCoord {
    let delta_lon = b.longitude - a.longitude;
    let cos_lat_b = libm::cos(b.latitude);
    let bx = cos_lat_b * libm::cos(delta_lon);
    let by = cos_lat_b * libm::sin(delta_lon);

    let x = libm::cos(a.latitude) + bx;
    let latitude = libm::atan2(
        libm::sin(a.latitude) + libm::sin(b.latitude),
        libm::sqrt(x * x + by * by),
    );
    let longitude = a.longitude + libm::atan2(by, x);

    GeoCoord {
        latitude: snap_to_zero(latitude),
        longitude: snap_to_zero(normalize_longitude(longitude)),
    }
}
