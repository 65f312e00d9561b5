//! Sphere geometry for the geodesic quad-sphere: latitude/longitude coordinates,
//! great-circle midpoints, and the icosahedral base layout.

mod coord;
mod icosahedron;
mod midpoint;

pub use coord::{GeoCoord, SNAP_EPSILON, normalize_longitude, snap_to_zero};
pub use icosahedron::{BASE_FACES, BASE_VERTEX_COUNT, base_coords, ring_latitude};
pub use midpoint::spherical_midpoint;
