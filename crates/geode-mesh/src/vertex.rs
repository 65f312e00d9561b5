//! Mesh vertices and quad faces.

use geode_sphere::GeoCoord;

/// A vertex on the sphere with its sampled elevation.
///
/// Vertices are append-only: once pushed, a vertex keeps its index and value
/// for the rest of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshVertex {
    /// Latitude in radians, `[-π/2, π/2]`.
    pub latitude: f64,
    /// Longitude in radians, `(-π, π]`.
    pub longitude: f64,
    /// Elevation relative to sea level.
    pub elevation: f64,
}

impl MeshVertex {
    /// Create a vertex at `coord` with `elevation`.
    #[must_use]
    pub fn new(coord: GeoCoord, elevation: f64) -> Self {
        Self {
            latitude: coord.latitude,
            longitude: coord.longitude,
            elevation,
        }
    }

    /// Latitude/longitude of this vertex.
    #[inline]
    #[must_use]
    pub fn coord(&self) -> GeoCoord {
        GeoCoord {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A quad face as `(north, east, south, west)` vertex indices.
///
/// The corner order is the winding: edges run north→east→south→west→north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuadFace {
    /// First corner.
    pub north: u32,
    /// Second corner.
    pub east: u32,
    /// Third corner.
    pub south: u32,
    /// Fourth corner.
    pub west: u32,
}

impl QuadFace {
    /// Create a face from its corners in winding order.
    #[must_use]
    pub const fn new(north: u32, east: u32, south: u32, west: u32) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Corners in winding order.
    #[inline]
    #[must_use]
    pub const fn corners(&self) -> [u32; 4] {
        [self.north, self.east, self.south, self.west]
    }

    /// The four directed boundary edges in winding order.
    #[must_use]
    pub const fn edges(&self) -> [(u32, u32); 4] {
        [
            (self.north, self.east),
            (self.east, self.south),
            (self.south, self.west),
            (self.west, self.north),
        ]
    }
}

impl From<[u32; 4]> for QuadFace {
    fn from([north, east, south, west]: [u32; 4]) -> Self {
        Self::new(north, east, south, west)
    }
}
