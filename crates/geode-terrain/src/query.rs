//! Standalone surface queries by latitude and longitude.

use geode_sphere::GeoCoord;

use crate::{Biome, HeightField, RoughnessParams, rainfall, temperature};

/// Bisection depth used by standalone queries.
///
/// Each level roughly halves one edge of the cell; 25 levels resolve features
/// of about a metre on an Earth-sized sphere.
pub const DEFAULT_DEPTH: u32 = 25;

/// Deepest bisection accepted from configuration. Cell edges shrink below
/// `f64` resolution long before this.
pub const MAX_EVALUATION_DEPTH: u32 = 64;

/// Elevation at a latitude/longitude (radians) for `seed`, with default
/// roughness and [`DEFAULT_DEPTH`].
///
/// Rebuilds the seed tetrahedron on every call, so the answer never depends
/// on earlier queries.
#[must_use]
pub fn planet_height(latitude: f64, longitude: f64, seed: f64) -> f64 {
    let field = HeightField::new(seed, RoughnessParams::default());
    field.evaluate(GeoCoord::new(latitude, longitude).to_unit_vector(), DEFAULT_DEPTH)
}

/// Elevation plus derived climate at one surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Where the sample was taken.
    pub coord: GeoCoord,
    /// Elevation relative to sea level, roughly in `[-1, 1]`.
    pub height: f64,
    /// Relative temperature.
    pub temperature: f64,
    /// Relative rainfall.
    pub rainfall: f64,
    /// Table biome for the temperature/rainfall pair.
    pub biome: Biome,
}

impl SurfaceSample {
    /// Sample `field` at `coord` with `depth` bisection levels.
    #[must_use]
    pub fn query(field: &HeightField, coord: GeoCoord, depth: u32) -> Self {
        let height = field.evaluate(coord.to_unit_vector(), depth);
        let temperature = temperature(coord.latitude, height);
        let rainfall = rainfall(coord.latitude, temperature);
        Self {
            coord,
            height,
            temperature,
            rainfall,
            biome: Biome::from_climate(temperature, rainfall),
        }
    }
}
