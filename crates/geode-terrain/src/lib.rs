//! Fractal planet elevation: a seed tetrahedron enclosing the unit sphere is
//! bisected along its longest edge with stochastic midpoint displacement until
//! the cell containing the query point is small enough, and the corner heights
//! of that cell give the elevation.

pub mod climate;

mod error;
mod hash;
mod height_field;
mod params;
mod query;
mod tetrahedron;

pub use climate::{Biome, rainfall, temperature};
pub use error::TerrainError;
pub use hash::rand2;
pub use height_field::{Branch, Cell, HeightField, side_of_split};
pub use params::RoughnessParams;
pub use query::{DEFAULT_DEPTH, MAX_EVALUATION_DEPTH, SurfaceSample, planet_height};
pub use tetrahedron::{TetraVertex, Tetrahedron};
