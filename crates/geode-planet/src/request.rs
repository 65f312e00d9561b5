//! What to generate.

use geode_terrain::{MAX_EVALUATION_DEPTH, RoughnessParams};

use crate::GenerationError;

/// Highest accepted refinement level. Storage grows as `10·4^N` faces, so
/// level 10 already means ten million quads.
pub const MAX_REFINEMENT_LEVELS: u32 = 10;

/// Parameters of one generation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Seed of the fractal field.
    pub seed: f64,
    /// Number of refinement passes over the base mesh.
    pub refinement_levels: u32,
    /// Split each quad into two triangles on output.
    pub triangulate: bool,
    /// Radius of the output sphere.
    pub sphere_radius: f64,
    /// Multiplier applied to elevations on output.
    pub elevation_scale: f64,
    pub roughness: RoughnessParams,
    /// Mesh vertices are evaluated at `refinement_levels + depth_margin`.
    pub depth_margin: u32,
    /// Worker threads for refinement; `0` means one per logical CPU.
    pub threads: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            seed: 0.123,
            refinement_levels: 5,
            triangulate: false,
            sphere_radius: 20.0,
            elevation_scale: 1.0,
            roughness: RoughnessParams::default(),
            depth_margin: 15,
            threads: 0,
        }
    }
}

impl GenerationRequest {
    /// Reject requests that cannot produce a sensible planet.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.refinement_levels == 0 {
            return Err(GenerationError::ZeroRefinementLevels);
        }
        if self.refinement_levels > MAX_REFINEMENT_LEVELS {
            return Err(GenerationError::TooManyRefinementLevels {
                requested: self.refinement_levels,
                max: MAX_REFINEMENT_LEVELS,
            });
        }
        let depth = self.evaluation_depth();
        if depth > MAX_EVALUATION_DEPTH {
            return Err(GenerationError::EvaluationDepthTooLarge {
                depth,
                max: MAX_EVALUATION_DEPTH,
            });
        }
        if !self.seed.is_finite() {
            return Err(GenerationError::NonFiniteSeed(self.seed));
        }
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(GenerationError::InvalidRadius(self.sphere_radius));
        }
        if !(self.elevation_scale.is_finite() && self.elevation_scale > 0.0) {
            return Err(GenerationError::InvalidElevationScale(self.elevation_scale));
        }
        self.roughness.validate()?;
        Ok(())
    }

    /// Bisection depth used for every mesh vertex.
    pub fn evaluation_depth(&self) -> u32 {
        self.refinement_levels.saturating_add(self.depth_margin)
    }
}
