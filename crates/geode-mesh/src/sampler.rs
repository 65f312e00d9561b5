//! The seam between mesh refinement and whatever produces elevations.

use glam::DVec3;

/// Produces an elevation for a direction on the unit sphere.
///
/// Refinement calls this from worker threads, so implementations must be
/// `Sync` and must not rely on call order.
pub trait ElevationSampler: Sync {
    /// Elevation at `direction` (unit length, height-field frame).
    fn elevation(&self, direction: DVec3) -> f64;
}

impl<F> ElevationSampler for F
where
    F: Fn(DVec3) -> f64 + Sync,
{
    fn elevation(&self, direction: DVec3) -> f64 {
        self(direction)
    }
}
