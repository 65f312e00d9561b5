use geode_mesh::TopologyError;
use geode_terrain::TerrainError;

/// Errors from [`generate`](crate::generate).
///
/// Everything except [`Topology`](GenerationError::Topology) is a rejected
/// request and is reported before any vertex is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("refinement_levels must be at least 1")]
    ZeroRefinementLevels,
    #[error("refinement_levels {requested} exceeds the maximum of {max}")]
    TooManyRefinementLevels { requested: u32, max: u32 },
    #[error("evaluation depth {depth} (levels + depth_margin) exceeds the maximum of {max}")]
    EvaluationDepthTooLarge { depth: u32, max: u32 },
    #[error("seed must be finite, got {0}")]
    NonFiniteSeed(f64),
    #[error("sphere_radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("elevation_scale must be positive and finite, got {0}")]
    InvalidElevationScale(f64),
    #[error(transparent)]
    Roughness(#[from] TerrainError),
    #[error("mesh topology is corrupt: {0}")]
    Topology(#[from] TopologyError),
}
