use geode_export::ExportError;
use geode_planet::GenerationError;
use geode_terrain::TerrainError;

/// Anything that stops a `geode` run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("invalid terrain settings: {0}")]
    Terrain(#[from] TerrainError),
    #[error("latitude must be within [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),
    #[error("query depth {depth} exceeds the maximum of {max}")]
    QueryDepthTooLarge { depth: u32, max: u32 },
    #[error("longitude must be finite, got {0}")]
    InvalidLongitude(f64),
}
