//! Terrain parameter errors.

/// Errors produced when validating roughness parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A parameter is NaN or infinite.
    #[error("roughness parameter `{name}` must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// An exponent is zero or negative, which would blow up on zero-length edges
    /// or flatten the displacement entirely.
    #[error("roughness exponent `{name}` must be positive, got {value}")]
    NonPositiveExponent {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
