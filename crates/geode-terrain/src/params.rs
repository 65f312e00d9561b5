//! Roughness controls for midpoint displacement.

use crate::TerrainError;

/// Weights and exponents shaping the fractal displacement.
///
/// A new midpoint's height is
/// `mean + seed·dd1·|Δh|^powa + jitter·dd2·|ab|^pow`: the first term scales
/// with the height difference across the split edge, the second with the
/// edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoughnessParams {
    /// Baseline height of the four seed corners (slightly below sea level).
    pub sea_level: f64,
    /// Weight of the height-difference term.
    pub dd1: f64,
    /// Exponent of the height-difference term.
    pub powa: f64,
    /// Weight of the edge-length term.
    pub dd2: f64,
    /// Exponent of the edge-length term.
    pub pow: f64,
}

impl Default for RoughnessParams {
    fn default() -> Self {
        Self {
            sea_level: -0.02,
            dd1: 0.45,
            powa: 1.0,
            dd2: 0.035,
            pow: 0.47,
        }
    }
}

impl RoughnessParams {
    /// Reject parameters that would produce a degenerate field.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NonFinite`] for NaN or infinite values and
    /// [`TerrainError::NonPositiveExponent`] for exponents `<= 0`.
    pub fn validate(&self) -> Result<(), TerrainError> {
        let fields = [
            ("sea_level", self.sea_level),
            ("dd1", self.dd1),
            ("powa", self.powa),
            ("dd2", self.dd2),
            ("pow", self.pow),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TerrainError::NonFinite { name, value });
            }
        }
        for (name, value) in [("powa", self.powa), ("pow", self.pow)] {
            if value <= 0.0 {
                return Err(TerrainError::NonPositiveExponent { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(RoughnessParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let params = RoughnessParams {
            dd2: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(TerrainError::NonFinite { name: "dd2", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_exponent() {
        let params = RoughnessParams {
            pow: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(TerrainError::NonPositiveExponent { name: "pow", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_exponent_as_non_finite() {
        let params = RoughnessParams {
            powa: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(TerrainError::NonFinite { name: "powa", .. })
        ));
    }
}
