//! Deterministic scalar hash driving every stochastic decision.

use std::f64::consts::PI;

/// Hash two reals to a pseudo-random value.
///
/// Computes `2·frac((p + π)(q + π)) − 1`, where `frac` truncates toward zero.
/// For `p, q > −π` the result lies in `[-1, 1)`. The function only uses IEEE
/// addition, multiplication and truncation, so the result is bit-identical on
/// every platform. Multiplication commutes exactly in IEEE arithmetic, which
/// makes the hash symmetric: `rand2(p, q) == rand2(q, p)` bit for bit.
#[inline]
#[must_use]
pub fn rand2(p: f64, q: f64) -> f64 {
    let r = (p + PI) * (q + PI);
    2.0 * (r - r.trunc()) - 1.0
}
