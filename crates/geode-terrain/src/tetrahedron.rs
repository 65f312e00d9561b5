//! The seed tetrahedron enclosing the unit sphere.

use glam::DVec3;

use crate::rand2;

/// `√3` as an `f64` literal.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A corner of a (sub-)tetrahedron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TetraVertex {
    /// Elevation carried by this corner.
    pub height: f64,
    /// Pseudo-random seed from which child midpoints derive their own.
    pub vseed: f64,
    /// Position in the height-field frame.
    pub position: DVec3,
}

/// The four corners from which every height query starts.
///
/// Immutable once built; share it freely across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    /// Corners `a`, `b`, `c`, `d`.
    pub vertices: [TetraVertex; 4],
}

impl Tetrahedron {
    /// Build the tetrahedron for `seed`, every corner starting at `sea_level`.
    ///
    /// Corner seeds are chained through [`rand2`], each call consuming the
    /// outputs of the previous ones. Positions sit at `±(√3 + offset)` per axis;
    /// the small unequal offsets keep all six edge lengths distinct so the
    /// longest-edge choice never ties.
    #[must_use]
    pub fn from_seed(seed: f64, sea_level: f64) -> Self {
        let r1 = rand2(seed, seed);
        let r2 = rand2(r1, seed);
        let r3 = rand2(r2, r1);
        let r4 = rand2(r3, r2);

        let corner = |vseed: f64, x: f64, y: f64, z: f64| TetraVertex {
            height: sea_level,
            vseed,
            position: DVec3::new(x, y, z),
        };

        Self {
            vertices: [
                corner(r1, -SQRT_3 - 0.20, -SQRT_3 - 0.22, -SQRT_3 - 0.23),
                corner(r2, -SQRT_3 - 0.19, SQRT_3 + 0.18, SQRT_3 + 0.17),
                corner(r3, SQRT_3 + 0.21, -SQRT_3 - 0.24, SQRT_3 + 0.15),
                corner(r4, SQRT_3 + 0.24, SQRT_3 + 0.22, -SQRT_3 - 0.25),
            ],
        }
    }

    /// Signed volume of the tetrahedron, times six.
    #[must_use]
    pub fn signed_volume6(&self) -> f64 {
        let [a, b, c, d] = self.vertices.map(|v| v.position);
        (b - a).dot((c - a).cross(d - a))
    }

    /// Whether `point` lies strictly inside the tetrahedron.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        let p = self.vertices.map(|v| v.position);
        let faces = [(0, 1, 2, 3), (0, 1, 3, 2), (0, 2, 3, 1), (1, 2, 3, 0)];
        faces.iter().all(|&(i, j, k, opposite)| {
            let normal = (p[j] - p[i]).cross(p[k] - p[i]);
            let inside = normal.dot(p[opposite] - p[i]);
            let candidate = normal.dot(point - p[i]);
            inside * candidate > 0.0
        })
    }
}
