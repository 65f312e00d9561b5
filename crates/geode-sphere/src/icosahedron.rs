//! The 12-vertex, 10-quad icosahedral base layout.
//!
//! One vertex sits on each pole, five on a northern ring and five on a southern
//! ring offset by `π/5`. Pairs of icosahedron triangles sharing a ring-to-ring
//! edge are merged into rhombic quads, giving 10 faces ordered band by band
//! from west to east, each band listed north before south.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::GeoCoord;

/// Number of vertices in the base layout.
pub const BASE_VERTEX_COUNT: usize = 12;

/// Base quads as `(north, east, south, west)` vertex indices.
pub const BASE_FACES: [[u32; 4]; 10] = [
    [0, 2, 6, 1],
    [1, 6, 11, 10],
    [0, 3, 7, 2],
    [2, 7, 11, 6],
    [0, 4, 8, 3],
    [3, 8, 11, 7],
    [0, 5, 9, 4],
    [4, 9, 11, 8],
    [0, 1, 10, 5],
    [5, 10, 11, 9],
];

/// Latitude of the northern ring, `π/2 − arccos(1/√5)` (about 26.57°).
#[must_use]
pub fn ring_latitude() -> f64 {
    FRAC_PI_2 - libm::acos(1.0 / libm::sqrt(5.0))
}

/// The 12 base coordinates: north pole, northern ring, southern ring, south pole.
#[must_use]
pub fn base_coords() -> [GeoCoord; BASE_VERTEX_COUNT] {
    let ring = ring_latitude();
    let step = 2.0 * PI / 5.0;

    let mut coords = [GeoCoord::default(); BASE_VERTEX_COUNT];
    coords[0] = GeoCoord::new(FRAC_PI_2, 0.0);
    for k in 0..5 {
        coords[1 + k] = GeoCoord::new(ring, k as f64 * step);
        coords[6 + k] = GeoCoord::new(-ring, PI / 5.0 + k as f64 * step);
    }
    coords[11] = GeoCoord::new(-FRAC_PI_2, 0.0);
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_ring_latitude_value() {
        let expected = 26.565_051_177_077_99_f64.to_radians();
        assert!((ring_latitude() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_base_vertices_form_regular_icosahedron() {
        let points: Vec<_> = base_coords().iter().map(|c| c.to_unit_vector()).collect();
        let edge = 4.0 / (10.0 + 2.0 * 5.0_f64.sqrt()).sqrt();

        let mut neighbours = vec![0; BASE_VERTEX_COUNT];
        for i in 0..BASE_VERTEX_COUNT {
            for j in (i + 1)..BASE_VERTEX_COUNT {
                if (points[i].distance(points[j]) - edge).abs() < 1e-9 {
                    neighbours[i] += 1;
                    neighbours[j] += 1;
                }
            }
        }
        assert!(neighbours.iter().all(|&n| n == 5), "{neighbours:?}");
    }

    #[test]
    fn test_base_longitudes_normalized() {
        for c in base_coords() {
            assert!(c.longitude > -PI && c.longitude <= PI, "{c:?}");
        }
    }

    #[test]
    fn test_every_face_touches_one_pole() {
        for face in BASE_FACES {
            let poles = face.iter().filter(|&&i| i == 0 || i == 11).count();
            assert_eq!(poles, 1, "face {face:?}");
        }
    }

    #[test]
    fn test_base_quads_share_edges_in_opposite_directions() {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in BASE_FACES {
            for i in 0..4 {
                *directed.entry((face[i], face[(i + 1) % 4])).or_default() += 1;
            }
        }
        assert_eq!(directed.len(), 40);
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge {a}->{b} used twice in the same direction");
            assert!(directed.contains_key(&(b, a)), "edge {a}->{b} has no twin");
        }
    }
}
