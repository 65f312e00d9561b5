//! Longest-edge tetrahedral bisection with stochastic midpoint displacement.
//!
//! Each level splits the current cell across its longest edge `ab` at a
//! jittered midpoint `e`, which receives a displaced height. The two children
//! `(c, d, a, e)` and `(c, d, b, e)` share the face `cde`; an orientation test
//! picks the child holding the query point. After `depth` levels the mean of
//! the four corner heights is the elevation.

use glam::DVec3;

use crate::{RoughnessParams, TetraVertex, Tetrahedron, rand2};

/// Which child a bisection step descended into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// The child `(c, d, a, e)`, on the same side of plane `cde` as `a`.
    TowardA,
    /// The child `(c, d, b, e)`.
    TowardB,
}

/// The four corners of the cell currently being narrowed, in `(a, b, c, d)` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Corners `a`, `b`, `c`, `d`.
    pub corners: [TetraVertex; 4],
}

impl From<Tetrahedron> for Cell {
    fn from(tetra: Tetrahedron) -> Self {
        Self {
            corners: tetra.vertices,
        }
    }
}

impl Cell {
    /// Mean of the four corner heights.
    #[must_use]
    pub fn mean_height(&self) -> f64 {
        let [a, b, c, d] = self.corners;
        0.25 * (a.height + b.height + c.height + d.height)
    }

    /// Relabel the corners until `ab` is the longest edge.
    ///
    /// Every relabelling moves a strictly longer edge into `ab`, so this ends
    /// after at most five swaps. Ties keep the current labels.
    #[must_use]
    pub fn longest_edge_first(self) -> Self {
        let [mut a, mut b, mut c, mut d] = self.corners;
        loop {
            let ab = dist2(&a, &b);
            (a, b, c, d) = if ab < dist2(&a, &c) {
                (a, c, b, d)
            } else if ab < dist2(&a, &d) {
                (a, d, b, c)
            } else if ab < dist2(&b, &c) {
                (b, c, a, d)
            } else if ab < dist2(&b, &d) {
                (b, d, a, c)
            } else if ab < dist2(&c, &d) {
                (c, d, a, b)
            } else {
                return Self {
                    corners: [a, b, c, d],
                };
            };
        }
    }

    /// Synthesize the displaced midpoint of edge `ab`.
    ///
    /// Expects `ab` to already be the longest edge.
    #[must_use]
    pub fn edge_midpoint(&self, params: &RoughnessParams) -> TetraVertex {
        let [a, b, ..] = self.corners;
        let length2 = dist2(&a, &b);

        let vseed = rand2(a.vseed, b.vseed);
        let jitter = rand2(vseed, vseed);
        let t = if length2 == 0.0 {
            0.5
        } else {
            0.5 + 0.1 * jitter
        };
        let s = 1.0 - t;

        // The corner with the smaller seed takes the jittered weight.
        let (wa, wb) = if a.vseed < b.vseed { (t, s) } else { (s, t) };
        let position = a.position * wa + b.position * wb;

        let height = 0.5 * (a.height + b.height)
            + vseed * params.dd1 * libm::pow((a.height - b.height).abs(), params.powa)
            + jitter * params.dd2 * libm::pow(libm::sqrt(length2), params.pow);

        TetraVertex {
            height,
            vseed,
            position,
        }
    }

    /// One bisection level: split across the longest edge and keep the child
    /// containing `point`.
    #[must_use]
    pub fn split(self, point: DVec3, params: &RoughnessParams) -> (Branch, Cell) {
        let cell = self.longest_edge_first();
        let e = cell.edge_midpoint(params);
        let [a, b, c, d] = cell.corners;

        let branch = side_of_split(a.position, c.position, d.position, e.position, point);
        let corners = match branch {
            Branch::TowardA => [c, d, a, e],
            Branch::TowardB => [c, d, b, e],
        };
        (branch, Cell { corners })
    }
}

/// Orientation test against the splitting plane through `c`, `d` and `e`.
///
/// Compares the signed volume of `(a, c, d)` about `e` with the same volume
/// taken with `point` in place of `a`. Equal signs put `point` with `a`; a
/// zero product (point on the plane) goes to `b`.
#[must_use]
pub fn side_of_split(a: DVec3, c: DVec3, d: DVec3, e: DVec3, point: DVec3) -> Branch {
    let ce = c - e;
    let de = d - e;
    let reference = (a - e).dot(ce.cross(de));
    let candidate = (point - e).dot(ce.cross(de));
    if reference * candidate > 0.0 {
        Branch::TowardA
    } else {
        Branch::TowardB
    }
}

#[inline]
fn dist2(a: &TetraVertex, b: &TetraVertex) -> f64 {
    let d = a.position - b.position;
    d.x * d.x + d.y * d.y + d.z * d.z
}

/// Fractal elevation field for one seed.
///
/// Holds only immutable data, so a single field can be shared by reference
/// across any number of threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightField {
    tetra: Tetrahedron,
    params: RoughnessParams,
}

impl HeightField {
    /// Build the field for `seed` with the given roughness.
    #[must_use]
    pub fn new(seed: f64, params: RoughnessParams) -> Self {
        Self {
            tetra: Tetrahedron::from_seed(seed, params.sea_level),
            params,
        }
    }

    /// The seed tetrahedron.
    #[must_use]
    pub fn tetrahedron(&self) -> &Tetrahedron {
        &self.tetra
    }

    /// Roughness parameters in use.
    #[must_use]
    pub fn params(&self) -> &RoughnessParams {
        &self.params
    }

    /// Elevation at `point` after `depth` bisection levels.
    ///
    /// `point` is normally on the unit sphere but any point inside the seed
    /// tetrahedron is valid. Runs in `O(depth)` without allocating; depth 0
    /// returns the mean of the seed corners. The result targets `[-1, 1]` but
    /// is not clamped.
    #[must_use]
    pub fn evaluate(&self, point: DVec3, depth: u32) -> f64 {
        let mut cell = Cell::from(self.tetra);
        for _ in 0..depth {
            cell = cell.split(point, &self.params).1;
        }
        cell.mean_height()
    }
}
