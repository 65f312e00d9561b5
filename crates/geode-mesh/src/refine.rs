//! The refinement engine: splits every quad into four, once per level.
//!
//! A pass runs in two phases. The first walks the faces in order, resolves
//! every edge midpoint through the [`EdgeRegistry`] and assigns vertex indices,
//! so topology never depends on scheduling. The second computes positions and
//! elevations for the new vertices, split across worker threads that each own a
//! disjoint range of pre-allocated slots.

use geode_sphere::spherical_midpoint;
use tracing::{debug, info};

use crate::{
    EdgeRegistry, ElevationSampler, GeodesicMesh, MeshVertex, QuadFace, TopologyError,
    check_face_indices,
};

/// Below this many new vertices a pass stays on the calling thread.
const MIN_PARALLEL_VERTICES: usize = 1024;

/// Progress of a [`RefinementEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefinementState {
    /// No pass has run yet.
    Idle,
    /// `level` passes have completed and more remain.
    Subdividing { level: u32 },
    /// Every requested pass has completed and the topology checked out.
    Done,
}

/// Drives a fixed number of refinement passes over a [`GeodesicMesh`].
pub struct RefinementEngine<'s, S: ElevationSampler + ?Sized> {
    mesh: GeodesicMesh,
    sampler: &'s S,
    target_levels: u32,
    completed: u32,
    threads: usize,
    state: RefinementState,
}

impl<'s, S: ElevationSampler + ?Sized> RefinementEngine<'s, S> {
    /// Prepare `levels` passes over `mesh`, sampling new vertices from `sampler`.
    pub fn new(mesh: GeodesicMesh, sampler: &'s S, levels: u32) -> Self {
        Self {
            mesh,
            sampler,
            target_levels: levels,
            completed: 0,
            threads: 0,
            state: RefinementState::Idle,
        }
    }

    /// Number of worker threads for the per-vertex phase. `0` uses one per
    /// logical CPU, `1` keeps everything on the calling thread.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn state(&self) -> RefinementState {
        self.state
    }

    pub fn mesh(&self) -> &GeodesicMesh {
        &self.mesh
    }

    /// Run one pass, or finish if all passes are done.
    ///
    /// Stepping a finished engine is a no-op that returns [`RefinementState::Done`].
    pub fn step(&mut self) -> Result<RefinementState, TopologyError> {
        if self.state == RefinementState::Done {
            return Ok(self.state);
        }
        if self.completed < self.target_levels {
            self.subdivide()?;
            self.completed += 1;
        }
        self.state = if self.completed < self.target_levels {
            RefinementState::Subdividing {
                level: self.completed,
            }
        } else {
            self.mesh.validate()?;
            RefinementState::Done
        };
        Ok(self.state)
    }

    /// Run every remaining pass and return the finished mesh.
    pub fn run(mut self) -> Result<GeodesicMesh, TopologyError> {
        while self.step()? != RefinementState::Done {}
        Ok(self.mesh)
    }

    fn worker_count(&self, work: usize) -> usize {
        if work < MIN_PARALLEL_VERTICES {
            return 1;
        }
        let threads = match self.threads {
            0 => num_cpus::get(),
            n => n,
        };
        threads.clamp(1, work)
    }

    fn subdivide(&mut self) -> Result<(), TopologyError> {
        let first_new = self.mesh.vertices.len();
        let worst_case = first_new + self.mesh.faces.len() * 5;
        if u32::try_from(worst_case).is_err() {
            return Err(TopologyError::IndexOverflow(worst_case));
        }
        // Checked above: every index this pass can assign fits.
        let mut next_index = first_new as u32;

        let mut registry = EdgeRegistry::with_capacity(self.mesh.faces.len() * 5 / 2);
        let mut pending: Vec<(u32, u32)> = Vec::with_capacity(self.mesh.faces.len() * 5 / 2);
        let mut faces = Vec::with_capacity(self.mesh.faces.len() * 4);

        for face in &self.mesh.faces {
            let mut split = |a: u32, b: u32| {
                registry.midpoint_or_insert_with(a, b, || {
                    pending.push((a, b));
                    next_index += 1;
                    next_index - 1
                })
            };
            let QuadFace {
                north,
                east,
                south,
                west,
            } = *face;
            let north_east = split(north, east);
            let east_south = split(east, south);
            let south_west = split(south, west);
            let west_north = split(west, north);
            let center = split(east, west);

            faces.push(QuadFace::new(north, north_east, center, west_north));
            faces.push(QuadFace::new(north_east, east, east_south, center));
            faces.push(QuadFace::new(center, east_south, south, south_west));
            faces.push(QuadFace::new(west_north, center, south_west, west));
        }

        check_face_indices(next_index as usize, &faces)?;
        debug!(
            "Pass {}: {} edges split across {} faces",
            self.completed + 1,
            registry.len(),
            self.mesh.faces.len()
        );
        drop(registry);

        let mut fresh = vec![MeshVertex::default(); pending.len()];
        let workers = self.worker_count(pending.len());
        let parents = self.mesh.vertices.as_slice();
        let sampler = self.sampler;
        if workers <= 1 {
            fill_midpoints(parents, sampler, &pending, &mut fresh);
        } else {
            let chunk = pending.len().div_ceil(workers);
            std::thread::scope(|scope| {
                for (edges, slots) in pending.chunks(chunk).zip(fresh.chunks_mut(chunk)) {
                    scope.spawn(move || fill_midpoints(parents, sampler, edges, slots));
                }
            });
        }

        self.mesh.vertices.extend(fresh);
        self.mesh.faces = faces;
        info!(
            "Refinement level {}: {} vertices, {} faces ({} worker threads)",
            self.completed + 1,
            self.mesh.vertices.len(),
            self.mesh.faces.len(),
            workers
        );
        Ok(())
    }
}

/// Compute the spherical midpoint and elevation for each `(a, b)` edge into the
/// matching slot.
fn fill_midpoints<S: ElevationSampler + ?Sized>(
    parents: &[MeshVertex],
    sampler: &S,
    edges: &[(u32, u32)],
    slots: &mut [MeshVertex],
) {
    for (&(a, b), slot) in edges.iter().zip(slots.iter_mut()) {
        let coord = spherical_midpoint(parents[a as usize].coord(), parents[b as usize].coord());
        *slot = MeshVertex::new(coord, sampler.elevation(coord.to_unit_vector()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use rustc_hash::FxHashSet;
    use std::f64::consts::PI;

    fn flat(_: DVec3) -> f64 {
        0.0
    }

    fn bumpy(p: DVec3) -> f64 {
        (p.x * 3.0).sin() * (p.z * 5.0).cos() + p.y * p.y
    }

    fn refine(levels: u32, threads: usize) -> GeodesicMesh {
        let sampler = bumpy;
        let base = GeodesicMesh::base(&sampler);
        RefinementEngine::new(base, &sampler, levels)
            .with_threads(threads)
            .run()
            .expect("refinement must keep the topology valid")
    }

    #[test]
    fn test_one_level_counts() {
        let mesh = refine(1, 1);
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.face_count(), 40);
    }

    #[test]
    fn test_counts_per_level() {
        let expected = [(12, 10), (42, 40), (162, 160), (642, 640), (2562, 2560)];
        for (levels, &(vertices, faces)) in expected.iter().enumerate() {
            let mesh = refine(levels as u32, 1);
            assert_eq!(
                (mesh.vertex_count(), mesh.face_count()),
                (vertices, faces),
                "counts after {levels} levels"
            );
        }
    }

    #[test]
    fn test_new_vertices_equal_unique_edges_plus_faces() {
        let base = refine(2, 1);
        let mut edges = FxHashSet::default();
        for face in &base.faces {
            for (a, b) in face.edges() {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        let next = refine(3, 1);
        assert_eq!(
            next.vertex_count() - base.vertex_count(),
            edges.len() + base.face_count(),
            "one vertex per shared edge plus one per face diagonal"
        );
    }

    #[test]
    fn test_refined_mesh_is_watertight() {
        for levels in 0..=4 {
            assert_eq!(refine(levels, 1).validate(), Ok(()), "level {levels}");
        }
    }

    #[test]
    fn test_vertices_are_append_only() {
        let coarse = refine(2, 1);
        let fine = refine(3, 1);
        assert_eq!(&fine.vertices[..coarse.vertex_count()], &coarse.vertices[..]);
    }

    #[test]
    fn test_result_independent_of_thread_count() {
        // The fourth pass creates enough vertices to fan out.
        let sequential = refine(4, 1);
        for threads in [2, 3, 8, 0] {
            assert_eq!(
                refine(4, threads),
                sequential,
                "{threads} threads must give the same mesh"
            );
        }
    }

    #[test]
    fn test_longitudes_are_normalized() {
        for v in refine(3, 1).vertices {
            assert!(v.longitude > -PI && v.longitude <= PI, "{}", v.longitude);
            assert!(v.latitude.abs() <= PI / 2.0 + 1e-12);
        }
    }

    #[test]
    fn test_new_vertices_lie_between_parents() {
        let sampler = flat;
        let base = GeodesicMesh::base(&sampler);
        let face = base.faces[0];
        let mesh = RefinementEngine::new(base.clone(), &sampler, 1).run().unwrap();
        let north = base.vertices[face.north as usize].coord().to_unit_vector();
        let east = base.vertices[face.east as usize].coord().to_unit_vector();
        let north_east = mesh.faces[0].east;
        let mid = mesh.vertices[north_east as usize].coord().to_unit_vector();
        let expected = (north + east).normalize();
        assert!(
            (mid - expected).length() < 1e-12,
            "edge midpoint must be the normalized chord midpoint"
        );
    }

    #[test]
    fn test_state_machine_progression() {
        let sampler = flat;
        let base = GeodesicMesh::base(&sampler);
        let mut engine = RefinementEngine::new(base, &sampler, 2);
        assert_eq!(engine.state(), RefinementState::Idle);
        assert_eq!(engine.step(), Ok(RefinementState::Subdividing { level: 1 }));
        assert_eq!(engine.mesh().face_count(), 40);
        assert_eq!(engine.step(), Ok(RefinementState::Done));
        assert_eq!(engine.mesh().face_count(), 160);
        assert_eq!(engine.step(), Ok(RefinementState::Done), "done is terminal");
        assert_eq!(engine.mesh().face_count(), 160);
    }

    #[test]
    fn test_zero_levels_finishes_without_subdividing() {
        let sampler = flat;
        let base = GeodesicMesh::base(&sampler);
        let mut engine = RefinementEngine::new(base, &sampler, 0);
        assert_eq!(engine.step(), Ok(RefinementState::Done));
        assert_eq!(engine.mesh().vertex_count(), 12);
    }

    #[test]
    fn test_child_faces_keep_parent_corners() {
        let mesh = refine(1, 1);
        let parent = QuadFace::from(geode_sphere::BASE_FACES[0]);
        assert_eq!(mesh.faces[0].north, parent.north);
        assert_eq!(mesh.faces[1].east, parent.east);
        assert_eq!(mesh.faces[2].south, parent.south);
        assert_eq!(mesh.faces[3].west, parent.west);
        assert_eq!(mesh.faces[0].south, mesh.faces[2].north, "shared center");
    }
}
