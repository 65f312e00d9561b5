//! The geodesic quad-sphere mesh.

use geode_sphere::{BASE_FACES, base_coords};
use tracing::debug;

use crate::{ElevationSampler, MeshVertex, QuadFace, TopologyError, validate_topology};

/// Vertices and quad faces of a geodesic sphere.
///
/// Vertex indices are stable: refinement only ever appends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeodesicMesh {
    pub vertices: Vec<MeshVertex>,
    pub faces: Vec<QuadFace>,
}

impl GeodesicMesh {
    /// Build the 12-vertex, 10-quad icosahedral base mesh, sampling one
    /// elevation per vertex.
    pub fn base<S: ElevationSampler + ?Sized>(sampler: &S) -> Self {
        let vertices: Vec<MeshVertex> = base_coords()
            .into_iter()
            .map(|coord| MeshVertex::new(coord, sampler.elevation(coord.to_unit_vector())))
            .collect();
        let faces: Vec<QuadFace> = BASE_FACES.into_iter().map(QuadFace::from).collect();
        debug!(
            "Base mesh: {} vertices, {} faces",
            vertices.len(),
            faces.len()
        );
        Self { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that the mesh is closed and every face index is in range.
    pub fn validate(&self) -> Result<(), TopologyError> {
        validate_topology(self.vertices.len(), &self.faces)
    }

    /// Lowest and highest vertex elevation, or `None` for an empty mesh.
    pub fn elevation_range(&self) -> Option<(f64, f64)> {
        self.vertices.iter().map(|v| v.elevation).fold(None, |range, e| {
            Some(match range {
                None => (e, e),
                Some((lo, hi)) => (lo.min(e), hi.max(e)),
            })
        })
    }
}
