//! Topology invariants of a quad mesh.
//!
//! A violation here means the refinement engine has a bug; callers report it
//! and stop rather than trying to repair the mesh.

use rustc_hash::FxHashMap;

use crate::QuadFace;

/// A broken mesh invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    /// A face uses the same vertex for two of its corners.
    #[error("face {face} repeats vertex {index}")]
    DegenerateFace { face: usize, index: u32 },
    /// The same directed edge appears in more than one face.
    #[error("directed edge {from} -> {to} appears in more than one face")]
    DuplicateDirectedEdge { from: u32, to: u32 },
    /// A directed edge has no partner running the opposite way.
    #[error("edge {from} -> {to} has no opposite edge; the mesh has a seam")]
    OpenEdge { from: u32, to: u32 },
    /// The vertex count no longer fits a `u32` index.
    #[error("vertex count {0} exceeds the u32 index range")]
    IndexOverflow(usize),
}

/// Check that every corner of every face indexes one of `vertex_count` vertices.
pub fn check_face_indices(vertex_count: usize, faces: &[QuadFace]) -> Result<(), TopologyError> {
    for (face_index, face) in faces.iter().enumerate() {
        if let Some(&index) = face
            .corners()
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(TopologyError::IndexOutOfRange {
                face: face_index,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Check that `faces` form a closed, consistently wound surface over
/// `vertex_count` vertices.
///
/// Every index must be in range, no face may repeat a vertex, and every
/// directed edge must appear exactly once with its reverse also present.
pub fn validate_topology(vertex_count: usize, faces: &[QuadFace]) -> Result<(), TopologyError> {
    check_face_indices(vertex_count, faces)?;

    let mut directed: FxHashMap<(u32, u32), usize> =
        FxHashMap::with_capacity_and_hasher(faces.len() * 4, Default::default());

    for (face_index, face) in faces.iter().enumerate() {
        let corners = face.corners();
        for (i, &index) in corners.iter().enumerate() {
            if corners[..i].contains(&index) {
                return Err(TopologyError::DegenerateFace {
                    face: face_index,
                    index,
                });
            }
        }
        for (from, to) in face.edges() {
            if directed.insert((from, to), face_index).is_some() {
                return Err(TopologyError::DuplicateDirectedEdge { from, to });
            }
        }
    }

    for &(from, to) in directed.keys() {
        if !directed.contains_key(&(to, from)) {
            return Err(TopologyError::OpenEdge { from, to });
        }
    }
    Ok(())
}
