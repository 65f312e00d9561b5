//! OBJ writer.
//!
//! Output space is the height-field frame with the z axis negated, so a
//! longitude increase runs towards `-z`. Quads are written `N W S E`; in
//! triangle mode each quad becomes `N W E` and `W S E`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geode_mesh::{GeodesicMesh, MeshVertex};
use glam::DVec3;
use tracing::info;

use crate::ExportError;

/// How to turn a mesh into OBJ text.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjOptions {
    /// Radius of the zero-elevation sphere.
    pub radius: f64,
    /// Multiplier applied to every elevation.
    pub elevation_scale: f64,
    /// Emit two triangles per quad instead of the quad.
    pub triangulate: bool,
    /// Written as `#` lines before the geometry.
    pub comment: Option<String>,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            radius: 20.0,
            elevation_scale: 1.0,
            triangulate: false,
            comment: None,
        }
    }
}

/// Output-space position of `vertex`.
pub fn cartesian(vertex: &MeshVertex, radius: f64, elevation_scale: f64) -> DVec3 {
    let r = radius + elevation_scale * vertex.elevation;
    let dir = vertex.coord().to_unit_vector();
    DVec3::new(r * dir.x, r * dir.y, -r * dir.z)
}

/// Write `mesh` as OBJ text to `out`.
///
/// Face indices are checked before anything is written, so a corrupt mesh
/// never produces a partial file body.
pub fn write_obj<W: Write>(
    mesh: &GeodesicMesh,
    options: &ObjOptions,
    out: &mut W,
) -> Result<(), ExportError> {
    let vertex_count = mesh.vertices.len();
    for (face, quad) in mesh.faces.iter().enumerate() {
        if let Some(&index) = quad.corners().iter().find(|&&i| i as usize >= vertex_count) {
            return Err(ExportError::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
    }

    if let Some(comment) = &options.comment {
        for line in comment.lines() {
            writeln!(out, "# {line}")?;
        }
    }
    writeln!(
        out,
        "# {} vertices, {} {}",
        vertex_count,
        if options.triangulate {
            mesh.faces.len() * 2
        } else {
            mesh.faces.len()
        },
        if options.triangulate { "triangles" } else { "quads" }
    )?;

    for vertex in &mesh.vertices {
        let p = cartesian(vertex, options.radius, options.elevation_scale);
        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    for quad in &mesh.faces {
        let [n, e, s, w] = quad.corners().map(|i| i + 1);
        if options.triangulate {
            writeln!(out, "f {n} {w} {e}")?;
            writeln!(out, "f {w} {s} {e}")?;
        } else {
            writeln!(out, "f {n} {w} {s} {e}")?;
        }
    }
    Ok(())
}

/// Write `mesh` to an OBJ file at `path`, replacing any existing file.
pub fn export_obj(
    mesh: &GeodesicMesh,
    options: &ObjOptions,
    path: &Path,
) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(mesh, options, &mut out)?;
    out.flush()?;
    info!(
        "Wrote {} vertices and {} faces to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        path.display()
    );
    Ok(())
}
