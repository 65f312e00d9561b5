//! Wavefront OBJ output for geodesic meshes.

mod error;
mod obj;

pub use error::ExportError;
pub use obj::{ObjOptions, cartesian, export_obj, write_obj};
