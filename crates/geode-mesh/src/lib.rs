//! Geodesic quad-sphere meshes: the icosahedral base mesh, per-pass edge
//! registries, and the refinement engine that splits every quad into four while
//! sampling an elevation source at each new vertex.

mod edge;
mod mesh;
mod refine;
mod sampler;
mod topology;
mod vertex;

pub use edge::{EdgeKey, EdgeRecord, EdgeRegistry};
pub use mesh::GeodesicMesh;
pub use refine::{RefinementEngine, RefinementState};
pub use sampler::ElevationSampler;
pub use topology::{TopologyError, check_face_indices, validate_topology};
pub use vertex::{MeshVertex, QuadFace};
