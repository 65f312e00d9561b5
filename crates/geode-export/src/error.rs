/// Errors from writing a mesh.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}
