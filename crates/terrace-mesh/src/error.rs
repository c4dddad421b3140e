use glam::Vec3;

/// Errors raised by the terracing engine and its buffers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerraceError {
    /// The UV band count must be at least one.
    #[error("max_height must be at least 1")]
    ZeroMaxHeight,

    #[error("terrace step must be finite and positive, got {0}")]
    InvalidStep(f32),

    /// A source triangle carried a NaN or infinite coordinate.
    #[error("source triangle has a non-finite vertex: {vertices:?}")]
    NonFiniteHeight { vertices: [Vec3; 3] },

    /// Emitting more vertices would overflow a `u32` index.
    #[error("terrace output exceeds the u32 index range")]
    IndexOverflow,

    #[error("buffers hold {vertices} vertices but {uvs} uvs")]
    UvCountMismatch { vertices: usize, uvs: usize },

    #[error("index buffer length {0} is not a multiple of 3")]
    IncompleteTriangle(usize),

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
