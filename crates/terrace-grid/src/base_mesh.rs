//! Indexed reference mesh produced by the topology builders.

use glam::{Vec2, Vec3};

/// Un-terraced ground mesh: positions on the `y = 0` plane, UVs and a
/// triangle list (3 indices per triangle).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseMesh {
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl BaseMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate the index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}
