//! Output buffers of a terracing pass.

use glam::{Vec2, Vec3};

use crate::band::BandUv;
use crate::error::TerraceError;

/// An interleaved vertex for consumers that upload a single vertex stream.
///
/// Layout (20 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..20]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerraceVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerraceVertex, [u8; 20]);

impl TerraceVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Axis-aligned bounds of a set of vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Positions, UVs and a triangle list produced by terracing.
///
/// `vertices` and `uvs` are index-parallel. Buffers only grow while a pass
/// runs and are handed to the caller by value when it completes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerraceBuffers {
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl TerraceBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Push one triangle with fresh vertex slots, indexed from `base`.
    pub(crate) fn push_triangle(&mut self, corners: [Vec3; 3], uv: &BandUv, base: u32) {
        self.vertices.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&uv.corners());
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Check the buffer invariants: parallel UVs, whole triangles and every
    /// index in range.
    pub fn validate(&self) -> Result<(), TerraceError> {
        if self.uvs.len() != self.vertices.len() {
            return Err(TerraceError::UvCountMismatch {
                vertices: self.vertices.len(),
                uvs: self.uvs.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(TerraceError::IncompleteTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(TerraceError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Bounds of all emitted vertices, or `None` for empty buffers.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.vertices.first()?;
        let bounds = self.vertices.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, &v| Bounds {
                min: b.min.min(v),
                max: b.max.max(v),
            },
        );
        Some(bounds)
    }

    /// Move every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merge another pass's output, rebasing its indices past ours.
    pub fn append(&mut self, other: TerraceBuffers) -> Result<(), TerraceError> {
        other.validate()?;
        let total = self.vertices.len() + other.vertices.len();
        if total > u32::MAX as usize + 1 {
            return Err(TerraceError::IndexOverflow);
        }
        let base = self.vertices.len() as u32;

        self.vertices.extend(other.vertices);
        self.uvs.extend(other.uvs);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
        Ok(())
    }

    /// Interleave positions and UVs into one vertex stream.
    pub fn interleaved(&self) -> Vec<TerraceVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .map(|(&p, &uv)| TerraceVertex::new(p, uv))
            .collect()
    }

    /// Raw index bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate the index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Positions of each triangle's corners.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles()
            .map(|t| t.map(|i| self.vertices[i as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle(y: f32) -> TerraceBuffers {
        let mut buffers = TerraceBuffers::new();
        buffers.push_triangle(
            [
                Vec3::new(0.0, y, 0.0),
                Vec3::new(0.0, y, 1.0),
                Vec3::new(1.0, y, 0.0),
            ],
            &BandUv::new(0, 1),
            0,
        );
        buffers
    }

    #[test]
    fn test_vertex_is_twenty_bytes() {
        assert_eq!(std::mem::size_of::<TerraceVertex>(), 20);
        let buffers = one_triangle(1.0);
        let stream = buffers.interleaved();
        let bytes: &[u8] = bytemuck::cast_slice(&stream);
        assert_eq!(bytes.len(), 3 * 20);
        assert_eq!(buffers.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_interleaved_pairs_position_and_uv() {
        let buffers = one_triangle(2.0);
        let stream = buffers.interleaved();
        assert_eq!(stream.len(), 3);
        assert_eq!(stream[1].position, [0.0, 2.0, 1.0]);
        assert_eq!(stream[1].uv, buffers.uvs[1].to_array());
    }

    #[test]
    fn test_empty_buffers() {
        let buffers = TerraceBuffers::new();
        assert!(buffers.is_empty());
        assert_eq!(buffers.bounds(), None);
        assert!(buffers.validate().is_ok());
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut a = one_triangle(0.0);
        let b = one_triangle(1.0);
        a.append(b).unwrap();

        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(a.vertices[3].y, 1.0);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_translate_and_bounds() {
        let mut buffers = one_triangle(0.5);
        buffers.translate(Vec3::new(10.0, 0.0, -4.0));
        let bounds = buffers.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(10.0, 0.5, -4.0));
        assert_eq!(bounds.max, Vec3::new(11.0, 0.5, -3.0));
        assert_eq!(bounds.size(), Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(bounds.center(), Vec3::new(10.5, 0.5, -3.5));
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        };
        let b = Bounds {
            min: Vec3::splat(-1.0),
            max: Vec3::new(0.5, 2.0, 0.5),
        };
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::splat(-1.0));
        assert_eq!(u.max, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut buffers = one_triangle(0.0);
        buffers.indices[2] = 3;
        assert_eq!(
            buffers.validate(),
            Err(TerraceError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_partial_triangle() {
        let mut buffers = one_triangle(0.0);
        buffers.indices.pop();
        assert_eq!(buffers.validate(), Err(TerraceError::IncompleteTriangle(2)));
    }

    #[test]
    fn test_validate_rejects_missing_uvs() {
        let mut buffers = one_triangle(0.0);
        buffers.uvs.pop();
        assert_eq!(
            buffers.validate(),
            Err(TerraceError::UvCountMismatch {
                vertices: 3,
                uvs: 2
            })
        );
    }
}
