//! Regular square-grid topology and the square map record.

use glam::{Vec2, Vec3};
use terrace_heightfield::HeightfieldSampler;

use crate::base_mesh::BaseMesh;
use crate::error::GridError;
use crate::triangle::SourceTriangle;

/// Triangulate a `width × height` vertex lattice.
///
/// Vertex `(x, y)` sits at `(x, 0, y)` with UV `(x, y)` and flattened index
/// `x + y * width`. Each vertex with `x > 0 && y > 0` anchors the quad to
/// its upper-left and emits two triangles:
///
/// - A: `(i - (width + 1), i - 1, i)`
/// - B: `(i - (width + 1), i, i - width)`
///
/// Both wind counter-clockwise seen from +Y. A lattice narrower than two
/// vertices on either axis has vertices but no triangles.
pub fn square_grid(width: u32, height: u32) -> BaseMesh {
    let total = width as usize * height as usize;
    let quads = width.saturating_sub(1) as usize * height.saturating_sub(1) as usize;

    let mut mesh = BaseMesh {
        vertices: Vec::with_capacity(total),
        uvs: Vec::with_capacity(total),
        indices: Vec::with_capacity(quads * 6),
    };

    for y in 0..height {
        for x in 0..width {
            mesh.vertices.push(Vec3::new(x as f32, 0.0, y as f32));
            mesh.uvs.push(Vec2::new(x as f32, y as f32));

            if x == 0 || y == 0 {
                continue;
            }

            let i = x + y * width;
            let top_left = i - (width + 1);
            mesh.indices
                .extend_from_slice(&[top_left, i - 1, i, top_left, i, i - width]);
        }
    }

    mesh
}

/// A square map chunk: its base lattice plus one sampled height per vertex.
///
/// Heights are sampled once at construction; regenerating a chunk means
/// building a new record.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMap {
    width: u32,
    height: u32,
    origin: Vec2,
    mesh: BaseMesh,
    heights: Vec<f32>,
}

impl SquareMap {
    /// Build a map and sample its heights at `vertex.xz + origin`.
    pub fn generate(width: u32, height: u32, origin: Vec2, sampler: &HeightfieldSampler) -> Self {
        let _span =
            tracing::debug_span!("square_map_generate", width, height, ?origin).entered();

        let mesh = square_grid(width, height);
        let heights = mesh
            .vertices
            .iter()
            .map(|v| sampler.sample(Vec2::new(v.x, v.z) + origin))
            .collect();

        Self {
            width,
            height,
            origin,
            mesh,
            heights,
        }
    }

    /// Build a map from precomputed heights, one per vertex in row-major order.
    pub fn from_heights(
        width: u32,
        height: u32,
        origin: Vec2,
        heights: Vec<f32>,
    ) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if heights.len() != expected {
            return Err(GridError::HeightCountMismatch {
                expected,
                actual: heights.len(),
            });
        }
        Ok(Self {
            width,
            height,
            origin,
            mesh: square_grid(width, height),
            heights,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Noise-space origin this chunk was sampled at.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn mesh(&self) -> &BaseMesh {
        &self.mesh
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Height at lattice vertex `(x, y)`, or `None` outside the grid.
    pub fn height_at(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.heights.get((x + y * self.width) as usize).copied()
    }

    /// Iterate the base triangles with heights folded into `y`.
    pub fn source_triangles(&self) -> impl Iterator<Item = SourceTriangle> + '_ {
        self.mesh.triangles().map(|[a, b, c]| {
            SourceTriangle::new(self.lifted(a), self.lifted(b), self.lifted(c))
        })
    }

    fn lifted(&self, index: u32) -> Vec3 {
        let i = index as usize;
        self.mesh.vertices[i] + Vec3::new(0.0, self.heights[i], 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrace_heightfield::HeightfieldParams;

    fn normal_y([a, b, c]: [u32; 3], mesh: &BaseMesh) -> f32 {
        let (a, b, c) = (
            mesh.vertices[a as usize],
            mesh.vertices[b as usize],
            mesh.vertices[c as usize],
        );
        (b - a).cross(c - a).y
    }

    #[test]
    fn test_three_by_three_has_eight_triangles() {
        let mesh = square_grid(3, 3);
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), (3 - 1) * (3 - 1) * 2);
        assert!(mesh.indices.iter().all(|&i| i < 9));

        let mut used = [false; 9];
        for &i in &mesh.indices {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u), "every vertex should be referenced");
    }

    #[test]
    fn test_no_triangle_anchored_on_first_row_or_column() {
        let width = 5;
        let mesh = square_grid(width, 4);
        // The anchor vertex is the third index of triangle A and the second
        // of triangle B.
        for quad in mesh.indices.chunks_exact(6) {
            let anchor = quad[2];
            assert_eq!(anchor, quad[4]);
            assert_ne!(anchor % width, 0, "anchor {anchor} in first column");
            assert_ne!(anchor / width, 0, "anchor {anchor} in first row");
        }
    }

    #[test]
    fn test_first_quad_indices() {
        let mesh = square_grid(3, 3);
        assert_eq!(&mesh.indices[..6], &[0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn test_vertices_and_uvs_follow_lattice() {
        let mesh = square_grid(4, 2);
        assert_eq!(mesh.vertices[6], Vec3::new(2.0, 0.0, 1.0));
        assert_eq!(mesh.uvs[6], Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_triangles_face_up() {
        let mesh = square_grid(6, 5);
        for tri in mesh.triangles() {
            assert!(normal_y(tri, &mesh) > 0.0, "{tri:?} winds downward");
        }
    }

    #[test]
    fn test_degenerate_sizes_emit_no_triangles() {
        assert_eq!(square_grid(0, 0).vertex_count(), 0);
        assert_eq!(square_grid(1, 5).triangle_count(), 0);
        assert_eq!(square_grid(5, 1).triangle_count(), 0);
        assert_eq!(square_grid(5, 1).vertex_count(), 5);
    }

    #[test]
    fn test_generate_samples_every_vertex() {
        let sampler = HeightfieldSampler::new(HeightfieldParams::default()).unwrap();
        let origin = Vec2::new(31.0, 7.0);
        let map = SquareMap::generate(8, 8, origin, &sampler);
        assert_eq!(map.heights().len(), 64);
        assert_eq!(
            map.height_at(3, 5).unwrap().to_bits(),
            sampler.sample(Vec2::new(3.0, 5.0) + origin).to_bits()
        );
        assert_eq!(map.height_at(8, 0), None);
    }

    #[test]
    fn test_source_triangles_carry_heights() {
        let heights: Vec<f32> = (0..9).map(|i| i as f32 * 0.5).collect();
        let map = SquareMap::from_heights(3, 3, Vec2::ZERO, heights).unwrap();
        let first = map.source_triangles().next().unwrap();
        // Triangle A of the first quad: vertices 0, 3, 4.
        assert_eq!(first.a, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(first.b, Vec3::new(0.0, 1.5, 1.0));
        assert_eq!(first.c, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(map.source_triangles().count(), 8);
    }

    #[test]
    fn test_from_heights_rejects_wrong_length() {
        let err = SquareMap::from_heights(3, 3, Vec2::ZERO, vec![0.0; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::HeightCountMismatch {
                expected: 9,
                actual: 8
            }
        );
    }
}
