//! Hex-cell fans and the hex map record.

use std::ops::Index;

use glam::{Vec2, Vec3};
use terrace_coords::{GridCell, HEX_CORNER_COUNT, HexDirection, OffsetCoord, hex_corner};
use terrace_heightfield::HeightfieldSampler;

use crate::base_mesh::BaseMesh;
use crate::error::GridError;
use crate::triangle::SourceTriangle;

/// Points per hex cell: the center followed by the six corners.
pub const HEX_CELL_POINTS: usize = 1 + HEX_CORNER_COUNT;

/// Local point indices of fan triangle `j` of a hex cell.
///
/// With `a = (1 + j) % 7` and `b = max((2 + j) % 7, 1)` the triangle is
/// `(b, a, 0)`, which wraps the last triangle back onto corner 0 (point 1)
/// and winds every triangle counter-clockwise seen from +Y.
///
/// # Panics
///
/// Panics if `j >= 6`.
pub const fn hex_fan_triangle(j: usize) -> [u32; 3] {
    assert!(j < HEX_CORNER_COUNT, "hex fan triangle index out of range");
    let a = (1 + j) % HEX_CELL_POINTS;
    let b = (2 + j) % HEX_CELL_POINTS;
    let b = if b < 1 { 1 } else { b };
    [b as u32, a as u32, 0]
}

/// All six fan triangles of a hex cell.
pub const HEX_FAN: [[u32; 3]; HEX_CORNER_COUNT] = [
    hex_fan_triangle(0),
    hex_fan_triangle(1),
    hex_fan_triangle(2),
    hex_fan_triangle(3),
    hex_fan_triangle(4),
    hex_fan_triangle(5),
];

/// The seven height-carrying points of one hex cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCellHeights {
    cell: GridCell,
    points: [Vec3; HEX_CELL_POINTS],
}

impl HexCellHeights {
    /// Place the cell's center and corners and sample a height for each at
    /// `point.xz + origin`.
    pub fn sample(cell: GridCell, origin: Vec2, sampler: &HeightfieldSampler) -> Self {
        let center = cell.world_position();
        let mut points = [center; HEX_CELL_POINTS];
        for (i, point) in points.iter_mut().skip(1).enumerate() {
            *point = hex_corner(center, cell.size, i);
        }
        for point in &mut points {
            point.y = sampler.sample(Vec2::new(point.x, point.z) + origin);
        }
        Self { cell, points }
    }

    pub const fn from_points(cell: GridCell, points: [Vec3; HEX_CELL_POINTS]) -> Self {
        Self { cell, points }
    }

    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn center(&self) -> Vec3 {
        self.points[0]
    }

    /// Corner `i`, `i` in `0..6`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 6`.
    pub fn corner(&self, i: usize) -> Vec3 {
        assert!(
            i < HEX_CORNER_COUNT,
            "hex corner index {i} out of range 0..{HEX_CORNER_COUNT}"
        );
        self.points[1 + i]
    }

    pub fn points(&self) -> &[Vec3; HEX_CELL_POINTS] {
        &self.points
    }

    /// The six fan triangles with heights in `y`.
    pub fn triangles(&self) -> [SourceTriangle; HEX_CORNER_COUNT] {
        HEX_FAN.map(|[a, b, c]| {
            SourceTriangle::new(
                self.points[a as usize],
                self.points[b as usize],
                self.points[c as usize],
            )
        })
    }
}

impl Index<usize> for HexCellHeights {
    type Output = Vec3;

    fn index(&self, i: usize) -> &Vec3 {
        assert!(
            i < HEX_CELL_POINTS,
            "hex point index {i} out of range 0..{HEX_CELL_POINTS}"
        );
        &self.points[i]
    }
}

/// A `width × rows` block of hex cells with sampled heights.
///
/// Cells are stored row-major: cell `(col, row)` lives at
/// `row * width + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct HexMap {
    width: u32,
    rows: u32,
    cell_size: f32,
    origin: Vec2,
    cells: Vec<HexCellHeights>,
}

impl HexMap {
    /// Place and sample every cell.
    pub fn generate(
        width: u32,
        rows: u32,
        cell_size: f32,
        origin: Vec2,
        sampler: &HeightfieldSampler,
    ) -> Self {
        let _span =
            tracing::debug_span!("hex_map_generate", width, rows, cell_size, ?origin).entered();

        let mut cells = Vec::with_capacity(width as usize * rows as usize);
        for row in 0..rows {
            for col in 0..width {
                let cell = GridCell::new(OffsetCoord::new(col as i32, row as i32), cell_size);
                cells.push(HexCellHeights::sample(cell, origin, sampler));
            }
        }

        Self {
            width,
            rows,
            cell_size,
            origin,
            cells,
        }
    }

    /// A map sized from a single map dimension: `map_size` columns and
    /// `map_size - 1` rows.
    pub fn square_ish(
        map_size: u32,
        cell_size: f32,
        origin: Vec2,
        sampler: &HeightfieldSampler,
    ) -> Self {
        Self::generate(
            map_size,
            map_size.saturating_sub(1),
            cell_size,
            origin,
            sampler,
        )
    }

    /// Assemble a map from precomputed cells in row-major order.
    pub fn from_cells(
        width: u32,
        rows: u32,
        cell_size: f32,
        origin: Vec2,
        cells: Vec<HexCellHeights>,
    ) -> Result<Self, GridError> {
        let expected = width as usize * rows as usize;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            rows,
            cell_size,
            origin,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn cells(&self) -> &[HexCellHeights] {
        &self.cells
    }

    pub fn cell_at(&self, offset: OffsetCoord) -> Option<&HexCellHeights> {
        let col = u32::try_from(offset.col).ok()?;
        let row = u32::try_from(offset.row).ok()?;
        if col >= self.width || row >= self.rows {
            return None;
        }
        self.cells.get((row * self.width + col) as usize)
    }

    /// The cell adjacent to `offset` in `direction`, if it is on the map.
    pub fn neighbor(&self, offset: OffsetCoord, direction: HexDirection) -> Option<&HexCellHeights> {
        self.cell_at(offset.to_cube().neighbor(direction).to_offset())
    }

    pub fn source_triangles(&self) -> impl Iterator<Item = SourceTriangle> + '_ {
        self.cells.iter().flat_map(|cell| cell.triangles())
    }

    /// The flat reference mesh: seven ground-plane points per cell, zero UVs
    /// and the fan indices offset by the cell's first vertex.
    pub fn base_mesh(&self) -> BaseMesh {
        let points = self.cells.len() * HEX_CELL_POINTS;
        let mut mesh = BaseMesh {
            vertices: Vec::with_capacity(points),
            uvs: vec![Vec2::ZERO; points],
            indices: Vec::with_capacity(self.cells.len() * HEX_CORNER_COUNT * 3),
        };

        for cell in &self.cells {
            let base = mesh.vertices.len() as u32;
            mesh.vertices
                .extend(cell.points().iter().map(|p| Vec3::new(p.x, 0.0, p.z)));
            for tri in HEX_FAN {
                mesh.indices.extend(tri.map(|i| base + i));
            }
        }

        mesh
    }
}
