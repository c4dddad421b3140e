//! World-space placement of hex cells and their corners.

use glam::Vec3;

use crate::cube::{CubeCoord, OffsetCoord};

/// Number of corners on a hex cell.
pub const HEX_CORNER_COUNT: usize = 6;

/// A hex cell: its offset address and its circumradius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub offset: OffsetCoord,
    pub size: f32,
}

impl GridCell {
    pub const fn new(offset: OffsetCoord, size: f32) -> Self {
        Self { offset, size }
    }

    /// Center of the cell on the ground plane.
    pub fn world_position(&self) -> Vec3 {
        world_position(self.offset, self.size)
    }

    pub fn cube(&self) -> CubeCoord {
        self.offset.to_cube()
    }

    /// Corner `i` of this cell, `i` in `0..6`.
    pub fn corner(&self, i: usize) -> Vec3 {
        hex_corner(self.world_position(), self.size, i)
    }
}

/// Project an offset coordinate onto the XZ ground plane.
///
/// Columns are spaced `1.5 * size` apart, rows `sqrt(3) * size` apart, and
/// odd columns are pushed half a row along +Z.
pub fn world_position(offset: OffsetCoord, size: f32) -> Vec3 {
    let w = 2.0 * size;
    let h = 3.0_f32.sqrt() * size;
    let stagger = if offset.col % 2 != 0 { 0.5 } else { 0.0 };
    Vec3::new(offset.col as f32, 0.0, offset.row as f32 + stagger) * Vec3::new(w * 0.75, 0.0, h)
}

/// Corner `i` of a flat-topped hex centered on `center`.
///
/// Corners sit at `60° * i` on the XZ plane at radius `size`; corner `i` and
/// `i + 1` share an edge. The returned point has `y == 0`.
///
/// # Panics
///
/// Panics if `i >= 6`.
pub fn hex_corner(center: Vec3, size: f32, i: usize) -> Vec3 {
    assert!(
        i < HEX_CORNER_COUNT,
        "hex corner index {i} out of range 0..{HEX_CORNER_COUNT}"
    );
    let angle = (60.0 * i as f32).to_radians();
    Vec3::new(
        center.x + size * angle.cos(),
        0.0,
        center.z + size * angle.sin(),
    )
}
