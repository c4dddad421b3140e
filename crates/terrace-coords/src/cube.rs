//! Offset and cube coordinates for odd-q hex grids.

use std::ops::{Add, Neg, Sub};

use crate::direction::HexDirection;

/// A cell address in the grid's native staggered layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetCoord {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Re-encode as a cube coordinate.
    pub fn to_cube(self) -> CubeCoord {
        offset_to_cube(self)
    }

    /// Whether this cell sits in a staggered (odd) column.
    #[inline]
    pub fn is_odd_column(self) -> bool {
        self.col & 1 != 0
    }
}

/// A cube coordinate. Always satisfies `x + y + z == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub const ZERO: CubeCoord = CubeCoord { x: 0, y: 0, z: 0 };

    /// Build a cube coordinate from two axes, deriving the third.
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Re-encode as an offset coordinate.
    pub fn to_offset(self) -> OffsetCoord {
        cube_to_offset(self)
    }

    /// The adjacent cell in `direction`.
    pub fn neighbor(self, direction: HexDirection) -> CubeCoord {
        self + direction.delta()
    }

    /// All six adjacent cells, in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [CubeCoord; 6] {
        HexDirection::ALL.map(|d| self.neighbor(d))
    }

    /// Number of cell steps between two cells.
    pub fn distance(self, other: CubeCoord) -> u32 {
        let d = self - other;
        (d.x.unsigned_abs() + d.y.unsigned_abs() + d.z.unsigned_abs()) / 2
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;

    fn add(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for CubeCoord {
    type Output = CubeCoord;

    fn neg(self) -> CubeCoord {
        CubeCoord {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// Convert an offset coordinate to cube space.
///
/// The row axis is flipped so that increasing rows move "down" in cube
/// space; odd columns are shifted by the stagger.
pub fn offset_to_cube(offset: OffsetCoord) -> CubeCoord {
    let flipped_row = -offset.row;
    let x = offset.col;
    // `col + (col & 1)` is always even, so the division is exact.
    let z = flipped_row - (offset.col + (offset.col & 1)) / 2;
    CubeCoord::from_xz(x, z)
}

/// Exact inverse of [`offset_to_cube`].
pub fn cube_to_offset(cube: CubeCoord) -> OffsetCoord {
    let col = cube.x;
    let row = -(cube.z + (cube.x + (cube.x & 1)) / 2);
    OffsetCoord { col, row }
}
