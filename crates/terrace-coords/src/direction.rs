//! The six hex neighbor directions.

use crate::cube::CubeCoord;

/// A direction from a hex cell to one of its six neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
}

impl HexDirection {
    /// All directions, clockwise starting from [`HexDirection::Top`].
    pub const ALL: [HexDirection; 6] = [
        HexDirection::Top,
        HexDirection::TopRight,
        HexDirection::BottomRight,
        HexDirection::Bottom,
        HexDirection::BottomLeft,
        HexDirection::TopLeft,
    ];

    /// Cube-space step for this direction.
    pub const fn delta(self) -> CubeCoord {
        match self {
            HexDirection::Top => CubeCoord { x: 0, y: 1, z: -1 },
            HexDirection::TopRight => CubeCoord { x: 1, y: 0, z: -1 },
            HexDirection::BottomRight => CubeCoord { x: 1, y: -1, z: 0 },
            HexDirection::Bottom => CubeCoord { x: 0, y: -1, z: 1 },
            HexDirection::BottomLeft => CubeCoord { x: -1, y: 0, z: 1 },
            HexDirection::TopLeft => CubeCoord { x: -1, y: 1, z: 0 },
        }
    }

    pub const fn opposite(self) -> HexDirection {
        match self {
            HexDirection::Top => HexDirection::Bottom,
            HexDirection::TopRight => HexDirection::BottomLeft,
            HexDirection::BottomRight => HexDirection::TopLeft,
            HexDirection::Bottom => HexDirection::Top,
            HexDirection::BottomLeft => HexDirection::TopRight,
            HexDirection::TopLeft => HexDirection::BottomRight,
        }
    }
}
