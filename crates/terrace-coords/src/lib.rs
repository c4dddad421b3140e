//! Hex and square grid coordinate spaces.
//!
//! Hex grids are addressed two ways:
//!
//! 1. **Offset coordinates**: `(col, row)` in the grid's native staggered
//!    layout ("odd-q": odd columns are pushed half a row down). This is how
//!    cells are stored and iterated.
//! 2. **Cube coordinates**: redundant `(x, y, z)` with `x + y + z == 0`.
//!    Neighbor and distance arithmetic is plain vector math in this space.
//!
//! The two encodings are a bijection; converting back and forth is exact.
//!
//! ```rust
//! use terrace_coords::{CubeCoord, HexDirection, OffsetCoord};
//!
//! let cell = OffsetCoord::new(3, 2);
//! let cube = cell.to_cube();
//! assert_eq!(cube.x + cube.y + cube.z, 0);
//! assert_eq!(cube.to_offset(), cell);
//!
//! let up = cube.neighbor(HexDirection::Top);
//! assert_eq!(cube.distance(up), 1);
//! ```

mod cube;
mod direction;
mod hex;

pub use cube::{CubeCoord, OffsetCoord, cube_to_offset, offset_to_cube};
pub use direction::HexDirection;
pub use hex::{GridCell, HEX_CORNER_COUNT, hex_corner, world_position};
