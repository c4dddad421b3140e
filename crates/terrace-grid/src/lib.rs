//! Base ground topology: the un-terraced meshes that terracing slices.
//!
//! Two layouts are supported:
//!
//! - **Square grids**: a regular `width × height` vertex lattice, two
//!   triangles per quad ([`square_grid`], [`SquareMap`]).
//! - **Hex grids**: one seven-point fan per cell, center plus six corners,
//!   six triangles ([`HexCellHeights`], [`HexMap`]).
//!
//! Map records own their sampled heights and hand out [`SourceTriangle`]s
//! with the height folded into `y`.

mod base_mesh;
mod error;
mod hex;
mod square;
mod triangle;

pub use base_mesh::BaseMesh;
pub use error::GridError;
pub use hex::{HEX_CELL_POINTS, HEX_FAN, HexCellHeights, HexMap, hex_fan_triangle};
pub use square::{SquareMap, square_grid};
pub use triangle::SourceTriangle;
