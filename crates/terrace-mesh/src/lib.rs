//! Terracing engine: turns a heightfield-lifted base mesh into stepped
//! terrain.
//!
//! The pipeline per source triangle is:
//!
//! 1. [`classify`] the triangle against every integer level it spans.
//! 2. Emit a flat tread, or a riser plus tread, lifted to `level * step`.
//! 3. Tag every emitted triangle with its band's [`BandUv`] strip.
//!
//! Output lands in [`TerraceBuffers`]; [`Terracer`] accumulates many
//! triangles and collects [`MeshStats`] along the way.
//!
//! ```
//! use glam::Vec3;
//! use terrace_grid::SourceTriangle;
//! use terrace_mesh::{TerraceParams, terrace_triangles};
//!
//! let tri = SourceTriangle::new(
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 2.0, 1.0),
//! );
//! let params = TerraceParams::with_max_height(8).unwrap();
//! let buffers = terrace_triangles([tri], &params).unwrap();
//! assert_eq!(buffers.triangle_count(), 7);
//! ```

mod band;
mod buffers;
mod error;
mod stats;
mod terrace;

pub use band::{BandCase, BandUv, classify};
pub use buffers::{Bounds, TerraceBuffers, TerraceVertex};
pub use error::TerraceError;
pub use stats::MeshStats;
pub use terrace::{
    DEFAULT_STEP, TerraceParams, Terracer, terrace_hex_map, terrace_square_map,
    terrace_triangle, terrace_triangles,
};
