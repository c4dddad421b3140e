//! Fractal noise heightfields: multi-octave coherent noise sampled on a 2D plane.

mod error;
mod octave;
mod sampler;

pub use error::HeightfieldError;
pub use octave::{SamplingMode, octave_perlin};
pub use sampler::{HeightfieldParams, HeightfieldSampler};
