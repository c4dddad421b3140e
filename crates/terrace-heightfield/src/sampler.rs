//! Seeded heightfield sampler.
//!
//! Wraps a simplex noise source together with validated octave parameters so
//! that map builders only deal with "position in, world height out".

use std::fmt;

use glam::Vec2;
use noise::Simplex;

use crate::error::HeightfieldError;
use crate::octave::{SamplingMode, octave_perlin};

/// Configuration for multi-octave heightfield sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightfieldParams {
    /// Seed of the underlying simplex noise.
    pub seed: u32,
    /// Frequency of the first octave. Doubles with each further octave.
    pub frequency: f32,
    /// Peak height in world units. Also the first octave's weight.
    pub amplitude: f32,
    /// Number of octaves to composite. Must be at least 1.
    pub octaves: u32,
    /// Weight multiplier between successive octaves.
    pub persistence: f32,
    /// Added to every sample position before evaluating noise.
    pub offset: Vec2,
    /// How octave contributions are combined.
    pub mode: SamplingMode,
}

impl Default for HeightfieldParams {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.1,
            amplitude: 8.0,
            octaves: 4,
            persistence: 1.0,
            offset: Vec2::ZERO,
            mode: SamplingMode::Smooth,
        }
    }
}

impl HeightfieldParams {
    /// Check that the parameters describe a sane heightfield.
    pub fn validate(&self) -> Result<(), HeightfieldError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(HeightfieldError::InvalidFrequency(self.frequency));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(HeightfieldError::InvalidAmplitude(self.amplitude));
        }
        if self.octaves == 0 {
            return Err(HeightfieldError::ZeroOctaves);
        }
        if !self.persistence.is_finite() || self.persistence < 0.0 {
            return Err(HeightfieldError::InvalidPersistence(self.persistence));
        }
        if !self.offset.is_finite() {
            return Err(HeightfieldError::InvalidOffset(self.offset.x, self.offset.y));
        }
        Ok(())
    }
}

/// Samples world-space heights from fractal simplex noise.
///
/// Parameters are validated once in [`HeightfieldSampler::new`]; sampling
/// itself never fails and is safe to call from many threads at once.
#[derive(Clone)]
pub struct HeightfieldSampler {
    noise: Simplex,
    params: HeightfieldParams,
}

impl HeightfieldSampler {
    /// Create a sampler, rejecting out-of-range parameters.
    pub fn new(params: HeightfieldParams) -> Result<Self, HeightfieldError> {
        params.validate()?;
        let noise = Simplex::new(params.seed);
        Ok(Self { noise, params })
    }

    /// Height in world units at `position`: the normalized sample scaled by
    /// the configured amplitude. Negative in [`SamplingMode::Single`] wherever
    /// the raw noise is.
    pub fn sample(&self, position: Vec2) -> f32 {
        self.sample_normalized(position) * self.params.amplitude
    }

    /// Normalized height at `position`: `[0, 1]`, or `[-1, 1]` for
    /// [`SamplingMode::Single`].
    pub fn sample_normalized(&self, position: Vec2) -> f32 {
        octave_perlin(
            &self.noise,
            position + self.params.offset,
            self.params.frequency,
            self.params.amplitude,
            self.params.octaves,
            self.params.persistence,
            self.params.mode,
        )
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &HeightfieldParams {
        &self.params
    }
}

impl fmt::Debug for HeightfieldSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeightfieldSampler")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
