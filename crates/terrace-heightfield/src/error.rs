//! Heightfield parameter errors.

/// Rejected heightfield parameters. Raised once, when a sampler is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeightfieldError {
    /// Base frequency must be finite and strictly positive.
    #[error("noise frequency must be finite and > 0, got {0}")]
    InvalidFrequency(f32),

    /// Amplitude must be finite and non-negative.
    #[error("noise amplitude must be finite and >= 0, got {0}")]
    InvalidAmplitude(f32),

    /// At least one octave is required.
    #[error("noise octave count must be at least 1")]
    ZeroOctaves,

    /// Persistence must be finite and non-negative.
    #[error("noise persistence must be finite and >= 0, got {0}")]
    InvalidPersistence(f32),

    /// Sampling offset must be finite.
    #[error("noise offset must be finite, got ({0}, {1})")]
    InvalidOffset(f32, f32),
}
