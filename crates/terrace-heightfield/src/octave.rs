//! Multi-octave accumulation of 2D coherent noise.
//!
//! Each octave doubles the frequency and scales the amplitude by
//! `persistence`. Contributions are remapped from `[-1, 1]` to `[0, 1]` and
//! normalized by the summed amplitudes, so the result is a unit height that
//! callers scale to world units. [`SamplingMode::Single`] skips all of that
//! and hands back the signed noise value.

use glam::Vec2;
use noise::NoiseFn;

/// How octave contributions are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SamplingMode {
    /// Plain fractal sum. Used by hex maps.
    #[default]
    Smooth,
    /// Each octave's contribution is rounded to the nearest integer before
    /// it is accumulated, giving blocky, stair-like relief. Used by square maps.
    Stepped,
    /// A single raw noise layer in `[-1, 1]`, without remap or
    /// normalization. `octaves`, `amplitude` and `persistence` are ignored.
    Single,
}

/// Sample multi-octave noise at `position`, returning a value in `[0, 1]`
/// (`[-1, 1]` for [`SamplingMode::Single`]).
///
/// `amplitude` only weights the octaves against each other here; the result
/// is normalized by the amplitude sum. A zero amplitude sum yields `0.0`.
///
/// The result is a pure function of the arguments and the noise source's
/// seed: identical inputs always produce bit-identical output.
pub fn octave_perlin<N>(
    noise: &N,
    position: Vec2,
    frequency: f32,
    amplitude: f32,
    octaves: u32,
    persistence: f32,
    mode: SamplingMode,
) -> f32
where
    N: NoiseFn<f64, 2> + ?Sized,
{
    let x = position.x as f64;
    let y = position.y as f64;

    if mode == SamplingMode::Single {
        let f = frequency as f64;
        return noise.get([x * f, y * f]).clamp(-1.0, 1.0) as f32;
    }

    let mut total = 0.0_f64;
    let mut norm = 0.0_f64;
    let mut frequency = frequency as f64;
    let mut amplitude = amplitude as f64;

    for _ in 0..octaves {
        let mut n = unit(noise.get([x * frequency, y * frequency])) * amplitude;
        if mode == SamplingMode::Stepped {
            n = n.round();
        }
        total += n;
        norm += amplitude;

        amplitude *= persistence as f64;
        frequency *= 2.0;
    }

    if norm <= 0.0 {
        return 0.0;
    }

    // Rounding (stepped) or a noise source that overshoots [-1, 1] can push
    // the ratio out of range.
    (total / norm).clamp(0.0, 1.0) as f32
}

/// Remap `[-1, 1]` noise into `[0, 1]`.
#[inline]
fn unit(n: f64) -> f64 {
    (n + 1.0) * 0.5
}
