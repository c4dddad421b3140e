//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, GridKind, NoiseMode};

/// Terrace command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terrace", about = "Build stepped terrain meshes from fractal noise")]
pub struct CliArgs {
    /// Vertices per side (square) or columns (hex).
    #[arg(long)]
    pub map_size: Option<u32>,

    /// Base grid layout.
    #[arg(long, value_enum)]
    pub grid: Option<GridKind>,

    /// Hex cell radius.
    #[arg(long)]
    pub cell_size: Option<f32>,

    /// Chunks along each axis.
    #[arg(long)]
    pub chunks: Option<u32>,

    /// Noise frequency.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Noise amplitude (peak height).
    #[arg(long)]
    pub amplitude: Option<f32>,

    /// Octave weight falloff.
    #[arg(long)]
    pub persistence: Option<f32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Noise-space offset.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub noise_position: Option<Vec<f32>>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Octave combination mode.
    #[arg(long, value_enum)]
    pub noise_mode: Option<NoiseMode>,

    /// Height of one terrace.
    #[arg(long)]
    pub step: Option<f32>,

    /// Number of UV bands.
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.map_size {
            self.map.map_size = size;
        }
        if let Some(grid) = args.grid {
            self.map.grid = grid;
        }
        if let Some(cell_size) = args.cell_size {
            self.map.cell_size = cell_size;
        }
        if let Some(chunks) = args.chunks {
            self.map.chunks_per_axis = chunks;
        }
        if let Some(frequency) = args.frequency {
            self.noise.frequency = frequency;
        }
        if let Some(amplitude) = args.amplitude {
            self.noise.amplitude = amplitude;
        }
        if let Some(persistence) = args.persistence {
            self.noise.persistence = persistence;
        }
        if let Some(octaves) = args.octaves {
            self.noise.octaves = octaves;
        }
        if let Some(&[x, y]) = args.noise_position.as_deref() {
            self.noise.position = (x, y);
        }
        if let Some(seed) = args.seed {
            self.noise.seed = seed;
        }
        if let Some(mode) = args.noise_mode {
            self.noise.mode = Some(mode);
        }
        if let Some(step) = args.step {
            self.terrace.step = step;
        }
        if let Some(max_height) = args.max_height {
            self.terrace.max_height = Some(max_height);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
