//! Builds a batch of terraced terrain chunks and reports what was produced.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terrace-demo -- --grid hex --chunks 2` to build a
//! 2x2 block of hex chunks.

mod chunks;
mod error;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use terrace_config::{CliArgs, Config, default_config_dir};
use terrace_mesh::TerraceVertex;
use tracing::{error, info};

use crate::chunks::{BuildSettings, build_chunks};
use crate::error::DemoError;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let Some(config_dir) = args.config.clone().or_else(default_config_dir) else {
        eprintln!("{}", DemoError::NoConfigDir);
        return ExitCode::FAILURE;
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    terrace_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "terrain build failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let settings = Arc::new(BuildSettings::from_config(config)?);
    let workers = num_cpus::get();

    info!(
        grid = ?settings.grid,
        map_size = settings.map_size,
        chunks = settings.chunk_count(),
        max_height = settings.params.max_height(),
        step = settings.params.step(),
        workers,
        "building terrain"
    );

    let start = Instant::now();
    let batch = build_chunks(settings, workers)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        chunks = batch.chunks,
        vertices = batch.mesh.vertex_count(),
        triangles = batch.mesh.triangle_count(),
        elapsed_ms,
        "{}",
        batch.stats
    );
    if let Some(bounds) = batch.bounds {
        info!(min = ?bounds.min, max = ?bounds.max, "mesh bounds");
    }

    let stream = batch.mesh.interleaved();
    info!(
        vertex_bytes = std::mem::size_of_val(stream.as_slice()),
        vertex_stride = std::mem::size_of::<TerraceVertex>(),
        index_bytes = batch.mesh.index_bytes().len(),
        "interleaved buffers ready"
    );
    Ok(())
}
