//! Parallel batch build of terraced chunks.
//!
//! Each chunk is sampled and terraced on its own worker; results are
//! merged in chunk order so the output does not depend on scheduling.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use terrace_config::{Config, GridKind, NoiseMode};
use terrace_grid::{HexMap, SquareMap};
use terrace_heightfield::{HeightfieldParams, HeightfieldSampler, SamplingMode};
use terrace_mesh::{
    Bounds, MeshStats, TerraceBuffers, TerraceParams, terrace_hex_map, terrace_square_map,
};

use crate::error::DemoError;

/// Everything a worker needs to build any chunk of the batch.
#[derive(Debug)]
pub struct BuildSettings {
    pub grid: GridKind,
    pub map_size: u32,
    pub cell_size: f32,
    pub chunks_per_axis: u32,
    pub sampler: HeightfieldSampler,
    pub params: TerraceParams,
}

impl BuildSettings {
    /// Validate `config` and turn it into sampler and terracing parameters.
    pub fn from_config(config: &Config) -> Result<Self, DemoError> {
        config.validate()?;

        let (x, y) = config.noise.position;
        let sampler = HeightfieldSampler::new(HeightfieldParams {
            seed: config.noise.seed,
            frequency: config.noise.frequency,
            amplitude: config.noise.amplitude,
            octaves: config.noise.octaves,
            persistence: config.noise.persistence,
            offset: Vec2::new(x, y),
            mode: sampling_mode(config.noise_mode()),
        })?;
        let params = TerraceParams::new(config.max_height(), config.terrace.step)?;

        Ok(Self {
            grid: config.map.grid,
            map_size: config.map.map_size,
            cell_size: config.map.cell_size,
            chunks_per_axis: config.map.chunks_per_axis,
            sampler,
            params,
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks_per_axis as usize * self.chunks_per_axis as usize
    }

    /// World offset of chunk `(x, z)`.
    ///
    /// Square chunks share their border row of vertices, so they advance by
    /// `map_size - 1`. Hex chunks advance by their full column and row span;
    /// the column count must be even for the stagger to carry over, which
    /// `Config::validate` enforces for tiled hex batches.
    pub fn chunk_translation(&self, x: u32, z: u32) -> Vec3 {
        let (x, z) = (x as f32, z as f32);
        match self.grid {
            GridKind::Square => {
                let span = self.map_size.saturating_sub(1) as f32;
                Vec3::new(x * span, 0.0, z * span)
            }
            GridKind::Hex => {
                let columns = self.map_size as f32;
                let rows = self.map_size.saturating_sub(1) as f32;
                let column_spacing = 1.5 * self.cell_size;
                let row_spacing = 3.0_f32.sqrt() * self.cell_size;
                Vec3::new(x * columns * column_spacing, 0.0, z * rows * row_spacing)
            }
        }
    }
}

fn sampling_mode(mode: NoiseMode) -> SamplingMode {
    match mode {
        NoiseMode::Smooth => SamplingMode::Smooth,
        NoiseMode::Stepped => SamplingMode::Stepped,
        NoiseMode::Single => SamplingMode::Single,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ChunkTask {
    index: usize,
    x: u32,
    z: u32,
}

/// One terraced chunk in chunk-local coordinates.
#[derive(Debug)]
pub struct ChunkOutput {
    pub index: usize,
    pub translation: Vec3,
    pub buffers: TerraceBuffers,
    pub stats: MeshStats,
}

/// The merged result of a batch.
#[derive(Debug)]
pub struct BatchOutput {
    pub mesh: TerraceBuffers,
    pub stats: MeshStats,
    pub chunks: usize,
    pub bounds: Option<Bounds>,
}

/// Sample and terrace a single chunk.
fn build_chunk(settings: &BuildSettings, task: ChunkTask) -> Result<ChunkOutput, DemoError> {
    let _span = tracing::debug_span!("build_chunk", x = task.x, z = task.z).entered();

    let translation = settings.chunk_translation(task.x, task.z);
    let origin = Vec2::new(translation.x, translation.z);

    let terraced = match settings.grid {
        GridKind::Square => {
            let map = SquareMap::generate(
                settings.map_size,
                settings.map_size,
                origin,
                &settings.sampler,
            );
            terrace_square_map(&map, &settings.params)
        }
        GridKind::Hex => {
            let map =
                HexMap::square_ish(settings.map_size, settings.cell_size, origin, &settings.sampler);
            terrace_hex_map(&map, &settings.params)
        }
    };
    let (buffers, stats) = terraced.map_err(|source| DemoError::Chunk {
        x: task.x,
        z: task.z,
        source,
    })?;

    Ok(ChunkOutput {
        index: task.index,
        translation,
        buffers,
        stats,
    })
}

/// Build every chunk of the batch on `workers` threads and merge the
/// results into one mesh in world coordinates.
pub fn build_chunks(settings: Arc<BuildSettings>, workers: usize) -> Result<BatchOutput, DemoError> {
    let per_axis = settings.chunks_per_axis;
    let tasks: Vec<ChunkTask> = (0..per_axis)
        .flat_map(|z| (0..per_axis).map(move |x| (x, z)))
        .enumerate()
        .map(|(index, (x, z))| ChunkTask { index, x, z })
        .collect();
    let task_count = tasks.len();
    let worker_count = workers.clamp(1, task_count.max(1));

    let (task_tx, task_rx) = crossbeam_channel::unbounded();
    let (result_tx, result_rx) = crossbeam_channel::unbounded();
    for task in tasks {
        // The receiver is still held here, so the send cannot fail.
        let _ = task_tx.send(task);
    }
    drop(task_tx);

    tracing::debug!(task_count, worker_count, "spawning terrain workers");

    let mut handles = Vec::with_capacity(worker_count);
    for id in 0..worker_count {
        let rx: crossbeam_channel::Receiver<ChunkTask> = task_rx.clone();
        let tx = result_tx.clone();
        let settings = Arc::clone(&settings);

        let handle = std::thread::Builder::new()
            .name(format!("terrace-worker-{id}"))
            .spawn(move || {
                while let Ok(task) = rx.recv() {
                    if tx.send(build_chunk(&settings, task)).is_err() {
                        break;
                    }
                }
            })
            .map_err(DemoError::Spawn)?;
        handles.push(handle);
    }
    drop(result_tx);

    let mut outputs = Vec::with_capacity(task_count);
    let mut first_error = None;
    for result in result_rx.iter() {
        match result {
            Ok(output) => outputs.push(output),
            Err(err) => {
                tracing::warn!(error = %err, "chunk build failed");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    for handle in handles {
        handle.join().map_err(|_| DemoError::WorkerPanicked)?;
    }
    if let Some(err) = first_error {
        return Err(err);
    }
    if outputs.len() != task_count {
        return Err(DemoError::WorkerPanicked);
    }

    outputs.sort_by_key(|o: &ChunkOutput| o.index);
    merge(outputs)
}

fn merge(outputs: Vec<ChunkOutput>) -> Result<BatchOutput, DemoError> {
    let chunks = outputs.len();
    let mut mesh = TerraceBuffers::new();
    let mut stats = MeshStats::default();
    let mut bounds: Option<Bounds> = None;

    for mut chunk in outputs {
        chunk.buffers.translate(chunk.translation);
        if let Some(chunk_bounds) = chunk.buffers.bounds() {
            bounds = Some(match bounds {
                Some(b) => b.union(&chunk_bounds),
                None => chunk_bounds,
            });
        }
        stats.merge(&chunk.stats);
        mesh.append(chunk.buffers)?;
    }

    Ok(BatchOutput {
        mesh,
        stats,
        chunks,
        bounds,
    })
}
