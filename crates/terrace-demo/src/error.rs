use terrace_config::ConfigError;
use terrace_heightfield::HeightfieldError;
use terrace_mesh::TerraceError;

/// Anything that stops a terrain build.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid heightfield settings: {0}")]
    Heightfield(#[from] HeightfieldError),

    #[error("invalid terrace settings: {0}")]
    Terrace(#[from] TerraceError),

    /// Terracing one chunk failed.
    #[error("chunk ({x}, {z}) failed: {source}")]
    Chunk {
        x: u32,
        z: u32,
        #[source]
        source: TerraceError,
    },

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("a terrain worker thread panicked")]
    WorkerPanicked,

    #[error("no config directory available; pass --config")]
    NoConfigDir,
}
