//! Configuration for the terrain builder.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and are validated once after loading so the
//! builders downstream only ever see sane values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, GridKind, MapConfig, NoiseConfig, NoiseMode,
    TerraceConfig, default_config_dir,
};
pub use error::ConfigError;
