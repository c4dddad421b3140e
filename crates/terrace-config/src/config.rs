//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Default config directory: `<platform config dir>/terrace`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terrace"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map layout settings.
    pub map: MapConfig,
    /// Heightfield noise settings.
    pub noise: NoiseConfig,
    /// Terracing settings.
    pub terrace: TerraceConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Base grid layout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum GridKind {
    /// Regular vertex lattice, two triangles per quad.
    #[default]
    Square,
    /// Staggered hex cells, six triangles per cell.
    Hex,
}

/// How noise octaves are combined into a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum NoiseMode {
    /// Continuous weighted sum of all octaves.
    Smooth,
    /// Each octave rounded before summing.
    Stepped,
    /// First octave only.
    Single,
}

/// Map layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Vertices per side for square maps, columns for hex maps.
    pub map_size: u32,
    /// Base grid layout.
    pub grid: GridKind,
    /// Hex cell circumradius in world units.
    pub cell_size: f32,
    /// Chunks built along each horizontal axis.
    pub chunks_per_axis: u32,
}

/// Heightfield noise configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Frequency of the first octave.
    pub frequency: f32,
    /// Peak height in world units.
    pub amplitude: f32,
    /// Weight multiplier between successive octaves.
    pub persistence: f32,
    /// Number of octaves (at least 1).
    pub octaves: u32,
    /// Offset added to every sample position.
    pub position: (f32, f32),
    /// Noise seed.
    pub seed: u32,
    /// Octave combination. `None` picks the grid's native mode.
    pub mode: Option<NoiseMode>,
}

/// Terracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerraceConfig {
    /// World height of one terrace.
    pub step: f32,
    /// Number of UV bands. `None` uses the noise amplitude, truncated.
    pub max_height: Option<u32>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_size: 32,
            grid: GridKind::Square,
            cell_size: 1.0,
            chunks_per_axis: 1,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            amplitude: 8.0,
            persistence: 1.0,
            octaves: 4,
            position: (0.0, 0.0),
            seed: 0,
            mode: None,
        }
    }
}

impl Default for TerraceConfig {
    fn default() -> Self {
        Self {
            step: 0.5,
            max_height: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Derived settings ---

impl Config {
    /// UV band count: the explicit setting, or the amplitude truncated.
    pub fn max_height(&self) -> u32 {
        self.terrace
            .max_height
            .unwrap_or(self.noise.amplitude as u32)
    }

    /// Octave mode: the explicit setting, or stepped for square grids and
    /// smooth for hex grids.
    pub fn noise_mode(&self) -> NoiseMode {
        self.noise.mode.unwrap_or(match self.map.grid {
            GridKind::Square => NoiseMode::Stepped,
            GridKind::Hex => NoiseMode::Smooth,
        })
    }

    /// Reject values no builder can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.map.map_size < 2 {
            return Err(invalid("map.map_size", "must be at least 2"));
        }
        if !self.map.cell_size.is_finite() || self.map.cell_size <= 0.0 {
            return Err(invalid("map.cell_size", "must be finite and positive"));
        }
        if self.map.chunks_per_axis == 0 {
            return Err(invalid("map.chunks_per_axis", "must be at least 1"));
        }
        // Every hex chunk starts on an unstaggered column, so a neighbor
        // chunk only lines up when the column count per chunk is even.
        if self.map.grid == GridKind::Hex
            && self.map.chunks_per_axis > 1
            && self.map.map_size % 2 == 1
        {
            return Err(invalid(
                "map.map_size",
                "must be even when hex chunks are tiled",
            ));
        }
        if !self.noise.frequency.is_finite() || self.noise.frequency <= 0.0 {
            return Err(invalid("noise.frequency", "must be finite and positive"));
        }
        if !self.noise.amplitude.is_finite() || self.noise.amplitude < 0.0 {
            return Err(invalid("noise.amplitude", "must be finite and non-negative"));
        }
        if !self.noise.persistence.is_finite() || self.noise.persistence < 0.0 {
            return Err(invalid(
                "noise.persistence",
                "must be finite and non-negative",
            ));
        }
        if self.noise.octaves == 0 {
            return Err(invalid("noise.octaves", "must be at least 1"));
        }
        let (x, y) = self.noise.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid("noise.position", "must be finite"));
        }
        if !self.terrace.step.is_finite() || self.terrace.step <= 0.0 {
            return Err(invalid("terrace.step", "must be finite and positive"));
        }
        if self.max_height() == 0 {
            return Err(invalid(
                "terrace.max_height",
                format!(
                    "must be at least 1 (defaults to noise.amplitude = {})",
                    self.noise.amplitude
                ),
            ));
        }
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> &'static str {
        match err {
            ConfigError::Invalid { field, .. } => field,
            other => panic!("expected a validation error, got {other}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.map.map_size, 32);
        assert_eq!(config.map.grid, GridKind::Square);
        assert_eq!(config.noise.frequency, 0.1);
        assert_eq!(config.noise.amplitude, 8.0);
        assert_eq!(config.noise.octaves, 4);
        assert_eq!(config.terrace.step, 0.5);
        assert_eq!(config.debug.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("map_size: 32"));
        assert!(ron_str.contains("grid: Square"));
        assert!(ron_str.contains("octaves: 4"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.map.grid = GridKind::Hex;
        config.noise.mode = Some(NoiseMode::Single);
        config.noise.position = (12.5, -3.0);
        config.terrace.max_height = Some(5);

        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(map: (map_size: 16), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.map.map_size, 16);
        assert_eq!(config.map.cell_size, 1.0);
        assert_eq!(config.noise, NoiseConfig::default());
        assert_eq!(config.terrace, TerraceConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_max_height_defaults_to_truncated_amplitude() {
        let mut config = Config::default();
        config.noise.amplitude = 6.9;
        assert_eq!(config.max_height(), 6);
        config.terrace.max_height = Some(12);
        assert_eq!(config.max_height(), 12);
    }

    #[test]
    fn test_noise_mode_follows_grid() {
        let mut config = Config::default();
        assert_eq!(config.noise_mode(), NoiseMode::Stepped);
        config.map.grid = GridKind::Hex;
        assert_eq!(config.noise_mode(), NoiseMode::Smooth);
        config.noise.mode = Some(NoiseMode::Single);
        assert_eq!(config.noise_mode(), NoiseMode::Single);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: [(fn(&mut Config), &str); 9] = [
            (|c| c.map.map_size = 1, "map.map_size"),
            (|c| c.map.cell_size = 0.0, "map.cell_size"),
            (|c| c.map.chunks_per_axis = 0, "map.chunks_per_axis"),
            (|c| c.noise.frequency = f32::NAN, "noise.frequency"),
            (|c| c.noise.amplitude = -1.0, "noise.amplitude"),
            (|c| c.noise.octaves = 0, "noise.octaves"),
            (|c| c.noise.position = (f32::INFINITY, 0.0), "noise.position"),
            (|c| c.terrace.step = -0.5, "terrace.step"),
            (|c| c.noise.amplitude = 0.5, "terrace.max_height"),
        ];

        for (mutate, field) in cases {
            let mut config = Config::default();
            mutate(&mut config);
            let err = config.validate().unwrap_err();
            assert_eq!(field_of(err), field);
        }
    }

    #[test]
    fn test_tiled_hex_chunks_need_even_map_size() {
        let mut config = Config::default();
        config.map.grid = GridKind::Hex;
        config.map.map_size = 5;
        assert!(config.validate().is_ok(), "one odd-sized chunk is fine");

        config.map.chunks_per_axis = 2;
        let err = config.validate().unwrap_err();
        assert_eq!(field_of(err), "map.map_size");

        config.map.map_size = 6;
        assert!(config.validate().is_ok());

        config.map.grid = GridKind::Square;
        config.map.map_size = 5;
        assert!(config.validate().is_ok(), "square chunks share borders");
    }

    #[test]
    fn test_explicit_max_height_allows_low_amplitude() {
        let mut config = Config::default();
        config.noise.amplitude = 0.5;
        config.terrace.max_height = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.map.map_size = 64;
        config.map.grid = GridKind::Hex;
        config.noise.seed = 42;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("terrace");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "(map: (map_size: \"big\"))").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// Terrain settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
