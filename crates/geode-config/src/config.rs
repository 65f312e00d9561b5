//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for geode, e.g. `~/.config/geode` on Linux.
///
/// Falls back to the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geode")
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub planet: PlanetConfig,
    pub roughness: RoughnessConfig,
    pub evaluator: EvaluatorConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
    pub debug: DebugConfig,
}

/// What planet to build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Seed of the fractal height field.
    pub seed: f64,
    /// Number of quad refinement passes (1 to 10).
    pub refinement_levels: u32,
    /// Radius of the zero-elevation sphere in the output mesh.
    pub sphere_radius: f64,
    /// Multiplier applied to elevations in the output mesh.
    pub elevation_scale: f64,
}

/// Midpoint displacement weights and exponents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoughnessConfig {
    /// Height of the four seed corners.
    pub sea_level: f64,
    /// Weight of the height-difference term.
    pub dd1: f64,
    /// Exponent of the height-difference term.
    pub powa: f64,
    /// Weight of the edge-length term.
    pub dd2: f64,
    /// Exponent of the edge-length term.
    pub pow: f64,
}

/// Height field evaluation depths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Bisection depth for single-point queries.
    pub query_depth: u32,
    /// Mesh vertices are evaluated at `refinement_levels + depth_margin`.
    pub depth_margin: u32,
}

/// Mesh output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the OBJ file is written.
    pub path: PathBuf,
    /// Write two triangles per quad.
    pub triangulate: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Refinement worker threads (0 = one per logical CPU, 1 = sequential).
    pub threads: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            seed: 0.123,
            refinement_levels: 5,
            sphere_radius: 20.0,
            elevation_scale: 1.0,
        }
    }
}

impl Default for RoughnessConfig {
    fn default() -> Self {
        Self {
            sea_level: -0.02,
            dd1: 0.45,
            powa: 1.0,
            dd2: 0.035,
            pow: 0.47,
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            query_depth: 25,
            depth_margin: 15,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("planet.obj"),
            triangulate: false,
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
            .separate_tuple_members(true)
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

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("refinement_levels: 5"));
        assert!(ron_str.contains("query_depth: 25"));
        assert!(ron_str.contains("\"planet.obj\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.planet.seed = -3.75;
        config.roughness.pow = 0.5;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(planet: (seed: 9.0), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.planet.seed, 9.0);
        assert_eq!(config.planet.refinement_levels, 5, "missing field keeps its default");
        assert_eq!(config.roughness, RoughnessConfig::default());
        assert_eq!(config.evaluator, EvaluatorConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok(), "unknown fields must not break old binaries");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.planet.refinement_levels = 7;
        config.output.path = PathBuf::from("out/mars.obj");
        config.performance.threads = 4;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("geode");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// geode settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_dir_ends_with_geode() {
        assert!(default_config_dir().ends_with("geode"));
    }
}
