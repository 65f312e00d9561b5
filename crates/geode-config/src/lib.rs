//! Configuration for the geode planet generator.
//!
//! Settings persist to disk as a RON file. Every section falls back to its
//! defaults when missing, and command-line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command};
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, EvaluatorConfig, OutputConfig, PerformanceConfig,
    PlanetConfig, RoughnessConfig, default_config_dir,
};
pub use error::ConfigError;
