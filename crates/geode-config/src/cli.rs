//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Config;

/// geode command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "geode", about = "Fractal planet generator", version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Height field seed.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Number of refinement passes.
    #[arg(long, global = true)]
    pub levels: Option<u32>,

    /// Radius of the output sphere.
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Write triangles instead of quads.
    #[arg(long, global = true)]
    pub triangulate: bool,

    /// Output OBJ path.
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Refinement worker threads (0 = one per CPU).
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// What to do once configuration is resolved.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate the planet mesh and write it as OBJ (the default).
    Mesh,
    /// Print height, climate and biome at one point.
    Query {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Bisection depth (defaults to `evaluator.query_depth`).
        #[arg(long)]
        depth: Option<u32>,
    },
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(levels) = args.levels {
            self.planet.refinement_levels = levels;
        }
        if let Some(radius) = args.radius {
            self.planet.sphere_radius = radius;
        }
        if args.triangulate {
            self.output.triangulate = true;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(threads) = args.threads {
            self.performance.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
