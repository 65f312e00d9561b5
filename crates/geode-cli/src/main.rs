//! `geode`: generate a fractal planet mesh or query a single surface point.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p geode-cli -- mesh --levels 6 -o planet.obj`.

mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use geode_config::{CliArgs, Command, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    geode_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let result = match args.command.clone().unwrap_or(Command::Mesh) {
        Command::Mesh => commands::run_mesh(&config, &config.output.path),
        Command::Query { lat, lon, depth } => {
            commands::run_query(&config, lat, lon, depth).map(|sample| {
                println!("{}", commands::format_sample(&sample));
            })
        }
    };

    match result {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("geode: {e}");
            ExitCode::FAILURE
        }
    }
}
