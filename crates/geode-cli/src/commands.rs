//! The `mesh` and `query` subcommands.

use std::path::Path;

use geode_config::Config;
use geode_export::{ObjOptions, export_obj};
use geode_planet::{GenerationRequest, generate};
use geode_sphere::GeoCoord;
use geode_terrain::{HeightField, MAX_EVALUATION_DEPTH, RoughnessParams, SurfaceSample};
use tracing::info;

use crate::error::AppError;

pub fn roughness_from_config(config: &Config) -> RoughnessParams {
    let r = &config.roughness;
    RoughnessParams {
        sea_level: r.sea_level,
        dd1: r.dd1,
        powa: r.powa,
        dd2: r.dd2,
        pow: r.pow,
    }
}

pub fn request_from_config(config: &Config) -> GenerationRequest {
    GenerationRequest {
        seed: config.planet.seed,
        refinement_levels: config.planet.refinement_levels,
        triangulate: config.output.triangulate,
        sphere_radius: config.planet.sphere_radius,
        elevation_scale: config.planet.elevation_scale,
        roughness: roughness_from_config(config),
        depth_margin: config.evaluator.depth_margin,
        threads: config.performance.threads,
    }
}

/// Generate the planet and write it to `output`.
pub fn run_mesh(config: &Config, output: &Path) -> Result<(), AppError> {
    let request = request_from_config(config);
    let mesh = generate(&request)?;

    let options = ObjOptions {
        radius: request.sphere_radius,
        elevation_scale: request.elevation_scale,
        triangulate: request.triangulate,
        comment: Some(format!(
            "geode planet\nseed {}, {} refinement levels",
            request.seed, request.refinement_levels
        )),
    };
    export_obj(&mesh, &options, output)?;
    Ok(())
}

/// Sample height and climate at `lat`, `lon` (degrees).
pub fn run_query(
    config: &Config,
    lat: f64,
    lon: f64,
    depth: Option<u32>,
) -> Result<SurfaceSample, AppError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::InvalidLatitude(lat));
    }
    if !lon.is_finite() {
        return Err(AppError::InvalidLongitude(lon));
    }
    let roughness = roughness_from_config(config);
    roughness.validate()?;

    let depth = depth.unwrap_or(config.evaluator.query_depth);
    if depth > MAX_EVALUATION_DEPTH {
        return Err(AppError::QueryDepthTooLarge {
            depth,
            max: MAX_EVALUATION_DEPTH,
        });
    }
    let field = HeightField::new(config.planet.seed, roughness);
    let sample = SurfaceSample::query(&field, GeoCoord::from_degrees(lat, lon), depth);
    info!("Queried ({lat}, {lon}) at depth {depth}");
    Ok(sample)
}

/// Human-readable report of a query.
pub fn format_sample(sample: &SurfaceSample) -> String {
    format!(
        "height:      {:.6}\ntemperature: {:.6}\nrainfall:    {:.6}\nbiome:       {} ({})",
        sample.height,
        sample.temperature,
        sample.rainfall,
        sample.biome,
        sample.biome.code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_planet::GenerationError;
    use geode_terrain::Biome;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.planet.refinement_levels = 1;
        config.performance.threads = 1;
        config
    }

    #[test]
    fn test_request_mirrors_config() {
        let mut config = Config::default();
        config.planet.seed = 2.0;
        config.roughness.dd2 = 0.05;
        config.evaluator.depth_margin = 10;
        let request = request_from_config(&config);
        assert_eq!(request.seed, 2.0);
        assert_eq!(request.roughness.dd2, 0.05);
        assert_eq!(request.evaluation_depth(), 15);
    }

    #[test]
    fn test_default_config_matches_default_request() {
        assert_eq!(
            request_from_config(&Config::default()),
            GenerationRequest::default()
        );
    }

    #[test]
    fn test_mesh_command_writes_obj() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planet.obj");
        run_mesh(&small_config(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# geode planet\n# seed 0.123, 1 refinement levels"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 42);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 40);
    }

    #[test]
    fn test_mesh_command_rejects_zero_levels() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.planet.refinement_levels = 0;
        let err = run_mesh(&config, &dir.path().join("planet.obj")).unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
        assert!(!dir.path().join("planet.obj").exists(), "nothing is written");
    }

    #[test]
    fn test_query_reference_point() {
        let sample = run_query(&Config::default(), 67.89, -12.345, None).unwrap();
        assert!((sample.height - -0.083_951_946_716_614_14).abs() < 1e-9);
        assert_eq!(sample.biome, Biome::Taiga);
        assert!(format_sample(&sample).contains("taiga (B)"));
    }

    #[test]
    fn test_query_rejects_oversized_depth() {
        let err = run_query(&Config::default(), 10.0, 20.0, Some(u32::MAX)).unwrap_err();
        assert!(matches!(
            err,
            AppError::QueryDepthTooLarge {
                depth: u32::MAX,
                ..
            }
        ));

        let mut config = Config::default();
        config.evaluator.query_depth = MAX_EVALUATION_DEPTH + 1;
        let err = run_query(&config, 10.0, 20.0, None).unwrap_err();
        assert!(
            matches!(err, AppError::QueryDepthTooLarge { .. }),
            "configured depth is checked too"
        );
        assert!(run_query(&config, 10.0, 20.0, Some(MAX_EVALUATION_DEPTH)).is_ok());
    }

    #[test]
    fn test_mesh_command_rejects_oversized_depth_margin() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.evaluator.depth_margin = u32::MAX;
        let err = run_mesh(&config, &dir.path().join("planet.obj")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Generation(GenerationError::EvaluationDepthTooLarge { .. })
        ));
    }

    #[test]
    fn test_query_rejects_bad_latitude() {
        let err = run_query(&Config::default(), 91.0, 0.0, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidLatitude(_)));
    }
}
