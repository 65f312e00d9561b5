//! End-to-end generation scenarios.

use geode_planet::{GenerationError, GenerationRequest, generate};
use geode_sphere::GeoCoord;
use geode_terrain::{HeightField, RoughnessParams, planet_height};

const REFERENCE_SEED: f64 = 0.123;
const GOLDEN_HEIGHT: f64 = -0.083_951_946_716_614_14;

fn request(levels: u32, threads: usize) -> GenerationRequest {
    GenerationRequest {
        seed: REFERENCE_SEED,
        refinement_levels: levels,
        threads,
        ..Default::default()
    }
}

#[test]
fn test_golden_height_at_reference_point() {
    let coord = GeoCoord::from_degrees(67.89, -12.345);
    let height = planet_height(coord.latitude, coord.longitude, REFERENCE_SEED);
    assert!(
        (height - GOLDEN_HEIGHT).abs() < 1e-9,
        "expected {GOLDEN_HEIGHT}, got {height}"
    );
}

#[test]
fn test_one_level_yields_42_vertices_and_40_faces() {
    let mesh = generate(&request(1, 1)).unwrap();
    assert_eq!(mesh.vertex_count(), 42);
    assert_eq!(mesh.face_count(), 40);
    assert_eq!(mesh.validate(), Ok(()));
}

#[test]
fn test_face_count_is_ten_times_four_to_the_k() {
    for levels in 1..=4 {
        let mesh = generate(&request(levels, 1)).unwrap();
        assert_eq!(mesh.face_count(), 10 * 4usize.pow(levels));
    }
}

#[test]
fn test_same_mesh_for_every_thread_count() {
    let reference = generate(&request(4, 1)).unwrap();
    for threads in [2, 4, 0] {
        let mesh = generate(&request(4, threads)).unwrap();
        assert_eq!(mesh, reference, "threads = {threads}");
    }
}

#[test]
fn test_repeated_generation_is_bit_identical() {
    let a = generate(&request(3, 0)).unwrap();
    let b = generate(&request(3, 0)).unwrap();
    let bits = |m: &geode_mesh::GeodesicMesh| -> Vec<u64> {
        m.vertices.iter().map(|v| v.elevation.to_bits()).collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_heights_stay_within_loose_bound() {
    for seed in [0.123, 1.0, -7.5, 42.0, 1e3] {
        let mesh = generate(&GenerationRequest {
            seed,
            refinement_levels: 3,
            threads: 1,
            ..Default::default()
        })
        .unwrap();
        let (lo, hi) = mesh.elevation_range().unwrap();
        assert!(
            lo >= -1.5 && hi <= 1.5,
            "seed {seed}: elevations {lo}..{hi} out of bounds"
        );
    }
}

#[test]
fn test_mesh_vertex_uses_levels_plus_margin_depth() {
    let mesh = generate(&request(1, 1)).unwrap();
    let field = HeightField::new(REFERENCE_SEED, RoughnessParams::default());
    let v = mesh.vertices[20];
    let expected = field.evaluate(v.coord().to_unit_vector(), 1 + 15);
    assert_eq!(v.elevation, expected);
}

#[test]
fn test_invalid_request_is_rejected_before_generation() {
    let err = generate(&GenerationRequest {
        sphere_radius: 0.0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err, GenerationError::InvalidRadius(0.0));
}
