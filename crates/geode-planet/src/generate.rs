use geode_mesh::{ElevationSampler, GeodesicMesh, RefinementEngine};
use geode_terrain::HeightField;
use glam::DVec3;
use tracing::info;

use crate::{GenerationError, GenerationRequest};

/// A [`HeightField`] evaluated at a fixed depth, as seen by mesh refinement.
#[derive(Clone, Copy, Debug)]
pub struct DepthLimitedField {
    pub field: HeightField,
    pub depth: u32,
}

impl ElevationSampler for DepthLimitedField {
    fn elevation(&self, direction: DVec3) -> f64 {
        self.field.evaluate(direction, self.depth)
    }
}

/// Build the base mesh and refine it `request.refinement_levels` times.
///
/// The request is validated first; nothing is allocated for a rejected one.
pub fn generate(request: &GenerationRequest) -> Result<GeodesicMesh, GenerationError> {
    request.validate()?;

    let sampler = DepthLimitedField {
        field: HeightField::new(request.seed, request.roughness),
        depth: request.evaluation_depth(),
    };
    info!(
        "Generating planet: seed {}, {} levels, evaluation depth {}",
        request.seed, request.refinement_levels, sampler.depth
    );

    let base = GeodesicMesh::base(&sampler);
    let mesh = RefinementEngine::new(base, &sampler, request.refinement_levels)
        .with_threads(request.threads)
        .run()?;

    if let Some((lowest, highest)) = mesh.elevation_range() {
        info!(
            "Planet ready: {} vertices, {} faces, elevation {:.4}..{:.4}",
            mesh.vertex_count(),
            mesh.face_count(),
            lowest,
            highest
        );
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_sphere::GeoCoord;
    use geode_terrain::RoughnessParams;

    #[test]
    fn test_rejected_request_produces_nothing() {
        let request = GenerationRequest {
            refinement_levels: 0,
            ..Default::default()
        };
        assert_eq!(generate(&request), Err(GenerationError::ZeroRefinementLevels));
    }

    #[test]
    fn test_vertices_sample_the_field_at_request_depth() {
        let request = GenerationRequest {
            seed: 4.2,
            refinement_levels: 2,
            threads: 1,
            ..Default::default()
        };
        let mesh = generate(&request).unwrap();
        let field = HeightField::new(4.2, RoughnessParams::default());
        for v in mesh.vertices.iter().step_by(17) {
            let expected = field.evaluate(v.coord().to_unit_vector(), 17);
            assert_eq!(v.elevation, expected, "vertex at {:?}", v.coord());
        }
    }

    #[test]
    fn test_sampler_matches_field() {
        let sampler = DepthLimitedField {
            field: HeightField::new(1.0, RoughnessParams::default()),
            depth: 12,
        };
        let p = GeoCoord::new(0.3, -2.0).to_unit_vector();
        assert_eq!(sampler.elevation(p), sampler.field.evaluate(p, 12));
    }
}
