//! Planet generation: validates a [`GenerationRequest`], builds the height
//! field for its seed and refines the geodesic base mesh against it.

mod error;
mod generate;
mod request;

pub use error::GenerationError;
pub use generate::{DepthLimitedField, generate};
pub use request::{GenerationRequest, MAX_REFINEMENT_LEVELS};
