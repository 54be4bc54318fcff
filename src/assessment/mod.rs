//! RIASEC personality assessment
//! Question bank, answer scoring and profile derivation

pub mod dimension;
pub mod profile;
pub mod questions;
pub mod scorer;

pub use dimension::{DimensionScore, RiasecDimension};
pub use profile::{PersonalityProfile, ProfileBuilder};
pub use scorer::{responses_from_value, Answer, DimensionScorer, Responses};
