//! Profile and career vectorization, similarity and ranking

pub mod vocabulary;
pub mod skills;
pub mod profile_vector;
pub mod career_vector;
pub mod catalog;
pub mod similarity;
pub mod ranking;
pub mod visualization;
pub mod engine;

pub use catalog::{CareerCatalog, CareerRecord};
pub use engine::CareerMatcher;
pub use profile_vector::{ProfileVector, StudentProfile};
pub use ranking::{CareerMatch, ConfidenceTier};
