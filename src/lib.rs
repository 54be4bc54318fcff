//! Career matcher library
//! RIASEC personality assessment and profile-to-career matching

pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use assessment::{DimensionScore, PersonalityProfile, RiasecDimension};
pub use config::Config;
pub use error::{CareerMatcherError, Result};
pub use processing::{CareerCatalog, CareerMatch, CareerMatcher, StudentProfile};
