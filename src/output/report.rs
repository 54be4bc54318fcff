//! Report structures combining personality and career match results

use crate::assessment::PersonalityProfile;
use crate::config::CategoryWeights;
use crate::processing::ranking::CareerMatch;
use crate::processing::visualization::VisualizationData;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything produced by one assessment or matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Present when questionnaire responses were supplied
    pub personality: Option<PersonalityProfile>,

    /// Ranked careers, best first. Empty for assessment-only runs.
    pub matches: Vec<CareerMatch>,

    pub visualization: VisualizationData,

    /// Category weights actually used for the similarity
    pub weights: CategoryWeights,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub matcher_version: String,
    pub profile_file: Option<String>,
    pub responses_file: Option<String>,
    /// "built-in" or the path of the catalog file
    pub catalog_source: String,
    pub catalog_size: usize,
    pub dynamic_weighting: bool,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(catalog_source: impl Into<String>, catalog_size: usize) -> Self {
        Self {
            generated_at: SystemTime::now(),
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            profile_file: None,
            responses_file: None,
            catalog_source: catalog_source.into(),
            catalog_size,
            dynamic_weighting: false,
            processing_time_ms: 0,
        }
    }
}

impl MatchReport {
    pub fn top_match(&self) -> Option<&CareerMatch> {
        self.matches.first()
    }

    pub fn is_assessment_only(&self) -> bool {
        self.matches.is_empty()
    }
}
