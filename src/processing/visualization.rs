//! Chart-ready summaries of a personality profile and ranked matches

use crate::assessment::dimension::{DimensionScore, RiasecDimension};
use crate::processing::ranking::{CareerMatch, ConfidenceTier};
use crate::processing::skills::{SkillCategory, SkillClassifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    /// Dimension names in canonical R, I, A, S, E, C order
    pub radar_labels: Vec<String>,
    pub radar_values: [f64; 6],
    pub match_labels: Vec<String>,
    pub match_percentages: Vec<f64>,
    pub tier_counts: BTreeMap<String, usize>,
    /// Skill gaps across all matches, counted by category
    pub skill_gap_breakdown: BTreeMap<SkillCategory, usize>,
}

impl VisualizationData {
    pub fn build(scores: Option<&DimensionScore>, matches: &[CareerMatch], classifier: &SkillClassifier) -> Self {
        let radar_values = scores.map(|s| s.as_array()).unwrap_or([0.0; 6]);

        let mut tier_counts = BTreeMap::new();
        for tier in [ConfidenceTier::High, ConfidenceTier::Good, ConfidenceTier::Fair, ConfidenceTier::Low] {
            let count = matches.iter().filter(|m| m.tier == tier).count();
            tier_counts.insert(tier.to_string(), count);
        }

        let mut skill_gap_breakdown = BTreeMap::new();
        for gap in matches.iter().flat_map(|m| m.skill_gaps.iter()) {
            *skill_gap_breakdown.entry(classifier.classify(gap)).or_insert(0) += 1;
        }

        Self {
            radar_labels: RiasecDimension::ALL.iter().map(|d| d.name().to_string()).collect(),
            radar_values,
            match_labels: matches.iter().map(|m| m.title.clone()).collect(),
            match_percentages: matches.iter().map(|m| m.percentage).collect(),
            tier_counts,
            skill_gap_breakdown,
        }
    }
}
