//! Ranking, confidence tiers, skill gaps and improvement suggestions

use crate::processing::catalog::CareerRecord;
use crate::processing::profile_vector::StudentProfile;
use crate::processing::skills::{SkillCategory, SkillClassifier};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Good,
    Fair,
    Low,
}

impl ConfidenceTier {
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= 0.80 {
            ConfidenceTier::High
        } else if similarity >= 0.60 {
            ConfidenceTier::Good
        } else if similarity >= 0.40 {
            ConfidenceTier::Fair
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::High => "Excellent match",
            ConfidenceTier::Good => "Strong match",
            ConfidenceTier::Fair => "Moderate match",
            ConfidenceTier::Low => "Limited match",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Good => "Good",
            ConfidenceTier::Fair => "Fair",
            ConfidenceTier::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_id: String,
    pub title: String,
    pub similarity: f64,
    /// Similarity as a percentage truncated to one decimal
    pub percentage: f64,
    pub tier: ConfidenceTier,
    pub explanation: String,
    pub matched_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

// Absorbs representation error such as 0.29 * 100.0 == 28.999999999999996.
const PERCENT_EPSILON: f64 = 1e-9;

/// Percentages are truncated, not rounded, so a displayed value never reaches
/// the next tier's threshold.
pub fn truncate_percentage(similarity: f64) -> f64 {
    (similarity * 1000.0 + PERCENT_EPSILON).floor() / 10.0
}

pub fn explanation(similarity: f64) -> String {
    format!(
        "{} ({}%)",
        ConfidenceTier::from_similarity(similarity).label(),
        (similarity * 100.0 + PERCENT_EPSILON).floor() as i64
    )
}

/// Descending by similarity. The sort is stable, so equal scores keep catalog order.
pub fn sort_matches(matches: &mut [CareerMatch]) {
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

/// Turns raw similarities into annotated `CareerMatch` results.
pub struct MatchRanker {
    classifier: SkillClassifier,
    skill_gap_limit: usize,
}

impl MatchRanker {
    pub fn new(classifier: SkillClassifier, skill_gap_limit: usize) -> Self {
        Self {
            classifier,
            skill_gap_limit,
        }
    }

    pub fn classifier(&self) -> &SkillClassifier {
        &self.classifier
    }

    pub fn build_match(&self, record: &CareerRecord, profile: &StudentProfile, similarity: f64) -> CareerMatch {
        let similarity = if similarity.is_finite() {
            similarity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let tier = ConfidenceTier::from_similarity(similarity);
        let skill_gaps = self.skill_gaps(record, profile);
        let improvement_suggestions = self.suggestions(record, profile, &skill_gaps, tier);

        CareerMatch {
            career_id: record.id.clone(),
            title: record.title.clone(),
            similarity,
            percentage: truncate_percentage(similarity),
            tier,
            explanation: explanation(similarity),
            matched_skills: record
                .required_skills
                .iter()
                .filter(|skill| profile.has_skill(skill))
                .cloned()
                .collect(),
            skill_gaps,
            improvement_suggestions,
        }
    }

    /// First required skills of the career the student does not list.
    pub fn skill_gaps(&self, record: &CareerRecord, profile: &StudentProfile) -> Vec<String> {
        record
            .required_skills
            .iter()
            .filter(|skill| !profile.has_skill(skill))
            .take(self.skill_gap_limit)
            .cloned()
            .collect()
    }

    pub fn suggestions(
        &self,
        record: &CareerRecord,
        profile: &StudentProfile,
        skill_gaps: &[String],
        tier: ConfidenceTier,
    ) -> Vec<String> {
        let mut suggestions: Vec<String> = skill_gaps
            .iter()
            .map(|skill| skill_suggestion(skill, self.classifier.classify(skill)))
            .collect();

        if let Some(subject) = record
            .required_education
            .iter()
            .find(|subject| !profile.has_subject(subject))
        {
            suggestions.push(format!(
                "Consider taking {} to prepare for a career as a {}",
                subject, record.title
            ));
        }

        if matches!(tier, ConfidenceTier::Fair | ConfidenceTier::Low) {
            suggestions.push(format!(
                "Explore {} further through internships or conversations with people in the field",
                record.title
            ));
        }

        suggestions
    }
}

fn skill_suggestion(skill: &str, category: SkillCategory) -> String {
    match category {
        SkillCategory::Technical => format!("Build hands-on experience with {} through courses or personal projects", skill),
        SkillCategory::Analytical => format!("Strengthen your {} skills with practice problems and small data projects", skill),
        SkillCategory::Creative => format!("Develop a portfolio that shows your {} work", skill),
        SkillCategory::Soft => format!("Practice {} through clubs, group projects or volunteering", skill),
        SkillCategory::Other => format!("Learn more about {} and look for chances to practice it", skill),
    }
}
