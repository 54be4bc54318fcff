//! Weighted cosine similarity between profile and career vectors

use crate::config::{CategoryWeights, ScoringConfig};
use crate::error::{CareerMatcherError, Result};
use crate::processing::career_vector::{CareerVector, CAREER_SECTION_LENGTHS, CAREER_VECTOR_LEN};
use crate::processing::profile_vector::ProfileVector;
use crate::processing::vocabulary::{DEMAND_LEVELS_LEN, GROWTH_LEVELS_LEN};

/// Project a profile onto the career layout.
///
/// Demand and growth have no profile-side counterpart and are padded with
/// zeros, so those categories never add to the dot product even though they
/// still carry weight in the career norm.
pub fn align_profile(profile: &ProfileVector) -> Vec<f64> {
    let mut aligned = Vec::with_capacity(CAREER_VECTOR_LEN);
    aligned.extend_from_slice(&profile.academic_subjects);
    aligned.extend_from_slice(&profile.technical_skills);
    aligned.extend_from_slice(&profile.soft_skills);
    aligned.extend_from_slice(&profile.personality_dimensions);
    aligned.extend_from_slice(&profile.interests);
    aligned.extend_from_slice(&profile.salary_expectation);
    aligned.extend_from_slice(&[0.0; DEMAND_LEVELS_LEN]);
    aligned.extend_from_slice(&profile.location_preferences);
    aligned.extend_from_slice(&[0.0; GROWTH_LEVELS_LEN]);
    aligned
}

/// One weight per career vector position.
pub fn expand_weights(weights: &CategoryWeights) -> Vec<f64> {
    let mut expanded = Vec::with_capacity(CAREER_VECTOR_LEN);
    for (weight, len) in weights.as_array().iter().zip(CAREER_SECTION_LENGTHS.iter()) {
        expanded.extend(std::iter::repeat(*weight).take(*len));
    }
    expanded
}

/// `dot(w*a, w*b) / (|w*a| * |w*b|)`, clamped to [0, 1]. A zero norm on
/// either side gives exactly 0.0.
pub fn weighted_cosine(a: &[f64], b: &[f64], weights: &[f64]) -> Result<f64> {
    if a.len() != b.len() || a.len() != weights.len() {
        return Err(CareerMatcherError::Processing(format!(
            "Vector length mismatch: {} vs {} with {} weights",
            a.len(),
            b.len(),
            weights.len()
        )));
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for ((x, y), w) in a.iter().zip(b.iter()).zip(weights.iter()) {
        let wx = w * x;
        let wy = w * y;
        dot += wx * wy;
        norm_a += wx * wx;
        norm_b += wy * wy;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_finite() {
        Ok(similarity.clamp(0.0, 1.0))
    } else {
        Ok(0.0)
    }
}

/// A profile aligned to the career layout together with the weights chosen
/// for it. Built once per ranking call.
#[derive(Debug, Clone)]
pub struct PreparedProfile {
    pub aligned: Vec<f64>,
    pub weights: CategoryWeights,
    expanded_weights: Vec<f64>,
}

impl PreparedProfile {
    pub fn similarity(&self, career: &CareerVector) -> Result<f64> {
        weighted_cosine(&self.aligned, &career.flatten(), &self.expanded_weights)
    }
}

#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    weights: CategoryWeights,
    dynamic_weighting: bool,
    skill_boost: f64,
    personality_boost: f64,
    education_boost: f64,
}

impl SimilarityEngine {
    pub fn new(scoring: &ScoringConfig) -> Result<Self> {
        scoring.weights.validate()?;

        Ok(Self {
            weights: scoring.weights.normalized(),
            dynamic_weighting: scoring.dynamic_weighting,
            skill_boost: scoring.skill_boost,
            personality_boost: scoring.personality_boost,
            education_boost: scoring.education_boost,
        })
    }

    pub fn base_weights(&self) -> CategoryWeights {
        self.weights
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic_weighting
    }

    /// Weights for a given profile. With dynamic weighting, categories the
    /// student actually filled in are multiplied by their boost and the result
    /// is renormalized to sum 1. A boost raises a category relative to the
    /// categories left alone; when several are boosted at once, the smallest
    /// boost can still end up with a lower absolute share than before.
    pub fn effective_weights(&self, profile: &ProfileVector) -> CategoryWeights {
        if !self.dynamic_weighting {
            return self.weights;
        }

        let mut weights = self.weights;
        let mut boosted = false;
        if profile.has_technical_skills() {
            weights.skills *= self.skill_boost;
            boosted = true;
        }
        if profile.has_personality() {
            weights.personality *= self.personality_boost;
            boosted = true;
        }
        if profile.has_academics() {
            weights.education *= self.education_boost;
            boosted = true;
        }

        if boosted {
            weights.normalized()
        } else {
            weights
        }
    }

    pub fn prepare(&self, profile: &ProfileVector) -> PreparedProfile {
        let weights = self.effective_weights(profile);
        PreparedProfile {
            aligned: align_profile(profile),
            expanded_weights: expand_weights(&weights),
            weights,
        }
    }

    pub fn similarity(&self, profile: &ProfileVector, career: &CareerVector) -> Result<f64> {
        self.prepare(profile).similarity(career)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::vocabulary::{INTERESTS, TECHNICAL_SKILLS};

    fn engine(dynamic: bool) -> SimilarityEngine {
        let scoring = ScoringConfig {
            dynamic_weighting: dynamic,
            ..ScoringConfig::default()
        };
        SimilarityEngine::new(&scoring).unwrap()
    }

    fn sample_profile() -> ProfileVector {
        let mut profile = ProfileVector::zeroed();
        profile.academic_subjects[0] = 4.5;
        profile.technical_skills[1] = 4.0;
        profile.soft_skills[0] = 3.0;
        profile.personality_dimensions = [3.67, 4.0, 2.5, 3.17, 3.33, 4.33];
        profile.interests[INTERESTS.position("Technology").unwrap()] = 1.0;
        profile.location_preferences[4] = 1.0;
        profile
    }

    fn sample_career() -> CareerVector {
        let mut career = CareerVector::zeroed();
        career.education_requirements[0] = 1.0;
        career.essential_skills[1] = 1.0;
        career.essential_skills[TECHNICAL_SKILLS.len()] = 1.0;
        career.personality_fit[1] = 1.0;
        career.personality_fit[5] = 1.0;
        career.industry_trends[0] = 1.0;
        career.salary_band[2] = 1.0;
        career.market_demand[3] = 1.0;
        career.location_availability[4] = 1.0;
        career.growth_prospect[2] = 1.0;
        career
    }

    #[test]
    fn test_aligned_length_matches_career() {
        assert_eq!(align_profile(&sample_profile()).len(), CAREER_VECTOR_LEN);
        assert_eq!(expand_weights(&CategoryWeights::default()).len(), CAREER_VECTOR_LEN);
    }

    #[test]
    fn test_demand_and_growth_are_zero_padded() {
        let mut profile = sample_profile();
        profile.salary_expectation = [1.0; 4];
        let aligned = align_profile(&profile);

        let demand_start = 15 + 35 + 6 + 20 + 4;
        assert!(aligned[demand_start..demand_start + 4].iter().all(|v| *v == 0.0));
        assert!(aligned[CAREER_VECTOR_LEN - 4..].iter().all(|v| *v == 0.0));
        assert!(aligned[demand_start - 4..demand_start].iter().all(|v| *v == 1.0));
    }

    #[test]
    fn test_similarity_in_unit_range() {
        let value = engine(false).similarity(&sample_profile(), &sample_career()).unwrap();
        assert!(value > 0.0 && value <= 1.0);
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vec![1.0, 2.0, 3.0];
        let w = vec![0.5, 0.5, 1.0];
        assert!((weighted_cosine(&v, &v, &w).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_norm_gives_zero() {
        let empty = ProfileVector::zeroed();
        assert_eq!(engine(false).similarity(&empty, &sample_career()).unwrap(), 0.0);
        assert_eq!(weighted_cosine(&[1.0, 1.0], &[1.0, 1.0], &[0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        assert!(weighted_cosine(&[1.0, 2.0], &[1.0], &[1.0, 1.0]).is_err());
        assert!(weighted_cosine(&[1.0], &[1.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_scale_invariance() {
        let a = align_profile(&sample_profile());
        let b = sample_career().flatten();
        let w = expand_weights(&CategoryWeights::default());
        let base = weighted_cosine(&a, &b, &w).unwrap();

        for k in [0.1, 2.0, 37.5] {
            let scaled: Vec<f64> = a.iter().map(|x| x * k).collect();
            let value = weighted_cosine(&scaled, &b, &w).unwrap();
            assert!((value - base).abs() < 1e-12, "k = {}", k);
        }
    }

    #[test]
    fn test_static_weights_ignore_profile() {
        let engine = engine(false);
        assert_eq!(engine.effective_weights(&sample_profile()), CategoryWeights::default().normalized());
    }

    #[test]
    fn test_dynamic_weights_boost_filled_categories() {
        let engine = engine(true);
        let weights = engine.effective_weights(&sample_profile());
        let base = CategoryWeights::default().normalized();

        assert!((weights.sum() - 1.0).abs() < 1e-12);
        let ratio = |w: f64, b: f64| (w / weights.industry) / (b / base.industry);
        assert!((ratio(weights.skills, base.skills) - 1.5).abs() < 1e-9);
        assert!((ratio(weights.personality, base.personality) - 1.3).abs() < 1e-9);
        assert!((ratio(weights.education, base.education) - 1.2).abs() < 1e-9);
        assert!((ratio(weights.location, base.location) - 1.0).abs() < 1e-9);
        assert!(weights.skills > base.skills);
        assert!(weights.personality > base.personality);
        assert!(weights.industry < base.industry);
    }

    #[test]
    fn test_single_boost_raises_absolute_share() {
        let mut profile = ProfileVector::zeroed();
        profile.academic_subjects[0] = 4.0;
        let weights = engine(true).effective_weights(&profile);
        let base = CategoryWeights::default().normalized();

        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert!(weights.education > base.education);
        assert!((weights.skills / weights.industry - base.skills / base.industry).abs() < 1e-9);
    }

    #[test]
    fn test_dynamic_weights_unchanged_for_empty_profile() {
        let engine = engine(true);
        let weights = engine.effective_weights(&ProfileVector::zeroed());
        assert_eq!(weights, CategoryWeights::default().normalized());
    }
}
