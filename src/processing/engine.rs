//! Matching engine coordinating scoring, vectorization, similarity and ranking

use crate::assessment::{DimensionScore, DimensionScorer, PersonalityProfile, Responses};
use crate::config::{CategoryWeights, Config};
use crate::error::{CareerMatcherError, Result};
use crate::processing::catalog::CareerCatalog;
use crate::processing::profile_vector::{ProfileVector, ProfileVectorizer, StudentProfile};
use crate::processing::ranking::{sort_matches, CareerMatch, MatchRanker};
use crate::processing::similarity::SimilarityEngine;
use crate::processing::skills::SkillClassifier;
use crate::processing::visualization::VisualizationData;
use log::{debug, info, warn};
use std::time::Instant;

/// Main engine. Built once, then shared read-only; every method is a pure
/// function of its arguments and the catalog.
pub struct CareerMatcher {
    catalog: CareerCatalog,
    scorer: DimensionScorer,
    vectorizer: ProfileVectorizer,
    similarity: SimilarityEngine,
    ranker: MatchRanker,
    top_n: usize,
}

impl CareerMatcher {
    pub fn new(config: &Config, catalog: CareerCatalog) -> Result<Self> {
        config.validate()?;

        let ranker = MatchRanker::new(SkillClassifier::new()?, config.ranking.skill_gap_limit);
        let similarity = SimilarityEngine::new(&config.scoring)?;

        info!(
            "Career matcher ready: {} careers, dynamic weighting {}",
            catalog.len(),
            if similarity.is_dynamic() { "on" } else { "off" }
        );

        Ok(Self {
            catalog,
            scorer: DimensionScorer::new(),
            vectorizer: ProfileVectorizer::new(),
            similarity,
            ranker,
            top_n: config.ranking.top_n,
        })
    }

    pub fn with_builtin_catalog(config: &Config) -> Result<Self> {
        Self::new(config, CareerCatalog::builtin()?)
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn default_top_n(&self) -> usize {
        self.top_n
    }

    pub fn score_responses(&self, responses: &Responses) -> DimensionScore {
        self.scorer.score(responses)
    }

    pub fn analyze_personality(&self, responses: &Responses) -> PersonalityProfile {
        let scores = self.score_responses(responses);
        debug!("Dimension scores: {:?}", scores);
        PersonalityProfile::from_scores(&scores)
    }

    pub fn vectorize_profile(&self, profile: &StudentProfile) -> ProfileVector {
        self.vectorizer.vectorize(profile)
    }

    pub fn effective_weights(&self, profile: &StudentProfile) -> CategoryWeights {
        self.similarity.effective_weights(&self.vectorize_profile(profile))
    }

    /// Every career in the catalog, best match first.
    ///
    /// A career whose similarity cannot be computed is kept with a zero score
    /// instead of failing the whole ranking.
    pub fn rank(&self, profile: &StudentProfile) -> Vec<CareerMatch> {
        let start_time = Instant::now();
        let prepared = self.similarity.prepare(&self.vectorize_profile(profile));

        let mut matches: Vec<CareerMatch> = self
            .catalog
            .entries()
            .map(|(record, vector)| {
                let similarity = match prepared.similarity(vector) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Failed to score career {}: {}", record.id, e);
                        0.0
                    }
                };
                self.ranker.build_match(record, profile, similarity)
            })
            .collect();

        sort_matches(&mut matches);
        debug!(
            "Ranked {} careers in {}ms",
            matches.len(),
            start_time.elapsed().as_millis()
        );
        matches
    }

    pub fn top_matches(&self, profile: &StudentProfile, n: usize) -> Vec<CareerMatch> {
        let mut matches = self.rank(profile);
        matches.truncate(n);
        matches
    }

    pub fn match_career(&self, profile: &StudentProfile, career_id: &str) -> Result<CareerMatch> {
        let record = self
            .catalog
            .get(career_id)
            .ok_or_else(|| CareerMatcherError::CareerNotFound(career_id.to_string()))?;
        let similarity = self.similarity(profile, career_id)?;
        Ok(self.ranker.build_match(record, profile, similarity))
    }

    pub fn similarity(&self, profile: &StudentProfile, career_id: &str) -> Result<f64> {
        let vector = self
            .catalog
            .vector(career_id)
            .ok_or_else(|| CareerMatcherError::CareerNotFound(career_id.to_string()))?;
        self.similarity.similarity(&self.vectorize_profile(profile), vector)
    }

    pub fn visualization(&self, scores: Option<&DimensionScore>, matches: &[CareerMatch]) -> VisualizationData {
        VisualizationData::build(scores, matches, self.ranker.classifier())
    }
}
