//! RIASEC dimensions and the six-value score set

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every dimension score.
pub const MAX_DIMENSION_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecDimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecDimension {
    /// Canonical order. Also the tie-break order for primary/secondary selection.
    pub const ALL: [RiasecDimension; 6] = [
        RiasecDimension::Realistic,
        RiasecDimension::Investigative,
        RiasecDimension::Artistic,
        RiasecDimension::Social,
        RiasecDimension::Enterprising,
        RiasecDimension::Conventional,
    ];

    pub fn index(self) -> usize {
        match self {
            RiasecDimension::Realistic => 0,
            RiasecDimension::Investigative => 1,
            RiasecDimension::Artistic => 2,
            RiasecDimension::Social => 3,
            RiasecDimension::Enterprising => 4,
            RiasecDimension::Conventional => 5,
        }
    }

    pub fn code(self) -> char {
        match self {
            RiasecDimension::Realistic => 'R',
            RiasecDimension::Investigative => 'I',
            RiasecDimension::Artistic => 'A',
            RiasecDimension::Social => 'S',
            RiasecDimension::Enterprising => 'E',
            RiasecDimension::Conventional => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RiasecDimension::Realistic => "Realistic",
            RiasecDimension::Investigative => "Investigative",
            RiasecDimension::Artistic => "Artistic",
            RiasecDimension::Social => "Social",
            RiasecDimension::Enterprising => "Enterprising",
            RiasecDimension::Conventional => "Conventional",
        }
    }

    /// Parse a single-letter code or a full dimension name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.chars().count() == 1 {
            let code = value.chars().next()?.to_ascii_uppercase();
            return Self::ALL.into_iter().find(|d| d.code() == code);
        }
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for RiasecDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Averaged 0-5 score per dimension for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionScore {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

impl DimensionScore {
    /// Build from values in canonical order. Values are clamped into `[0, 5]`;
    /// non-finite values become `0.0`.
    pub fn from_array(values: [f64; 6]) -> Self {
        let v = values.map(clamp_score);
        Self {
            realistic: v[0],
            investigative: v[1],
            artistic: v[2],
            social: v[3],
            enterprising: v[4],
            conventional: v[5],
        }
    }

    pub fn as_array(&self) -> [f64; 6] {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }

    pub fn get(&self, dimension: RiasecDimension) -> f64 {
        self.as_array()[dimension.index()]
    }

    /// Dimensions paired with their scores, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RiasecDimension, f64)> + '_ {
        RiasecDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Dimensions sorted by descending score; equal scores keep canonical order.
    pub fn ranked(&self) -> Vec<(RiasecDimension, f64)> {
        let mut ranked: Vec<(RiasecDimension, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Highest-scoring dimension; first maximum in canonical order wins.
    pub fn primary(&self) -> RiasecDimension {
        argmax_excluding(self, None)
    }

    /// Highest-scoring dimension other than the primary.
    pub fn secondary(&self) -> RiasecDimension {
        argmax_excluding(self, Some(self.primary()))
    }

    /// Three-letter Holland code, e.g. "CIR".
    pub fn holland_code(&self) -> String {
        self.ranked().iter().take(3).map(|(d, _)| d.code()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(|v| *v == 0.0)
    }
}

fn argmax_excluding(scores: &DimensionScore, excluded: Option<RiasecDimension>) -> RiasecDimension {
    let mut best: Option<(RiasecDimension, f64)> = None;
    for (dimension, score) in scores.iter() {
        if Some(dimension) == excluded {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((dimension, score)),
        }
    }
    // At most one dimension is excluded, so at least five candidates remain.
    best.map(|(d, _)| d).unwrap_or(RiasecDimension::Realistic)
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_DIMENSION_SCORE)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_names() {
        assert_eq!(RiasecDimension::parse("r"), Some(RiasecDimension::Realistic));
        assert_eq!(RiasecDimension::parse(" Social "), Some(RiasecDimension::Social));
        assert_eq!(RiasecDimension::parse("ENTERPRISING"), Some(RiasecDimension::Enterprising));
        assert_eq!(RiasecDimension::parse("x"), None);
        assert_eq!(RiasecDimension::parse("Creative"), None);
    }

    #[test]
    fn test_primary_is_argmax() {
        let scores = DimensionScore::from_array([3.67, 4.0, 2.5, 3.17, 3.33, 4.33]);
        assert_eq!(scores.primary(), RiasecDimension::Conventional);
        assert_eq!(scores.secondary(), RiasecDimension::Investigative);
    }

    #[test]
    fn test_tie_break_follows_canonical_order() {
        let scores = DimensionScore::from_array([2.0, 4.0, 4.0, 1.0, 4.0, 0.0]);
        assert_eq!(scores.primary(), RiasecDimension::Investigative);
        assert_eq!(scores.secondary(), RiasecDimension::Artistic);

        let flat = DimensionScore::from_array([3.0; 6]);
        assert_eq!(flat.primary(), RiasecDimension::Realistic);
        assert_eq!(flat.secondary(), RiasecDimension::Investigative);
    }

    #[test]
    fn test_secondary_distinct_for_all_zero_scores() {
        let scores = DimensionScore::default();
        assert_ne!(scores.primary(), scores.secondary());
    }

    #[test]
    fn test_values_are_clamped() {
        let scores = DimensionScore::from_array([7.0, -1.0, f64::NAN, f64::INFINITY, 2.5, 5.0]);
        assert_eq!(scores.as_array(), [5.0, 0.0, 0.0, 0.0, 2.5, 5.0]);
    }

    #[test]
    fn test_holland_code() {
        let scores = DimensionScore::from_array([3.67, 4.0, 2.5, 3.17, 3.33, 4.33]);
        assert_eq!(scores.holland_code(), "CIR");
    }
}
