//! Keyword-based skill classification

use crate::error::{CareerMatcherError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Analytical,
    Creative,
    Soft,
    Other,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Analytical => "Analytical",
            SkillCategory::Creative => "Creative",
            SkillCategory::Soft => "Soft",
            SkillCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

const KEYWORDS: &[(&str, SkillCategory)] = &[
    // Technical
    ("programming", SkillCategory::Technical),
    ("coding", SkillCategory::Technical),
    ("software", SkillCategory::Technical),
    ("python", SkillCategory::Technical),
    ("java", SkillCategory::Technical),
    ("c++", SkillCategory::Technical),
    ("sql", SkillCategory::Technical),
    ("database", SkillCategory::Technical),
    ("web", SkillCategory::Technical),
    ("mobile", SkillCategory::Technical),
    ("cloud", SkillCategory::Technical),
    ("cyber", SkillCategory::Technical),
    ("network", SkillCategory::Technical),
    ("machine learning", SkillCategory::Technical),
    ("electronics", SkillCategory::Technical),
    ("hardware", SkillCategory::Technical),
    ("cad", SkillCategory::Technical),
    ("engineering", SkillCategory::Technical),
    ("laboratory", SkillCategory::Technical),
    ("technical", SkillCategory::Technical),
    // Analytical
    ("analysis", SkillCategory::Analytical),
    ("analytic", SkillCategory::Analytical),
    ("statistic", SkillCategory::Analytical),
    ("data", SkillCategory::Analytical),
    ("research", SkillCategory::Analytical),
    ("math", SkillCategory::Analytical),
    ("spreadsheet", SkillCategory::Analytical),
    ("excel", SkillCategory::Analytical),
    ("model", SkillCategory::Analytical),
    ("forecast", SkillCategory::Analytical),
    ("problem solving", SkillCategory::Analytical),
    ("critical thinking", SkillCategory::Analytical),
    ("logic", SkillCategory::Analytical),
    // Creative
    ("design", SkillCategory::Creative),
    ("creativ", SkillCategory::Creative),
    ("artistic", SkillCategory::Creative),
    ("drawing", SkillCategory::Creative),
    ("painting", SkillCategory::Creative),
    ("writing", SkillCategory::Creative),
    ("video", SkillCategory::Creative),
    ("photograph", SkillCategory::Creative),
    ("music", SkillCategory::Creative),
    ("animation", SkillCategory::Creative),
    ("storytelling", SkillCategory::Creative),
    // Soft
    ("communication", SkillCategory::Soft),
    ("leadership", SkillCategory::Soft),
    ("teamwork", SkillCategory::Soft),
    ("collaboration", SkillCategory::Soft),
    ("empathy", SkillCategory::Soft),
    ("negotiation", SkillCategory::Soft),
    ("public speaking", SkillCategory::Soft),
    ("presentation", SkillCategory::Soft),
    ("time management", SkillCategory::Soft),
    ("adaptability", SkillCategory::Soft),
    ("organization", SkillCategory::Soft),
    ("organisation", SkillCategory::Soft),
    ("attention to detail", SkillCategory::Soft),
    ("decision", SkillCategory::Soft),
    ("conflict", SkillCategory::Soft),
    ("interpersonal", SkillCategory::Soft),
    ("mentoring", SkillCategory::Soft),
    ("customer service", SkillCategory::Soft),
];

/// Classifies free-form skill names into coarse categories. Built once and
/// shared; classification itself is a pure lookup.
pub struct SkillClassifier {
    matcher: AhoCorasick,
}

impl SkillClassifier {
    pub fn new() -> Result<Self> {
        let patterns: Vec<&str> = KEYWORDS.iter().map(|(keyword, _)| *keyword).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| CareerMatcherError::Processing(format!("Failed to build skill classifier: {}", e)))?;

        Ok(Self { matcher })
    }

    /// Category of the leftmost (longest) keyword found in the skill name.
    pub fn classify(&self, skill: &str) -> SkillCategory {
        self.matcher
            .find(skill)
            .map(|m| KEYWORDS[m.pattern().as_usize()].1)
            .unwrap_or(SkillCategory::Other)
    }

    pub fn keyword_count(&self) -> usize {
        KEYWORDS.len()
    }
}
