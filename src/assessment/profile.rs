//! Derives a descriptive personality profile from dimension scores

use crate::assessment::dimension::{DimensionScore, RiasecDimension};
use serde::{Deserialize, Serialize};

/// Score at or above which a dimension contributes strengths and career clusters.
pub const STRENGTH_THRESHOLD: f64 = 4.0;

/// Score at or above which a dimension contributes working and learning styles.
pub const STYLE_THRESHOLD: f64 = 3.5;

/// Number of top-ranked dimensions considered for strengths.
const TOP_DIMENSIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub scores: DimensionScore,
    pub primary_dimension: RiasecDimension,
    pub secondary_dimension: RiasecDimension,
    pub holland_code: String,
    pub strengths: Vec<String>,
    pub work_preferences: Vec<String>,
    pub career_clusters: Vec<String>,
    pub communication_style: Vec<String>,
    pub learning_preferences: Vec<String>,
    pub description: String,
}

/// Static characteristics attached to one RIASEC dimension.
struct DimensionTraits {
    summary: &'static str,
    strengths: &'static [&'static str],
    work_preferences: &'static [&'static str],
    clusters: &'static [&'static str],
    communication: &'static str,
    learning: &'static str,
}

fn traits(dimension: RiasecDimension) -> &'static DimensionTraits {
    match dimension {
        RiasecDimension::Realistic => &REALISTIC,
        RiasecDimension::Investigative => &INVESTIGATIVE,
        RiasecDimension::Artistic => &ARTISTIC,
        RiasecDimension::Social => &SOCIAL,
        RiasecDimension::Enterprising => &ENTERPRISING,
        RiasecDimension::Conventional => &CONVENTIONAL,
    }
}

static REALISTIC: DimensionTraits = DimensionTraits {
    summary: "practical and hands-on, happiest working with tools, machines and physical systems",
    strengths: &["Practical problem solving", "Mechanical aptitude", "Physical coordination"],
    work_preferences: &["Hands-on tasks", "Working outdoors or in workshops", "Clear, tangible outcomes"],
    clusters: &["Engineering & Technology", "Skilled Trades", "Agriculture & Environment"],
    communication: "Direct and to the point",
    learning: "Learning by doing and experimentation",
};

static INVESTIGATIVE: DimensionTraits = DimensionTraits {
    summary: "curious and analytical, drawn to ideas, research and understanding how things work",
    strengths: &["Analytical thinking", "Research skills", "Scientific reasoning"],
    work_preferences: &["Independent research", "Solving complex problems", "Intellectual challenge"],
    clusters: &["Science & Research", "Healthcare & Medicine", "Information Technology"],
    communication: "Precise and evidence-based",
    learning: "Reading, research and independent study",
};

static ARTISTIC: DimensionTraits = DimensionTraits {
    summary: "imaginative and expressive, motivated by originality and creative freedom",
    strengths: &["Creativity", "Original thinking", "Aesthetic sense"],
    work_preferences: &["Flexible, unstructured settings", "Creative autonomy", "Variety and novelty"],
    clusters: &["Arts & Design", "Media & Communication", "Performing Arts"],
    communication: "Expressive and visual",
    learning: "Visual and project-based exploration",
};

static SOCIAL: DimensionTraits = DimensionTraits {
    summary: "empathetic and cooperative, energised by helping, teaching and supporting others",
    strengths: &["Empathy", "Interpersonal skills", "Teaching and mentoring"],
    work_preferences: &["Collaborative teams", "Helping people directly", "Community impact"],
    clusters: &["Education & Training", "Health & Social Care", "Counseling & Community Services"],
    communication: "Warm, collaborative and supportive",
    learning: "Group discussion and cooperative learning",
};

static ENTERPRISING: DimensionTraits = DimensionTraits {
    summary: "ambitious and persuasive, comfortable leading people and taking calculated risks",
    strengths: &["Leadership", "Persuasion", "Decision making"],
    work_preferences: &["Leadership roles", "Competitive environments", "Goal-driven projects"],
    clusters: &["Business & Management", "Sales & Marketing", "Law & Public Policy"],
    communication: "Persuasive and confident",
    learning: "Case studies, debate and real-world challenges",
};

static CONVENTIONAL: DimensionTraits = DimensionTraits {
    summary: "organised and dependable, at home with structure, data and well-defined procedures",
    strengths: &["Organization", "Attention to detail", "Reliability"],
    work_preferences: &["Structured routines", "Clear expectations", "Working with data and records"],
    clusters: &["Finance & Accounting", "Administration & Operations", "Data & Information Management"],
    communication: "Clear, structured and formal",
    learning: "Step-by-step instruction with clear structure",
};

pub struct ProfileBuilder;

impl ProfileBuilder {
    pub fn build(scores: &DimensionScore) -> PersonalityProfile {
        let primary = scores.primary();
        let secondary = scores.secondary();
        let ranked = scores.ranked();

        let strengths = ranked
            .iter()
            .take(TOP_DIMENSIONS)
            .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
            .flat_map(|(dimension, _)| traits(*dimension).strengths.iter())
            .map(|s| s.to_string())
            .collect();

        let career_clusters = scores
            .iter()
            .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
            .flat_map(|(dimension, _)| traits(dimension).clusters.iter())
            .map(|s| s.to_string())
            .collect();

        let mut styled: Vec<RiasecDimension> = scores
            .iter()
            .filter(|(_, score)| *score >= STYLE_THRESHOLD)
            .map(|(dimension, _)| dimension)
            .collect();
        if styled.is_empty() {
            styled.push(primary);
        }

        let work_preferences = styled
            .iter()
            .flat_map(|d| traits(*d).work_preferences.iter())
            .map(|s| s.to_string())
            .collect();
        let communication_style = styled
            .iter()
            .map(|d| traits(*d).communication.to_string())
            .collect();
        let learning_preferences = styled
            .iter()
            .map(|d| traits(*d).learning.to_string())
            .collect();

        PersonalityProfile {
            scores: *scores,
            primary_dimension: primary,
            secondary_dimension: secondary,
            holland_code: scores.holland_code(),
            strengths,
            work_preferences,
            career_clusters,
            communication_style,
            learning_preferences,
            description: Self::describe(primary, secondary),
        }
    }

    fn describe(primary: RiasecDimension, secondary: RiasecDimension) -> String {
        format!(
            "Your strongest interest area is {} ({}), followed by {} ({}). You are {}.",
            primary.name(),
            primary.code(),
            secondary.name(),
            secondary.code(),
            traits(primary).summary
        )
    }
}

impl PersonalityProfile {
    pub fn from_scores(scores: &DimensionScore) -> Self {
        ProfileBuilder::build(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_scores() -> DimensionScore {
        DimensionScore::from_array([3.67, 4.0, 2.5, 3.17, 3.33, 4.33])
    }

    #[test]
    fn test_reference_profile() {
        let profile = PersonalityProfile::from_scores(&reference_scores());

        assert_eq!(profile.primary_dimension, RiasecDimension::Conventional);
        assert_eq!(profile.secondary_dimension, RiasecDimension::Investigative);
        assert_eq!(profile.holland_code, "CIR");
        assert!(profile.description.starts_with("Your strongest interest area is Conventional (C)"));
    }

    #[test]
    fn test_strengths_come_from_strong_top_dimensions() {
        let profile = PersonalityProfile::from_scores(&reference_scores());

        // C (4.33) and I (4.00) qualify; R is third but below 4.0.
        assert_eq!(profile.strengths.len(), 6);
        assert_eq!(profile.strengths[0], "Organization");
        assert!(profile.strengths.contains(&"Analytical thinking".to_string()));
        assert!(!profile.strengths.contains(&"Mechanical aptitude".to_string()));
    }

    #[test]
    fn test_strengths_limited_to_top_three() {
        let scores = DimensionScore::from_array([5.0, 5.0, 5.0, 4.5, 4.0, 4.0]);
        let profile = PersonalityProfile::from_scores(&scores);

        assert_eq!(profile.strengths.len(), 9);
        assert!(!profile.strengths.contains(&"Empathy".to_string()));
        // Clusters are not limited to the top three.
        assert_eq!(profile.career_clusters.len(), 18);
    }

    #[test]
    fn test_clusters_follow_canonical_order() {
        let profile = PersonalityProfile::from_scores(&reference_scores());
        assert_eq!(
            profile.career_clusters,
            vec![
                "Science & Research",
                "Healthcare & Medicine",
                "Information Technology",
                "Finance & Accounting",
                "Administration & Operations",
                "Data & Information Management",
            ]
        );
    }

    #[test]
    fn test_styles_use_threshold() {
        let profile = PersonalityProfile::from_scores(&reference_scores());
        // R 3.67, I 4.00 and C 4.33 are at or above 3.5.
        assert_eq!(profile.communication_style.len(), 3);
        assert_eq!(profile.learning_preferences[0], "Learning by doing and experimentation");
    }

    #[test]
    fn test_low_scores_fall_back_to_primary_styles() {
        let scores = DimensionScore::from_array([1.0, 2.0, 3.0, 1.0, 1.0, 1.0]);
        let profile = PersonalityProfile::from_scores(&scores);

        assert!(profile.strengths.is_empty());
        assert!(profile.career_clusters.is_empty());
        assert_eq!(profile.communication_style, vec!["Expressive and visual".to_string()]);
        assert_eq!(profile.work_preferences.len(), 3);
    }

    #[test]
    fn test_primary_and_secondary_always_distinct() {
        let grids = [[0.0; 6], [5.0; 6], [1.0, 1.0, 2.0, 2.0, 0.5, 0.5]];
        for grid in grids {
            let profile = PersonalityProfile::from_scores(&DimensionScore::from_array(grid));
            assert_ne!(profile.primary_dimension, profile.secondary_dimension);
        }
    }
}
