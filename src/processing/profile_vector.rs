//! Student profile model and its fixed-length vector encoding

use crate::assessment::dimension::{clamp_score, DimensionScore};
use crate::processing::vocabulary::*;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Score used when a grade or proficiency level cannot be interpreted.
pub const NEUTRAL_LEVEL: f64 = 2.5;

/// Total length of the flattened profile vector.
pub const PROFILE_VECTOR_LEN: usize = ACADEMIC_SUBJECTS_LEN
    + ACTIVITIES_LEN
    + TECHNICAL_SKILLS_LEN
    + SOFT_SKILLS_LEN
    + RIASEC_LEN
    + INTERESTS_LEN
    + CAREER_PREFERENCES_LEN
    + LOCATIONS_LEN
    + SALARY_BANDS_LEN
    + WORK_ENVIRONMENTS_LEN;

/// An ordinal value attached to a subject or skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rating {
    Label(String),
    Value(f64),
    Unrated,
}

/// Raw multi-category student profile. Every category is optional.
///
/// Deserialization is lenient: categories with an unexpected shape are
/// dropped instead of failing the whole profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentProfile {
    pub academic_subjects: BTreeMap<String, Rating>,
    pub extracurricular_activities: Vec<String>,
    pub technical_skills: BTreeMap<String, Rating>,
    pub soft_skills: BTreeMap<String, Rating>,
    /// Skills given without a category; routed by vocabulary membership.
    pub skills: BTreeMap<String, Rating>,
    pub personality_dimensions: BTreeMap<String, f64>,
    pub interests: Vec<String>,
    pub career_preferences: Vec<String>,
    pub location_preferences: Vec<String>,
    pub salary_expectation: Vec<String>,
    pub work_environment: Vec<String>,
}

impl<'de> Deserialize<'de> for StudentProfile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(StudentProfile::from_value(&value))
    }
}

impl StudentProfile {
    /// Build a profile from loosely shaped JSON. Never fails; anything that
    /// cannot be read is left empty.
    pub fn from_value(value: &Value) -> Self {
        let mut profile = StudentProfile::default();
        let Some(object) = value.as_object() else {
            debug!("Profile is not an object; using an empty profile");
            return profile;
        };

        for (key, value) in object {
            match normalize_term(key).as_str() {
                "academic subjects" | "academics" | "subjects" | "grades" => {
                    profile.academic_subjects.extend(read_ratings(value))
                }
                "extracurricular activities" | "extracurriculars" | "activities" => {
                    profile.extracurricular_activities.extend(read_tags(value))
                }
                "technical skills" => profile.technical_skills.extend(read_ratings(value)),
                "soft skills" => profile.soft_skills.extend(read_ratings(value)),
                "skills" => profile.skills.extend(read_ratings(value)),
                "personality dimensions" | "personality" | "riasec" | "riasec scores" => {
                    profile.personality_dimensions.extend(read_personality(value))
                }
                "interests" => profile.interests.extend(read_tags(value)),
                "career preferences" | "preferences" => profile.career_preferences.extend(read_tags(value)),
                "location preferences" | "locations" | "location" => {
                    profile.location_preferences.extend(read_tags(value))
                }
                "salary expectation" | "salary" => profile.salary_expectation.extend(read_tags(value)),
                "work environment" | "work environment preference" | "environment" => {
                    profile.work_environment.extend(read_tags(value))
                }
                other => debug!("Ignoring unknown profile category: {}", other),
            }
        }

        profile
    }

    /// Replace the personality category with assessed dimension scores.
    pub fn with_personality(mut self, scores: &DimensionScore) -> Self {
        self.personality_dimensions = scores
            .iter()
            .map(|(dimension, score)| (dimension.name().to_string(), score))
            .collect();
        self
    }

    pub fn has_personality(&self) -> bool {
        !self.personality_dimensions.is_empty()
    }

    /// True when the student lists the skill in any skill category.
    pub fn has_skill(&self, skill: &str) -> bool {
        let key = normalize_term(skill);
        let canonical_technical = TECHNICAL_SKILLS.canonical(skill);
        let canonical_soft = SOFT_SKILLS.canonical(skill);

        self.all_skill_names().any(|name| {
            normalize_term(name) == key
                || (canonical_technical.is_some() && TECHNICAL_SKILLS.canonical(name) == canonical_technical)
                || (canonical_soft.is_some() && SOFT_SKILLS.canonical(name) == canonical_soft)
        })
    }

    pub fn all_skill_names(&self) -> impl Iterator<Item = &String> {
        self.technical_skills
            .keys()
            .chain(self.soft_skills.keys())
            .chain(self.skills.keys())
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        match ACADEMIC_SUBJECTS.canonical(subject) {
            Some(canonical) => self
                .academic_subjects
                .keys()
                .any(|s| ACADEMIC_SUBJECTS.canonical(s) == Some(canonical)),
            None => {
                let key = normalize_term(subject);
                self.academic_subjects.keys().any(|s| normalize_term(s) == key)
            }
        }
    }
}

fn read_rating(value: &Value) -> Rating {
    match value {
        Value::String(s) => Rating::Label(s.clone()),
        Value::Number(n) => n.as_f64().map(Rating::Value).unwrap_or(Rating::Unrated),
        _ => Rating::Unrated,
    }
}

fn read_ratings(value: &Value) -> Vec<(String, Rating)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), read_rating(v))).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|name| (name.to_string(), Rating::Unrated))
            .collect(),
        Value::String(name) => vec![(name.clone(), Rating::Unrated)],
        _ => Vec::new(),
    }
}

fn read_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect(),
        Value::String(tag) => vec![tag.clone()],
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| is_truthy(v))
            .map(|(k, _)| k.clone())
            .collect(),
        _ => Vec::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    }
}

fn read_personality(value: &Value) -> Vec<(String, f64)> {
    match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| {
                let score = match v {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                }?;
                Some((k.clone(), score))
            })
            .collect(),
        Value::Array(items) => RIASEC_DIMENSIONS
            .terms()
            .iter()
            .zip(items.iter())
            .filter_map(|(name, v)| v.as_f64().map(|score| (name.to_string(), score)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Grade letter or number to a 0-5 score. Bare numbers up to 5 are already on
/// the 0-5 scale, up to 10 are read as a ten-point grade and up to 100 as a
/// percentage. A trailing `%` always means a percentage.
pub fn grade_score(rating: &Rating) -> f64 {
    match rating {
        Rating::Value(v) => numeric_grade(*v),
        Rating::Label(label) => {
            let label = label.trim().to_uppercase();
            if let Some(percent) = label.strip_suffix('%') {
                return match percent.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => (v / 20.0).clamp(0.0, 5.0),
                    _ => NEUTRAL_LEVEL,
                };
            }
            if let Ok(v) = label.parse::<f64>() {
                return numeric_grade(v);
            }
            match label.as_str() {
                "A+" => 5.0,
                "A" => 4.5,
                "A-" => 4.2,
                "B+" => 4.0,
                "B" => 3.5,
                "B-" => 3.2,
                "C+" => 3.0,
                "C" => 2.5,
                "C-" => 2.2,
                "D" => 1.5,
                "E" => 1.0,
                "F" => 0.5,
                _ => NEUTRAL_LEVEL,
            }
        }
        Rating::Unrated => NEUTRAL_LEVEL,
    }
}

fn numeric_grade(value: f64) -> f64 {
    if !value.is_finite() {
        NEUTRAL_LEVEL
    } else if value <= 5.0 {
        value.max(0.0)
    } else if value <= 10.0 {
        value / 2.0
    } else if value <= 100.0 {
        value / 20.0
    } else {
        5.0
    }
}

/// Proficiency label or number to a 0-5 score.
pub fn proficiency_score(rating: &Rating) -> f64 {
    match rating {
        Rating::Value(v) if v.is_finite() => v.clamp(0.0, 5.0),
        Rating::Value(_) => NEUTRAL_LEVEL,
        Rating::Label(label) => {
            let label = normalize_term(label);
            if let Ok(v) = label.parse::<f64>() {
                return if v.is_finite() { v.clamp(0.0, 5.0) } else { NEUTRAL_LEVEL };
            }
            match label.as_str() {
                "expert" | "master" => 5.0,
                "advanced" | "proficient" => 4.0,
                "intermediate" => 3.0,
                "beginner" | "basic" => 2.0,
                "novice" => 1.0,
                _ => NEUTRAL_LEVEL,
            }
        }
        Rating::Unrated => NEUTRAL_LEVEL,
    }
}

/// Ten named sub-vectors of a student profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileVector {
    pub academic_subjects: [f64; ACADEMIC_SUBJECTS_LEN],
    pub extracurricular_activities: [f64; ACTIVITIES_LEN],
    pub technical_skills: [f64; TECHNICAL_SKILLS_LEN],
    pub soft_skills: [f64; SOFT_SKILLS_LEN],
    pub personality_dimensions: [f64; RIASEC_LEN],
    pub interests: [f64; INTERESTS_LEN],
    pub career_preferences: [f64; CAREER_PREFERENCES_LEN],
    pub location_preferences: [f64; LOCATIONS_LEN],
    pub salary_expectation: [f64; SALARY_BANDS_LEN],
    pub work_environment: [f64; WORK_ENVIRONMENTS_LEN],
}

impl ProfileVector {
    pub fn zeroed() -> Self {
        Self {
            academic_subjects: [0.0; ACADEMIC_SUBJECTS_LEN],
            extracurricular_activities: [0.0; ACTIVITIES_LEN],
            technical_skills: [0.0; TECHNICAL_SKILLS_LEN],
            soft_skills: [0.0; SOFT_SKILLS_LEN],
            personality_dimensions: [0.0; RIASEC_LEN],
            interests: [0.0; INTERESTS_LEN],
            career_preferences: [0.0; CAREER_PREFERENCES_LEN],
            location_preferences: [0.0; LOCATIONS_LEN],
            salary_expectation: [0.0; SALARY_BANDS_LEN],
            work_environment: [0.0; WORK_ENVIRONMENTS_LEN],
        }
    }

    /// Sub-vectors with their names, in schema order.
    pub fn sub_vectors(&self) -> [(&'static str, &[f64]); 10] {
        [
            (ACADEMIC_SUBJECTS.name, &self.academic_subjects[..]),
            (ACTIVITIES.name, &self.extracurricular_activities[..]),
            (TECHNICAL_SKILLS.name, &self.technical_skills[..]),
            (SOFT_SKILLS.name, &self.soft_skills[..]),
            (RIASEC_DIMENSIONS.name, &self.personality_dimensions[..]),
            (INTERESTS.name, &self.interests[..]),
            (CAREER_PREFERENCES.name, &self.career_preferences[..]),
            (LOCATIONS.name, &self.location_preferences[..]),
            (SALARY_BANDS.name, &self.salary_expectation[..]),
            (WORK_ENVIRONMENTS.name, &self.work_environment[..]),
        ]
    }

    /// Concatenation of all sub-vectors.
    pub fn flatten(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(PROFILE_VECTOR_LEN);
        for (_, values) in self.sub_vectors() {
            flat.extend_from_slice(values);
        }
        flat
    }

    pub fn is_zero(&self) -> bool {
        self.sub_vectors()
            .iter()
            .all(|(_, values)| values.iter().all(|v| *v == 0.0))
    }

    pub fn has_technical_skills(&self) -> bool {
        self.technical_skills.iter().any(|v| *v > 0.0)
    }

    pub fn has_personality(&self) -> bool {
        self.personality_dimensions.iter().any(|v| *v > 0.0)
    }

    pub fn has_academics(&self) -> bool {
        self.academic_subjects.iter().any(|v| *v > 0.0)
    }
}

/// Encodes a `StudentProfile` into a `ProfileVector`. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileVectorizer;

impl ProfileVectorizer {
    pub fn new() -> Self {
        Self
    }

    pub fn vectorize(&self, profile: &StudentProfile) -> ProfileVector {
        let mut vector = ProfileVector::zeroed();

        fill_ratings(&mut vector.academic_subjects, &ACADEMIC_SUBJECTS, &profile.academic_subjects, grade_score);
        fill_ratings(&mut vector.technical_skills, &TECHNICAL_SKILLS, &profile.technical_skills, proficiency_score);
        fill_ratings(&mut vector.soft_skills, &SOFT_SKILLS, &profile.soft_skills, proficiency_score);

        for (name, rating) in &profile.skills {
            let score = proficiency_score(rating);
            if let Some(i) = TECHNICAL_SKILLS.position(name) {
                vector.technical_skills[i] = vector.technical_skills[i].max(score);
            } else if let Some(i) = SOFT_SKILLS.position(name) {
                vector.soft_skills[i] = vector.soft_skills[i].max(score);
            } else {
                debug!("Dropping unknown skill: {}", name);
            }
        }

        for (name, score) in &profile.personality_dimensions {
            match RIASEC_DIMENSIONS.position(name) {
                Some(i) => vector.personality_dimensions[i] = clamp_score(*score),
                None => debug!("Dropping unknown personality dimension: {}", name),
            }
        }

        fill_tags(&mut vector.extracurricular_activities, &ACTIVITIES, &profile.extracurricular_activities);
        fill_tags(&mut vector.interests, &INTERESTS, &profile.interests);
        fill_tags(&mut vector.career_preferences, &CAREER_PREFERENCES, &profile.career_preferences);
        fill_tags(&mut vector.location_preferences, &LOCATIONS, &profile.location_preferences);
        fill_tags(&mut vector.salary_expectation, &SALARY_BANDS, &profile.salary_expectation);
        fill_tags(&mut vector.work_environment, &WORK_ENVIRONMENTS, &profile.work_environment);

        vector
    }
}

fn fill_ratings(
    target: &mut [f64],
    vocabulary: &Vocabulary,
    ratings: &BTreeMap<String, Rating>,
    score: fn(&Rating) -> f64,
) {
    for (name, rating) in ratings {
        match vocabulary.position(name) {
            Some(i) => target[i] = target[i].max(score(rating)),
            None => debug!("Dropping unknown {} entry: {}", vocabulary.name, name),
        }
    }
}

fn fill_tags(target: &mut [f64], vocabulary: &Vocabulary, tags: &[String]) {
    for tag in tags {
        match vocabulary.position(tag) {
            Some(i) => target[i] = 1.0,
            None => debug!("Dropping unknown {} tag: {}", vocabulary.name, tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vectorize(value: Value) -> ProfileVector {
        ProfileVectorizer::new().vectorize(&StudentProfile::from_value(&value))
    }

    fn non_zero_count(vector: &ProfileVector) -> usize {
        vector.flatten().iter().filter(|v| **v != 0.0).count()
    }

    #[test]
    fn test_flat_length_is_constant() {
        assert_eq!(PROFILE_VECTOR_LEN, 119);
        assert_eq!(vectorize(json!({})).flatten().len(), PROFILE_VECTOR_LEN);
        assert_eq!(
            vectorize(json!({"interests": ["Technology", "Arts"], "skills": {"Python": "Expert"}}))
                .flatten()
                .len(),
            PROFILE_VECTOR_LEN
        );
    }

    #[test]
    fn test_empty_profile_is_all_zero() {
        let vector = vectorize(json!({}));
        assert!(vector.is_zero());
        assert_eq!(non_zero_count(&vector), 0);
    }

    #[test]
    fn test_single_interest_sets_one_entry() {
        let vector = vectorize(json!({"interests": ["Technology"]}));
        assert_eq!(non_zero_count(&vector), 1);
        assert_eq!(vector.interests[INTERESTS.position("Technology").unwrap()], 1.0);
    }

    #[test]
    fn test_grades_use_lookup_table() {
        let vector = vectorize(json!({
            "academic_subjects": {"Mathematics": "A+", "Physics": "B", "Chemistry": "??", "Biology": 92, "History": 4.0}
        }));
        assert_eq!(vector.academic_subjects[0], 5.0);
        assert_eq!(vector.academic_subjects[1], 3.5);
        assert_eq!(vector.academic_subjects[2], NEUTRAL_LEVEL);
        assert_eq!(vector.academic_subjects[3], 4.6);
        assert_eq!(vector.academic_subjects[ACADEMIC_SUBJECTS.position("History").unwrap()], 4.0);
    }

    #[test]
    fn test_numeric_grade_scales_are_monotonic() {
        assert_eq!(grade_score(&Rating::Value(5.0)), 5.0);
        assert_eq!(grade_score(&Rating::Value(5.5)), 2.75);
        assert_eq!(grade_score(&Rating::Value(7.0)), 3.5);
        assert_eq!(grade_score(&Rating::Value(10.0)), 5.0);
        assert_eq!(grade_score(&Rating::Value(60.0)), 3.0);
        assert_eq!(grade_score(&Rating::Value(250.0)), 5.0);
        assert_eq!(grade_score(&Rating::Value(-3.0)), 0.0);
        assert_eq!(grade_score(&Rating::Label("8".to_string())), 4.0);
        assert_eq!(grade_score(&Rating::Label("8%".to_string())), 0.4);
        assert_eq!(grade_score(&Rating::Label("90 %".to_string())), 4.5);
        assert_eq!(grade_score(&Rating::Label("x%".to_string())), NEUTRAL_LEVEL);
    }

    #[test]
    fn test_proficiency_levels() {
        let vector = vectorize(json!({
            "technical_skills": {"Python": "Expert", "SQL": "beginner", "Java": "wizard", "CAD": 9},
            "soft_skills": {"Leadership": "Advanced"}
        }));
        assert_eq!(vector.technical_skills[TECHNICAL_SKILLS.position("Python").unwrap()], 5.0);
        assert_eq!(vector.technical_skills[TECHNICAL_SKILLS.position("SQL").unwrap()], 2.0);
        assert_eq!(vector.technical_skills[TECHNICAL_SKILLS.position("Java").unwrap()], NEUTRAL_LEVEL);
        assert_eq!(vector.technical_skills[TECHNICAL_SKILLS.position("CAD").unwrap()], 5.0);
        assert_eq!(vector.soft_skills[SOFT_SKILLS.position("Leadership").unwrap()], 4.0);
    }

    #[test]
    fn test_uncategorized_skills_are_routed() {
        let vector = vectorize(json!({"skills": {"Python": "Advanced", "Empathy": "Expert", "Juggling": "Expert"}}));
        assert_eq!(vector.technical_skills[TECHNICAL_SKILLS.position("Python").unwrap()], 4.0);
        assert_eq!(vector.soft_skills[SOFT_SKILLS.position("Empathy").unwrap()], 5.0);
        assert_eq!(non_zero_count(&vector), 2);
    }

    #[test]
    fn test_unknown_tags_and_categories_are_dropped() {
        let vector = vectorize(json!({
            "interests": ["Technology", "Time Travel", 42],
            "favourite_food": "pizza",
            "location_preferences": "Remote"
        }));
        assert_eq!(non_zero_count(&vector), 2);
        assert_eq!(vector.location_preferences[LOCATIONS.position("Remote").unwrap()], 1.0);
    }

    #[test]
    fn test_wrongly_shaped_categories_degrade_to_zero() {
        let vector = vectorize(json!({
            "interests": 7,
            "technical_skills": true,
            "personality_dimensions": "very social"
        }));
        assert!(vector.is_zero());

        let not_an_object = ProfileVectorizer::new().vectorize(&StudentProfile::from_value(&json!([1, 2, 3])));
        assert!(not_an_object.is_zero());
    }

    #[test]
    fn test_personality_accepts_names_codes_and_arrays() {
        let by_name = vectorize(json!({"personality": {"Realistic": 3.5, "c": 4.25, "X": 2.0, "Social": 9}}));
        assert_eq!(by_name.personality_dimensions, [3.5, 0.0, 0.0, 5.0, 0.0, 4.25]);

        let by_array = vectorize(json!({"riasec": [1.0, 2.0, 3.0, 4.0, 5.0, 0.5]}));
        assert_eq!(by_array.personality_dimensions, [1.0, 2.0, 3.0, 4.0, 5.0, 0.5]);
    }

    #[test]
    fn test_with_personality_uses_assessed_scores() {
        let scores = DimensionScore::from_array([3.67, 4.0, 2.5, 3.17, 3.33, 4.33]);
        let profile = StudentProfile::default().with_personality(&scores);
        let vector = ProfileVectorizer::new().vectorize(&profile);
        assert_eq!(vector.personality_dimensions, scores.as_array());
    }

    #[test]
    fn test_profile_deserializes_leniently() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"interests": "Science", "technical_skills": ["Python", "SQL"], "unknown": {"a": 1}}"#,
        )
        .unwrap();
        assert_eq!(profile.interests, vec!["Science".to_string()]);
        assert_eq!(profile.technical_skills.len(), 2);
        assert!(profile.has_skill("python"));
        assert!(!profile.has_skill("Java"));
    }

    #[test]
    fn test_has_skill_resolves_aliases() {
        let profile = StudentProfile::from_value(&json!({"skills": {"Excel": "Advanced"}}));
        assert!(profile.has_skill("Spreadsheets"));
    }

    #[test]
    fn test_vectorization_is_idempotent() {
        let value = json!({
            "academic_subjects": {"Mathematics": "A", "Physics": "B+"},
            "technical_skills": {"Python": "Advanced"},
            "interests": ["Technology", "Science"],
            "personality_dimensions": {"Investigative": 4.0}
        });
        let first = vectorize(value.clone()).flatten();
        let second = vectorize(value).flatten();
        let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_values_stay_within_scale() {
        let vector = vectorize(json!({
            "academic_subjects": {"Mathematics": 1000, "Physics": -4},
            "technical_skills": {"Python": -3},
            "personality_dimensions": {"Artistic": -1.0, "Social": 12.0}
        }));
        for value in vector.flatten() {
            assert!((0.0..=5.0).contains(&value));
        }
    }
}
