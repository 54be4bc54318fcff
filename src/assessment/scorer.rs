//! Converts raw questionnaire answers into six RIASEC dimension scores

use crate::assessment::dimension::{DimensionScore, RiasecDimension};
use crate::assessment::questions::{find_question, question_index, QuestionType, QUESTIONS, QUESTION_COUNT};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Midpoint of the five-point scales, used for unparseable answers.
pub const NEUTRAL_ANSWER: f64 = 3.0;

/// A single answer: a number on the 1-5 scale or a text label such as "Strongly Agree".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Numeric(f64),
    Text(String),
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Numeric(value)
    }
}

impl From<i32> for Answer {
    fn from(value: i32) -> Self {
        Answer::Numeric(value as f64)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Question id to answer.
pub type Responses = BTreeMap<String, Answer>;

/// Read responses from loosely shaped JSON: either a flat id-to-answer map or
/// one nested under `responses`. Values that are neither numbers nor strings
/// are skipped.
pub fn responses_from_value(value: &Value) -> Responses {
    let map = match value.get("responses") {
        Some(Value::Object(inner)) => inner,
        _ => match value.as_object() {
            Some(map) => map,
            None => return Responses::new(),
        },
    };

    map.iter()
        .filter_map(|(id, answer)| {
            let answer = match answer {
                Value::Number(n) => Answer::Numeric(n.as_f64()?),
                Value::String(s) => Answer::Text(s.clone()),
                _ => {
                    debug!("Skipping answer to {} with unsupported type", id);
                    return None;
                }
            };
            Some((id.clone(), answer))
        })
        .collect()
}

pub struct DimensionScorer {
    digit_regex: Regex,
}

impl Default for DimensionScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionScorer {
    pub fn new() -> Self {
        let digit_regex = Regex::new(r"\b([1-5](?:\.\d+)?)\b").expect("Invalid answer digit regex");
        Self { digit_regex }
    }

    /// Average the answered questions of each dimension. Unknown question ids are
    /// skipped and a dimension without answers scores `0.0`.
    pub fn score(&self, responses: &Responses) -> DimensionScore {
        let mut answered: [Option<f64>; QUESTION_COUNT] = [None; QUESTION_COUNT];

        for (question_id, answer) in responses {
            match question_index(question_id) {
                Some(slot) => {
                    let question_type = QUESTIONS[slot].question_type;
                    answered[slot] = Some(self.normalize_answer(answer, question_type));
                }
                None => debug!("Ignoring unknown question id: {}", question_id),
            }
        }

        let mut totals = [0.0f64; 6];
        let mut counts = [0usize; 6];
        for (question, value) in QUESTIONS.iter().zip(answered.iter()) {
            if let Some(value) = value {
                let index = question.dimension.index();
                totals[index] += value;
                counts[index] += 1;
            }
        }

        let mut averages = [0.0f64; 6];
        for dimension in RiasecDimension::ALL {
            let index = dimension.index();
            if counts[index] > 0 {
                averages[index] = round2(totals[index] / counts[index] as f64);
            }
        }

        DimensionScore::from_array(averages)
    }

    /// Number of recognised answers per dimension, in canonical order.
    pub fn answered_counts(&self, responses: &Responses) -> [usize; 6] {
        let mut counts = [0usize; 6];
        let mut seen = Vec::new();
        for question_id in responses.keys() {
            if let Some(question) = find_question(question_id) {
                if !seen.contains(&question.id) {
                    seen.push(question.id);
                    counts[question.dimension.index()] += 1;
                }
            }
        }
        counts
    }

    /// Map an answer onto the 1-5 scale for the given question type.
    pub fn normalize_answer(&self, answer: &Answer, question_type: QuestionType) -> f64 {
        match answer {
            Answer::Numeric(value) if value.is_finite() => value.clamp(1.0, 5.0),
            Answer::Numeric(_) => NEUTRAL_ANSWER,
            Answer::Text(text) => self.normalize_text(text, question_type),
        }
    }

    fn normalize_text(&self, text: &str, question_type: QuestionType) -> f64 {
        let normalized = text
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if let Ok(value) = normalized.parse::<f64>() {
            if value.is_finite() {
                return value.clamp(1.0, 5.0);
            }
        }

        if question_type == QuestionType::Preference {
            if let Some(score) = Self::preference_keyword_score(&normalized) {
                return score;
            }
        }

        if let Some(score) = Self::agreement_keyword_score(&normalized) {
            return score;
        }

        if let Some(digit) = self.digit_regex.captures(&normalized).and_then(|c| c.get(1)) {
            if let Ok(value) = digit.as_str().parse::<f64>() {
                return value.clamp(1.0, 5.0);
            }
        }

        NEUTRAL_ANSWER
    }

    fn agreement_keyword_score(text: &str) -> Option<f64> {
        // "disagree" contains "agree", so the negative forms are checked first.
        if text.contains("strongly disagree") {
            Some(1.0)
        } else if text.contains("strongly agree") {
            Some(5.0)
        } else if text.contains("disagree") {
            Some(2.0)
        } else if text.contains("agree") {
            Some(4.0)
        } else if text.contains("neutral") || text.contains("not sure") || text.contains("undecided") {
            Some(NEUTRAL_ANSWER)
        } else {
            None
        }
    }

    fn preference_keyword_score(text: &str) -> Option<f64> {
        if text.contains("no preference") || text.contains("either") || text.contains("both") {
            return Some(NEUTRAL_ANSWER);
        }
        if !text.contains("prefer") {
            return None;
        }

        let strongly = text.contains("strongly");
        let second = text.contains("option b") || text.contains("second") || text.contains("latter");
        let score = match (strongly, second) {
            (true, false) => 5.0,
            (false, false) => 4.0,
            (false, true) => 2.0,
            (true, true) => 1.0,
        };
        Some(score)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses_from(pairs: &[(&str, Answer)]) -> Responses {
        pairs
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.clone()))
            .collect()
    }

    fn reference_responses() -> Responses {
        let answers: [(char, [i32; 6]); 6] = [
            ('R', [4, 3, 5, 4, 4, 2]),
            ('I', [5, 4, 4, 3, 5, 3]),
            ('A', [2, 3, 2, 3, 2, 3]),
            ('S', [3, 4, 3, 3, 3, 3]),
            ('E', [4, 3, 3, 3, 4, 3]),
            ('C', [4, 5, 4, 4, 5, 4]),
        ];
        let mut responses = Responses::new();
        for (code, values) in answers {
            for (i, value) in values.iter().enumerate() {
                responses.insert(format!("{}{}", code, i + 1), Answer::from(*value));
            }
        }
        responses
    }

    #[test]
    fn test_reference_scores() {
        let scores = DimensionScorer::new().score(&reference_responses());

        assert_eq!(scores.realistic, 3.67);
        assert_eq!(scores.investigative, 4.0);
        assert_eq!(scores.artistic, 2.5);
        assert_eq!(scores.social, 3.17);
        assert_eq!(scores.enterprising, 3.33);
        assert_eq!(scores.conventional, 4.33);
        assert_eq!(scores.primary(), RiasecDimension::Conventional);
        assert_eq!(scores.secondary(), RiasecDimension::Investigative);
    }

    #[test]
    fn test_unknown_questions_are_ignored() {
        let responses = responses_from(&[
            ("R1", Answer::from(5)),
            ("Q99", Answer::from(1)),
            ("favourite_colour", Answer::from("blue")),
        ]);
        let scores = DimensionScorer::new().score(&responses);

        assert_eq!(scores.realistic, 5.0);
        assert_eq!(scores.investigative, 0.0);
        assert_eq!(scores.conventional, 0.0);
    }

    #[test]
    fn test_unanswered_dimension_scores_zero() {
        let scores = DimensionScorer::new().score(&Responses::new());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_agreement_text_answers() {
        let scorer = DimensionScorer::new();
        let cases = [
            ("Strongly Agree", 5.0),
            ("agree", 4.0),
            ("Neutral", 3.0),
            ("Disagree", 2.0),
            ("strongly  disagree", 1.0),
            ("4", 4.0),
            ("maybe?", 3.0),
        ];
        for (text, expected) in cases {
            let value = scorer.normalize_answer(&Answer::from(text), QuestionType::Agreement);
            assert_eq!(value, expected, "{}", text);
        }
    }

    #[test]
    fn test_decimal_text_answers() {
        let scorer = DimensionScorer::new();
        let cases = [
            ("2.5", 2.5),
            (" 3.75 ", 3.75),
            ("4.0", 4.0),
            ("7", 5.0),
            ("about 2.5 I think", 2.5),
            ("5.9 out of ten", 5.0),
        ];
        for (text, expected) in cases {
            let value = scorer.normalize_answer(&Answer::from(text), QuestionType::Agreement);
            assert_eq!(value, expected, "{}", text);
        }
    }

    #[test]
    fn test_preference_text_answers() {
        let scorer = DimensionScorer::new();
        let cases = [
            ("Strongly prefer the first option", 5.0),
            ("Prefer option A", 4.0),
            ("No preference", 3.0),
            ("Prefer the second", 2.0),
            ("Strongly prefer option B", 1.0),
            ("Agree", 4.0),
        ];
        for (text, expected) in cases {
            let value = scorer.normalize_answer(&Answer::from(text), QuestionType::Preference);
            assert_eq!(value, expected, "{}", text);
        }
    }

    #[test]
    fn test_numeric_answers_are_clamped() {
        let scorer = DimensionScorer::new();
        assert_eq!(scorer.normalize_answer(&Answer::from(9), QuestionType::Agreement), 5.0);
        assert_eq!(scorer.normalize_answer(&Answer::from(-2), QuestionType::Agreement), 1.0);
        assert_eq!(
            scorer.normalize_answer(&Answer::Numeric(f64::NAN), QuestionType::Agreement),
            NEUTRAL_ANSWER
        );
    }

    #[test]
    fn test_scores_within_bounds() {
        let scorer = DimensionScorer::new();
        let mut responses = Responses::new();
        for (i, question) in QUESTIONS.iter().enumerate() {
            let answer = if i % 3 == 0 {
                Answer::from(100)
            } else if i % 3 == 1 {
                Answer::from("strongly agree")
            } else {
                Answer::from(-50)
            };
            responses.insert(question.id.to_lowercase(), answer);
        }
        let scores = scorer.score(&responses);
        for (_, value) in scores.iter() {
            assert!((0.0..=5.0).contains(&value));
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = DimensionScorer::new();
        let responses = reference_responses();
        let first = scorer.score(&responses);
        let second = scorer.score(&responses);
        assert_eq!(first.as_array().map(f64::to_bits), second.as_array().map(f64::to_bits));
    }

    #[test]
    fn test_answered_counts() {
        let responses = responses_from(&[
            ("R1", Answer::from(5)),
            ("r2", Answer::from(4)),
            ("S1", Answer::from(2)),
            ("nope", Answer::from(2)),
        ]);
        let counts = DimensionScorer::new().answered_counts(&responses);
        assert_eq!(counts, [2, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_answers_deserialize_from_json() {
        let responses: Responses =
            serde_json::from_str(r#"{"R1": 4, "I2": "Strongly Agree", "A3": 2.5}"#).unwrap();
        assert_eq!(responses["R1"], Answer::Numeric(4.0));
        assert_eq!(responses["I2"], Answer::Text("Strongly Agree".to_string()));
    }

    #[test]
    fn test_responses_from_value() {
        let flat = serde_json::json!({"R1": 4, "I1": "Agree", "A1": null, "S1": [1, 2]});
        let responses = responses_from_value(&flat);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses["R1"], Answer::Numeric(4.0));

        let nested = serde_json::json!({"student": "x", "responses": {"C1": 5}});
        assert_eq!(responses_from_value(&nested).len(), 1);
        assert!(responses_from_value(&serde_json::json!("R1")).is_empty());
    }
}
