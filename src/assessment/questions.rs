//! Assessment question bank: six questions per RIASEC dimension

use crate::assessment::dimension::RiasecDimension;
use crate::assessment::dimension::RiasecDimension::{
    Artistic, Conventional, Enterprising, Investigative, Realistic, Social,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestionType {
    /// Five-point Likert scale, 1 = strongly disagree, 5 = strongly agree.
    Agreement,
    /// Five-point bipolar scale between two options, 5 = strongly prefer the first.
    Preference,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: RiasecDimension,
    pub question_type: QuestionType,
    pub text: &'static str,
}

const fn agreement(id: &'static str, dimension: RiasecDimension, text: &'static str) -> Question {
    Question {
        id,
        dimension,
        question_type: QuestionType::Agreement,
        text,
    }
}

const fn preference(id: &'static str, dimension: RiasecDimension, text: &'static str) -> Question {
    Question {
        id,
        dimension,
        question_type: QuestionType::Preference,
        text,
    }
}

pub const QUESTION_COUNT: usize = 36;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    agreement("R1", Realistic, "I enjoy working with tools, machines or equipment."),
    agreement("R2", Realistic, "I like building or repairing things with my hands."),
    preference("R3", Realistic, "Would you rather assemble a model engine or write a short story?"),
    agreement("R4", Realistic, "I prefer practical tasks with visible, concrete results."),
    agreement("R5", Realistic, "I would enjoy working outdoors or in a workshop."),
    preference("R6", Realistic, "Would you rather operate equipment or lead a group discussion?"),
    agreement("I1", Investigative, "I enjoy solving complex puzzles and problems."),
    agreement("I2", Investigative, "I like understanding how and why things work."),
    preference("I3", Investigative, "Would you rather run a science experiment or organize an event?"),
    agreement("I4", Investigative, "I enjoy reading about scientific discoveries."),
    agreement("I5", Investigative, "I like analyzing data to find patterns."),
    preference("I6", Investigative, "Would you rather research a question in depth or sell a product?"),
    agreement("A1", Artistic, "I enjoy drawing, painting, music or other creative activities."),
    agreement("A2", Artistic, "I like expressing my ideas in original ways."),
    preference("A3", Artistic, "Would you rather design a poster or balance a budget?"),
    agreement("A4", Artistic, "I prefer unstructured situations where I can improvise."),
    agreement("A5", Artistic, "I enjoy writing stories, poems or scripts."),
    preference("A6", Artistic, "Would you rather perform on stage or fix a bicycle?"),
    agreement("S1", Social, "I enjoy helping people with their problems."),
    agreement("S2", Social, "I like teaching or explaining things to others."),
    preference("S3", Social, "Would you rather volunteer at a community center or work alone in a lab?"),
    agreement("S4", Social, "I work best as part of a team."),
    agreement("S5", Social, "I care about improving the well-being of others."),
    preference("S6", Social, "Would you rather counsel a friend or repair a computer?"),
    agreement("E1", Enterprising, "I enjoy leading and persuading other people."),
    agreement("E2", Enterprising, "I like taking charge of projects and making decisions."),
    preference("E3", Enterprising, "Would you rather start your own business or follow a set routine?"),
    agreement("E4", Enterprising, "I am comfortable taking risks to reach a goal."),
    agreement("E5", Enterprising, "I enjoy competing and winning."),
    preference("E6", Enterprising, "Would you rather pitch an idea to investors or paint a mural?"),
    agreement("C1", Conventional, "I like following clear procedures and instructions."),
    agreement("C2", Conventional, "I enjoy organizing files, records or data."),
    preference("C3", Conventional, "Would you rather maintain a spreadsheet or brainstorm slogans?"),
    agreement("C4", Conventional, "I pay close attention to details and accuracy."),
    agreement("C5", Conventional, "I prefer structured, predictable work."),
    preference("C6", Conventional, "Would you rather proofread a report or act in a play?"),
];

/// Look up a question by id, ignoring case and surrounding whitespace.
pub fn find_question(id: &str) -> Option<&'static Question> {
    question_index(id).map(|index| &QUESTIONS[index])
}

/// Position of a question in the bank.
pub fn question_index(id: &str) -> Option<usize> {
    let id = id.trim();
    QUESTIONS.iter().position(|q| q.id.eq_ignore_ascii_case(id))
}

pub fn questions_for(dimension: RiasecDimension) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.dimension == dimension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_questions_per_dimension() {
        for dimension in RiasecDimension::ALL {
            assert_eq!(questions_for(dimension).count(), 6, "{}", dimension);
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let ids: HashSet<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_find_question_is_case_insensitive() {
        let question = find_question(" c2 ").unwrap();
        assert_eq!(question.dimension, RiasecDimension::Conventional);
        assert!(find_question("Z9").is_none());
    }
}
