//! The fixed 14-item questionnaire and its answer scale.
//!
//! [`QUESTIONS`] is the canonical feature order. The dataset loader reads
//! columns in this order and the answer encoder emits weights in this order,
//! so a fitted model and an encoded submission always line up.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Number of questionnaire items, and the width of every feature vector.
pub const QUESTION_COUNT: usize = 14;

/// Largest ordinal value a dataset cell may hold.
pub const MAX_FEATURE_VALUE: u8 = 5;

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier used when submitting answers (e.g. "sleep_quality").
    pub id: &'static str,
    /// Column header in the training dataset.
    pub column: &'static str,
    /// Short English topic, used to build prompts.
    pub topic: &'static str,
}

const fn question(id: &'static str, column: &'static str, topic: &'static str) -> Question {
    Question { id, column, topic }
}

/// All questions in feature order.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    question("sleep_quality", "Sleep", "sleep quality"),
    question("appetite", "Appetite", "appetite"),
    question("interest_in_activities", "Interest", "interest in activities"),
    question("fatigue_levels", "Fatigue", "fatigue levels"),
    question("self_worth", "Worthlessness", "self-worth"),
    question("concentration", "Concentration", "concentration"),
    question("irritability", "Agitation", "irritability"),
    question("self_harm_thoughts", "Suicidal Ideation", "self-harm thoughts"),
    question("sleep_disturbances", "Sleep Disturbance", "sleep disturbances"),
    question("aggression", "Aggression", "aggression"),
    question("panic_attacks", "Panic Attacks", "panic attacks"),
    question("hopelessness", "Hopelessness", "hopelessness"),
    question("restlessness", "Restlessness", "restlessness"),
    question("energy_levels", "Low Energy", "energy levels"),
];

/// Look up a question by id, returning its position in feature order.
pub fn find_question(id: &str) -> Option<(usize, &'static Question)> {
    QUESTIONS.iter().enumerate().find(|(_, q)| q.id == id)
}

/// How often the respondent experienced the symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl Answer {
    /// Every answer choice, lowest weight first.
    pub const ALL: [Answer; 5] = [
        Answer::Never,
        Answer::Rarely,
        Answer::Sometimes,
        Answer::Often,
        Answer::Always,
    ];

    /// Severity weight fed to the classifier (1..=5).
    pub fn weight(self) -> u8 {
        match self {
            Answer::Never => 1,
            Answer::Rarely => 2,
            Answer::Sometimes => 3,
            Answer::Often => 4,
            Answer::Always => 5,
        }
    }

    /// Match a submitted answer against the locale's spellings.
    ///
    /// Surrounding whitespace and ASCII case are ignored. Blank input is
    /// never an answer.
    pub fn parse(input: &str, locale: Locale) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|answer| locale.answer_label(*answer).eq_ignore_ascii_case(input))
    }
}

/// Encoded answers, one weight per question in [`QUESTIONS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector([u8; QUESTION_COUNT]);

impl FeatureVector {
    pub fn new(weights: [u8; QUESTION_COUNT]) -> Self {
        FeatureVector(weights)
    }

    /// A vector where every question got the same answer.
    #[cfg(test)]
    pub(crate) fn uniform(answer: Answer) -> Self {
        FeatureVector([answer.weight(); QUESTION_COUNT])
    }

    pub fn weights(&self) -> &[u8; QUESTION_COUNT] {
        &self.0
    }

    /// Weights widened to `f64` for distance computations.
    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&w| f64::from(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_and_columns_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        let columns: HashSet<_> = QUESTIONS.iter().map(|q| q.column).collect();
        assert_eq!(ids.len(), QUESTION_COUNT);
        assert_eq!(columns.len(), QUESTION_COUNT);
    }

    #[test]
    fn test_find_question_reports_position() {
        let (idx, q) = find_question("panic_attacks").unwrap();
        assert_eq!(idx, 10);
        assert_eq!(q.column, "Panic Attacks");
        assert!(find_question("mood").is_none());
    }

    #[test]
    fn test_answer_weights_are_ordinal() {
        let weights: Vec<u8> = Answer::ALL.iter().map(|a| a.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(Answer::parse("  often ", Locale::English), Some(Answer::Often));
        assert_eq!(Answer::parse("ALWAYS", Locale::English), Some(Answer::Always));
        assert_eq!(Answer::parse("", Locale::English), None);
        assert_eq!(Answer::parse("   ", Locale::English), None);
        assert_eq!(Answer::parse("Sometimes", Locale::Indonesian), None);
        assert_eq!(
            Answer::parse("kadang-kadang", Locale::Indonesian),
            Some(Answer::Sometimes)
        );
    }

    #[test]
    fn test_uniform_vector() {
        assert_eq!(FeatureVector::uniform(Answer::Always).weights(), &[5; QUESTION_COUNT]);
        assert_eq!(FeatureVector::uniform(Answer::Never).to_f64(), vec![1.0; QUESTION_COUNT]);
    }
}
