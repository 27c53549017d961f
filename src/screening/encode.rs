//! Questionnaire responses to feature vectors.

use std::collections::HashMap;

use crate::error::IncompleteInputError;
use crate::locale::Locale;
use crate::questionnaire::{find_question, Answer, FeatureVector, QUESTIONS, QUESTION_COUNT};

/// Turns a submitted form into the classifier's input.
///
/// Submissions are all-or-nothing: a missing, blank or unrecognized answer
/// rejects the whole form rather than being imputed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerEncoder {
    locale: Locale,
}

impl AnswerEncoder {
    pub fn new(locale: Locale) -> Self {
        AnswerEncoder { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Encode a map of question id to answer text.
    ///
    /// Keys that are not questionnaire ids are ignored.
    pub fn encode(
        &self,
        responses: &HashMap<String, String>,
    ) -> Result<FeatureVector, IncompleteInputError> {
        for key in responses.keys() {
            if find_question(key).is_none() {
                tracing::warn!(question = %key, "ignoring answer for unknown question");
            }
        }

        let mut weights = [0u8; QUESTION_COUNT];
        let mut missing = Vec::new();
        let mut unrecognized = Vec::new();

        for (slot, question) in weights.iter_mut().zip(QUESTIONS.iter()) {
            let answer = responses.get(question.id).map(|a| a.trim()).unwrap_or("");
            if answer.is_empty() {
                missing.push(question.id);
                continue;
            }
            match Answer::parse(answer, self.locale) {
                Some(choice) => *slot = choice.weight(),
                None => unrecognized.push((question.id.to_string(), answer.to_string())),
            }
        }

        if missing.is_empty() && unrecognized.is_empty() {
            Ok(FeatureVector::new(weights))
        } else {
            tracing::debug!(
                missing = missing.len(),
                unrecognized = unrecognized.len(),
                "rejected incomplete submission"
            );
            Err(IncompleteInputError {
                missing,
                unrecognized,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(answer: &str) -> HashMap<String, String> {
        QUESTIONS
            .iter()
            .map(|q| (q.id.to_string(), answer.to_string()))
            .collect()
    }

    #[test]
    fn test_boundary_answers() {
        let encoder = AnswerEncoder::new(Locale::English);
        assert_eq!(
            encoder.encode(&all("Always")).unwrap().weights(),
            &[5; QUESTION_COUNT]
        );
        assert_eq!(
            encoder.encode(&all("Never")).unwrap().weights(),
            &[1; QUESTION_COUNT]
        );
    }

    #[test]
    fn test_weights_follow_question_order() {
        let mut responses = all("Sometimes");
        responses.insert("sleep_quality".into(), "Rarely".into());
        responses.insert("energy_levels".into(), "Often".into());
        let weights = *AnswerEncoder::default().encode(&responses).unwrap().weights();
        assert_eq!(weights[0], 2);
        assert_eq!(weights[QUESTION_COUNT - 1], 4);
        assert!(weights[1..QUESTION_COUNT - 1].iter().all(|&w| w == 3));
    }

    #[test]
    fn test_missing_and_blank_answers_are_listed() {
        let mut responses = all("Often");
        responses.remove("appetite");
        responses.insert("hopelessness".into(), "   ".into());

        let err = AnswerEncoder::default().encode(&responses).unwrap_err();
        assert_eq!(err.missing, vec!["appetite", "hopelessness"]);
        assert!(err.unrecognized.is_empty());
    }

    #[test]
    fn test_unrecognized_answer_is_rejected() {
        let mut responses = all("Often");
        responses.insert("aggression".into(), "Sometimes?".into());

        let err = AnswerEncoder::default().encode(&responses).unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(
            err.unrecognized,
            vec![("aggression".to_string(), "Sometimes?".to_string())]
        );
    }

    #[test]
    fn test_empty_submission_lists_every_question() {
        let err = AnswerEncoder::default().encode(&HashMap::new()).unwrap_err();
        assert_eq!(err.missing.len(), QUESTION_COUNT);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut responses = all("Rarely");
        responses.insert("favourite_colour".into(), "blue".into());
        assert!(AnswerEncoder::default().encode(&responses).is_ok());
    }

    #[test]
    fn test_indonesian_spellings() {
        let encoder = AnswerEncoder::new(Locale::Indonesian);
        assert_eq!(
            encoder.encode(&all("Selalu")).unwrap(),
            FeatureVector::uniform(Answer::Always)
        );
        assert!(encoder.encode(&all("Always")).is_err());
    }
}
