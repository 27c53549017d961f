//! Mapping between category labels and dense class codes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ModelError;

/// Assigns each distinct label a code by lexicographic order.
///
/// The codes are the class indices used by the classifier, so the same
/// encoder must be used to decode predictions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Collect the distinct labels, sorted.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        LabelEncoder {
            classes: classes.into_iter().collect(),
        }
    }

    pub fn encode(&self, label: &str) -> Result<usize, ModelError> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .map_err(|_| ModelError::UnknownLabel(label.to_string()))
    }

    pub fn decode(&self, code: usize) -> Result<&str, ModelError> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(ModelError::UnknownCode(code))
    }

    /// Known labels, indexed by code.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_lexicographic_order() {
        let encoder = LabelEncoder::fit(["Severe", "Mild", "No depression", "Mild", "Moderate"]);
        assert_eq!(
            encoder.classes(),
            &["Mild", "Moderate", "No depression", "Severe"]
        );
        assert_eq!(encoder.encode("Mild").unwrap(), 0);
        assert_eq!(encoder.encode("Severe").unwrap(), 3);
    }

    #[test]
    fn test_round_trip_for_every_label() {
        let labels = ["No depression", "Severe", "Moderate", "Mild"];
        let encoder = LabelEncoder::fit(labels);
        for label in labels {
            let code = encoder.encode(label).unwrap();
            assert_eq!(encoder.decode(code).unwrap(), label);
        }
    }

    #[test]
    fn test_unknown_code_and_label() {
        let encoder = LabelEncoder::fit(["Mild", "Severe"]);
        assert_eq!(encoder.decode(2), Err(ModelError::UnknownCode(2)));
        assert_eq!(
            encoder.encode("Moderate"),
            Err(ModelError::UnknownLabel("Moderate".to_string()))
        );
        assert_eq!(encoder.len(), 2);
    }
}
