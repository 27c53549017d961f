//! Single-submission prediction using a fitted model.

use serde::Serialize;

use super::knn::winning_class;
use super::train::FittedModel;
use crate::category::Category;
use crate::error::ModelError;
use crate::questionnaire::FeatureVector;

/// One class's share of the neighbor vote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vote {
    pub label: String,
    /// Normalized vote weight, in [0, 1]
    pub share: f64,
}

/// Result of classifying one feature vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Winning class code
    pub code: usize,
    /// Winning label, decoded
    pub label: String,
    /// Known category for the label, if any
    pub category: Option<Category>,
    /// Vote shares for every class, in class-code order
    pub votes: Vec<Vote>,
}

/// Classifies encoded submissions. Stateless apart from the read-only model,
/// so one instance can serve every request.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: FittedModel,
}

impl Predictor {
    /// Wrap a fitted model. Column order was already checked by name when
    /// the dataset was loaded.
    pub fn new(model: FittedModel) -> Self {
        Predictor { model }
    }

    /// Classify a feature vector.
    ///
    /// # Arguments
    ///
    /// * `features` - Encoded answers to classify
    ///
    /// # Returns
    ///
    /// The winning label with its vote distribution. The same model and
    /// vector always give the same result.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let shares = self.model.classifier().predict_proba(&features.to_f64())?;
        let code = winning_class(&shares);
        let labels = self.model.labels();
        let label = labels.decode(code)?.to_string();

        let votes = shares
            .iter()
            .enumerate()
            .map(|(class, &share)| {
                Ok(Vote {
                    label: labels.decode(class)?.to_string(),
                    share,
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        tracing::debug!(label = %label, code, "classified submission");

        Ok(Prediction {
            code,
            category: Category::from_label(&label),
            label,
            votes,
        })
    }
}
