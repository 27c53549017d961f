use serde::Serialize;
use thiserror::Error;

/// The training dataset could not be read. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value '{value}' (expected an integer from 0 to 5)")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: empty category label")]
    EmptyLabel { row: usize },

    #[error("dataset contains no records")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A class code that the label encoder never assigned.
    #[error("unknown label code {0}")]
    UnknownCode(usize),

    #[error("unknown label '{0}'")]
    UnknownLabel(String),

    #[error("not enough records: need at least {needed}, got {available}")]
    NotEnoughRecords { needed: usize, available: usize },

    #[error("feature width mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid training parameters: {0}")]
    InvalidConfig(String),
}

/// A submission that cannot be scored until the respondent completes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error(
    "incomplete submission: {} unanswered, {} unrecognized",
    .missing.len(),
    .unrecognized.len()
)]
pub struct IncompleteInputError {
    /// Question ids with no answer, or a blank one.
    pub missing: Vec<&'static str>,
    /// `(question id, submitted answer)` pairs outside the answer scale.
    pub unrecognized: Vec<(String, String)>,
}

impl IncompleteInputError {
    /// Every question id the respondent has to answer again, in form order.
    pub fn questions_to_reprompt(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.missing.to_vec();
        ids.extend(self.unrecognized.iter().map(|(id, _)| id.as_str()));
        let order = |id: &str| {
            crate::questionnaire::find_question(id)
                .map(|(idx, _)| idx)
                .unwrap_or(usize::MAX)
        };
        ids.sort_by_key(|&id| order(id));
        ids
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Incomplete(#[from] IncompleteInputError),
}
