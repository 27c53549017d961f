//! High-level API for questionnaire screening
//!
//! [`Screener`] bundles the whole pipeline: it loads the dataset, trains the
//! classifier once, and then scores any number of submissions.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use moodscan::api::Screener;
//! use moodscan::screening::Config;
//!
//! let config = Config::load_or_default("config.toml")?;
//! let screener = Screener::from_config(&config)?;
//!
//! let mut answers = HashMap::new();
//! for question in moodscan::QUESTIONS {
//!     answers.insert(question.id.to_string(), "Sometimes".to_string());
//! }
//! let assessment = screener.assess(&answers)?;
//! println!("{}", assessment.level);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Incomplete submissions
//!
//! A form with any unanswered question is rejected with
//! [`ScreenError::Incomplete`], which lists the questions to ask again.
//! Nothing is scored until every question has a recognized answer.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::category::Category;
use crate::error::ScreenError;
use crate::locale::Locale;
use crate::questionnaire::FeatureVector;
use crate::screening::{
    load_records, train, AnswerEncoder, Config, Predictor, QuestionnaireRecord, TrainConfig,
    TrainingReport, Vote,
};

/// Trained screening pipeline.
///
/// Immutable after construction; share it by reference across requests.
#[derive(Debug, Clone)]
pub struct Screener {
    predictor: Predictor,
    encoder: AnswerEncoder,
    report: TrainingReport,
}

/// Outcome of screening one submission, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Predicted label as it appears in the dataset (e.g. "Moderate")
    pub level: String,
    /// Label in the respondent's language
    pub display_name: String,
    pub category: Option<Category>,
    pub description: String,
    pub recommendation: Option<String>,
    /// Standing advice to seek professional help
    pub notice: String,
    pub features: FeatureVector,
    pub votes: Vec<Vote>,
}

impl Screener {
    /// Load the configured dataset and train.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The dataset is missing or malformed
    /// - The dataset is too small for the requested split and neighbor count
    pub fn from_config(config: &Config) -> Result<Self, ScreenError> {
        config.validate()?;
        let records = load_records(&config.data.csv_path)?;
        Self::from_records(&records, &TrainConfig::from(config), config.display.locale)
    }

    /// Train on records that are already in memory.
    pub fn from_records(
        records: &[QuestionnaireRecord],
        train_config: &TrainConfig,
        locale: Locale,
    ) -> Result<Self, ScreenError> {
        let (model, report) = train(records, train_config)?;
        Ok(Screener {
            predictor: Predictor::new(model),
            encoder: AnswerEncoder::new(locale),
            report,
        })
    }

    /// Switch the language used for answers and result text.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.encoder = AnswerEncoder::new(locale);
        self
    }

    pub fn locale(&self) -> Locale {
        self.encoder.locale()
    }

    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// Score a submitted form (question id to answer text).
    pub fn assess(&self, responses: &HashMap<String, String>) -> Result<Assessment, ScreenError> {
        let features = self.encoder.encode(responses)?;
        self.assess_features(&features)
    }

    /// Score an already encoded submission.
    pub fn assess_features(&self, features: &FeatureVector) -> Result<Assessment, ScreenError> {
        let prediction = self.predictor.predict(features)?;
        let locale = self.locale();

        let (display_name, description, recommendation) = match prediction.category {
            Some(category) => (
                category.display_name(locale).to_string(),
                category.description(locale).to_string(),
                Some(category.recommendation(locale).to_string()),
            ),
            None => (
                prediction.label.clone(),
                locale.description_unavailable().to_string(),
                None,
            ),
        };

        Ok(Assessment {
            level: prediction.label,
            display_name,
            category: prediction.category,
            description,
            recommendation,
            notice: locale.help_notice().to_string(),
            features: *features,
            votes: prediction.votes,
        })
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Depression Level: {}", self.display_name)?;
        writeln!(f, "Description: {}", self.description)?;
        if let Some(recommendation) = &self.recommendation {
            writeln!(f, "Recommendation: {}", recommendation)?;
        }
        writeln!(f, "\nNeighbor vote:")?;
        for vote in &self.votes {
            writeln!(f, "  {:<16} {:>6.2}%", vote.label, vote.share * 100.0)?;
        }
        writeln!(f, "\n{}", self.notice)?;
        Ok(())
    }
}
