//! Questionnaire screening pipeline.
//!
//! This module implements the depression level screener:
//!
//! - **Dataset loading** from a CSV file of prior questionnaire responses
//! - **Label encoding** between category strings and class codes
//! - **Distance-weighted k-nearest-neighbors** classification
//! - **Answer encoding** from form responses to feature vectors
//!
//! ## Pipeline
//!
//! At startup the dataset is loaded, the label encoder is fitted, the records
//! are split into training and evaluation partitions with a seeded shuffle,
//! and the classifier is fitted on the training partition. The held-out
//! accuracy is reported for information only.
//!
//! Per submission:
//!
//! ```text
//! answers ──► AnswerEncoder ──► FeatureVector ──► Predictor ──► label ──► Category text
//! ```
//!
//! ## Configuration
//!
//! Create a `config.toml` file to customize the run:
//!
//! ```toml
//! [data]
//! csv_path = "data/Deepression.csv"
//! test_fraction = 0.25
//! seed = 42
//!
//! [model]
//! n_neighbors = 2
//! weights = "distance"   # or "uniform"
//! metric = "euclidean"   # or "manhattan"
//!
//! [display]
//! locale = "en"          # or "id"
//! ```
//!
//! ## Module Structure
//!
//! - [`config`] - Configuration structures and loading
//! - [`data`] - Dataset records and CSV loading
//! - [`labels`] - Label encoder
//! - [`knn`] - Nearest-neighbor classifier
//! - [`train`] - Training pipeline
//! - [`evaluate`] - Held-out evaluation and report formatting
//! - [`encode`] - Form answers to feature vectors
//! - [`predict`] - Single submission prediction
//! - `cli` - Command-line interface (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod encode;
pub mod evaluate;
pub mod knn;
pub mod labels;
pub mod predict;
pub mod train;

pub use config::Config;
pub use data::{load_records, QuestionnaireRecord};
pub use encode::AnswerEncoder;
pub use predict::{Prediction, Predictor, Vote};
pub use train::{train, FittedModel, TrainConfig, TrainingReport};
