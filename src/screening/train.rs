//! Model training pipeline: seeded split, KNN fit, held-out evaluation.

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;

use super::config::Config;
use super::data::QuestionnaireRecord;
use super::evaluate::{evaluate, ConfusionMatrix};
use super::knn::{KnnClassifier, KnnParams};
use super::labels::LabelEncoder;
use crate::error::ModelError;
use crate::questionnaire::QUESTION_COUNT;

/// Parameters for a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Fraction of records held out for evaluation, in (0, 1)
    pub test_fraction: f64,
    /// Seed for the split shuffle
    pub seed: u64,
    pub knn: KnnParams,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            test_fraction: 0.25,
            seed: 42,
            knn: KnnParams::default(),
        }
    }
}

impl From<&Config> for TrainConfig {
    fn from(config: &Config) -> Self {
        TrainConfig {
            test_fraction: config.data.test_fraction,
            seed: config.data.seed,
            knn: config.knn_params(),
        }
    }
}

/// The classifier together with everything needed to interpret its output.
///
/// Built once by [`train`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FittedModel {
    classifier: KnnClassifier,
    labels: LabelEncoder,
}

impl FittedModel {
    pub fn classifier(&self) -> &KnnClassifier {
        &self.classifier
    }

    pub fn labels(&self) -> &LabelEncoder {
        &self.labels
    }
}

/// Diagnostics from a training run. Informational only.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub train_size: usize,
    pub test_size: usize,
    /// Share of evaluation records classified correctly, in [0, 1]
    pub accuracy: f64,
    /// Labels by class code
    pub classes: Vec<String>,
    /// Records per class code across the whole dataset
    pub class_counts: Vec<usize>,
    pub confusion: ConfusionMatrix,
}

/// Train the screening classifier.
///
/// This function orchestrates the training pipeline:
/// 1. Fit the label encoder on every record
/// 2. Shuffle with a seeded RNG and hold out `ceil(test_fraction * n)` records
/// 3. Fit the KNN classifier on the rest
/// 4. Score the held-out records
///
/// The same records, config and seed always produce the same split and
/// accuracy.
pub fn train(
    records: &[QuestionnaireRecord],
    config: &TrainConfig,
) -> Result<(FittedModel, TrainingReport), ModelError> {
    let fraction = config.test_fraction;
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(ModelError::InvalidConfig(format!(
            "test fraction must be between 0 and 1 (exclusive), got {fraction}"
        )));
    }

    let n = records.len();
    let test_size = held_out_size(n, fraction);
    if test_size == 0 || n - test_size < config.knn.k {
        return Err(ModelError::NotEnoughRecords {
            needed: min_records(fraction, config.knn.k),
            available: n,
        });
    }

    let start = Instant::now();
    let labels = LabelEncoder::fit(records.iter().map(|r| r.label.as_str()));
    let codes: Vec<usize> = records
        .iter()
        .map(|r| labels.encode(&r.label))
        .collect::<Result<_, _>>()?;

    let (train_idx, test_idx) = split_indices(n, test_size, config.seed);

    let classifier = KnnClassifier::fit(
        config.knn,
        feature_matrix(records, &train_idx),
        train_idx.iter().map(|&i| codes[i]).collect(),
        labels.len(),
    )?;

    let test_targets: Vec<usize> = test_idx.iter().map(|&i| codes[i]).collect();
    let confusion = evaluate(
        &classifier,
        &feature_matrix(records, &test_idx),
        &test_targets,
        labels.classes(),
    )?;

    let mut class_counts = vec![0; labels.len()];
    for &code in &codes {
        class_counts[code] += 1;
    }

    let train_size = classifier.n_samples();
    let report = TrainingReport {
        train_size,
        test_size,
        accuracy: confusion.accuracy(),
        classes: labels.classes().to_vec(),
        class_counts,
        confusion,
    };

    tracing::info!(
        train = train_size,
        test = test_size,
        classes = labels.len(),
        k = config.knn.k,
        accuracy = report.accuracy,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "trained KNN classifier"
    );

    let model = FittedModel { classifier, labels };
    Ok((model, report))
}

fn held_out_size(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction).ceil() as usize).min(n)
}

/// Smallest dataset that leaves at least one held-out record and `k`
/// training records.
fn min_records(fraction: f64, k: usize) -> usize {
    (1..)
        .find(|&n| {
            let test = held_out_size(n, fraction);
            test > 0 && n - test >= k
        })
        .unwrap_or(usize::MAX)
}

/// Shuffle `0..n` with a seeded RNG and split off the first `test_size`
/// indices for evaluation. Returns `(train, test)`.
pub fn split_indices(n: usize, test_size: usize, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let train = indices.split_off(test_size.min(n));
    (train, indices)
}

fn feature_matrix(records: &[QuestionnaireRecord], rows: &[usize]) -> Array2<f64> {
    Array2::from_shape_fn((rows.len(), QUESTION_COUNT), |(r, c)| {
        f64::from(records[rows[r]].features[c])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(id: usize, value: u8, label: &str) -> QuestionnaireRecord {
        QuestionnaireRecord {
            id: id.to_string(),
            features: [value; QUESTION_COUNT],
            label: label.to_string(),
        }
    }

    fn dataset() -> Vec<QuestionnaireRecord> {
        (0..40)
            .map(|i| {
                let value = (i % 5) as u8 + 1;
                let label = match value {
                    1 => "No depression",
                    2 => "Mild",
                    3 | 4 => "Moderate",
                    _ => "Severe",
                };
                record(i, value, label)
            })
            .collect()
    }

    #[test]
    fn test_split_is_seeded_and_disjoint() {
        let (train_a, test_a) = split_indices(10, 3, 7);
        let (train_b, test_b) = split_indices(10, 3, 7);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
        assert_eq!(test_a.len(), 3);
        assert_eq!(train_a.len(), 7);

        let all: HashSet<usize> = train_a.iter().chain(test_a.iter()).copied().collect();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_split_sizes_round_test_partition_up() {
        let records: Vec<_> = (0..10).map(|i| record(i, 1, "Mild")).collect();
        let (_, report) = train(&records, &TrainConfig::default()).unwrap();
        assert_eq!(report.test_size, 3);
        assert_eq!(report.train_size, 7);
    }

    #[test]
    fn test_accuracy_is_bounded_and_reproducible() {
        let records = dataset();
        let config = TrainConfig::default();
        let (_, first) = train(&records, &config).unwrap();
        let (_, second) = train(&records, &config).unwrap();
        assert!((0.0..=1.0).contains(&first.accuracy));
        assert_eq!(first.accuracy, second.accuracy);
        assert_eq!(first.confusion, second.confusion);
        // Every value appears eight times and only ten rows are held out, so
        // each held-out row has an exact twin in the training partition.
        assert_eq!(first.accuracy, 1.0);
    }

    #[test]
    fn test_report_counts_every_record() {
        let (model, report) = train(&dataset(), &TrainConfig::default()).unwrap();
        assert_eq!(report.class_counts.iter().sum::<usize>(), 40);
        assert_eq!(report.classes, model.labels().classes());
        assert_eq!(report.confusion.total(), report.test_size);
        assert_eq!(model.classifier().n_samples(), report.train_size);
        assert_eq!(report.train_size + report.test_size, 40);
    }

    #[test]
    fn test_rejects_bad_fraction_and_tiny_datasets() {
        let records = dataset();
        let config = TrainConfig {
            test_fraction: 0.0,
            ..TrainConfig::default()
        };
        assert!(matches!(
            train(&records, &config).unwrap_err(),
            ModelError::InvalidConfig(_)
        ));

        let tiny = vec![record(0, 1, "Mild"), record(1, 5, "Severe")];
        assert!(matches!(
            train(&tiny, &TrainConfig::default()).unwrap_err(),
            ModelError::NotEnoughRecords { .. }
        ));
        assert!(train(&[], &TrainConfig::default()).is_err());
    }

    #[test]
    fn test_not_enough_records_reports_the_real_minimum() {
        // Half held out with k = 3 needs six records: ceil(0.5 * 5) = 3 leaves two.
        let records: Vec<_> = (0..5).map(|i| record(i, 1, "Mild")).collect();
        let config = TrainConfig {
            test_fraction: 0.5,
            knn: KnnParams {
                k: 3,
                ..KnnParams::default()
            },
            ..TrainConfig::default()
        };
        assert_eq!(
            train(&records, &config).unwrap_err(),
            ModelError::NotEnoughRecords {
                needed: 6,
                available: 5
            }
        );

        let six: Vec<_> = (0..6).map(|i| record(i, 1, "Mild")).collect();
        let (_, report) = train(&six, &config).unwrap();
        assert_eq!(report.train_size, 3);
    }

    #[test]
    fn test_minimum_for_default_split() {
        // Default split holds out a quarter and needs two neighbors.
        assert_eq!(min_records(0.25, 2), 3);
        assert_eq!(min_records(0.5, 1), 2);
    }
}
