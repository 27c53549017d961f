//! Held-out evaluation and results reporting.

use ndarray::Array2;
use serde::Serialize;
use std::fmt::Write;

use super::knn::KnnClassifier;
use super::train::TrainingReport;
use crate::error::ModelError;

/// Counts of (actual, predicted) class pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    classes: Vec<String>,
    /// `counts[actual][predicted]`
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn new(classes: Vec<String>) -> Self {
        let n = classes.len();
        ConfusionMatrix {
            classes,
            counts: vec![vec![0; n]; n],
        }
    }

    pub fn record(&mut self, actual: usize, predicted: usize) {
        self.counts[actual][predicted] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        (0..self.classes.len()).map(|c| self.counts[c][c]).sum()
    }

    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct() as f64 / total as f64,
        }
    }

    /// Share of records of `class` that were predicted as `class`.
    pub fn recall(&self, class: usize) -> Option<f64> {
        let support: usize = self.counts[class].iter().sum();
        (support > 0).then(|| self.counts[class][class] as f64 / support as f64)
    }
}

/// Predict every evaluation row and tally the outcome.
pub fn evaluate(
    classifier: &KnnClassifier,
    samples: &Array2<f64>,
    targets: &[usize],
    classes: &[String],
) -> Result<ConfusionMatrix, ModelError> {
    let predictions = classifier.predict_batch(samples)?;
    let mut matrix = ConfusionMatrix::new(classes.to_vec());
    for (&actual, &predicted) in targets.iter().zip(predictions.iter()) {
        matrix.record(actual, predicted);
    }
    Ok(matrix)
}

/// Format a training report as a text table.
pub fn render_report(report: &TrainingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Train: {} | Test: {}\n", report.train_size, report.test_size);

    let _ = writeln!(out, "+----------------------+---------+----------+");
    let _ = writeln!(out, "| Level                | Records | Recall   |");
    let _ = writeln!(out, "+----------------------+---------+----------+");
    for (code, class) in report.classes.iter().enumerate() {
        let recall = report
            .confusion
            .recall(code)
            .map(|r| format!("{:>6.2}%", r * 100.0))
            .unwrap_or_else(|| "    n/a".to_string());
        let _ = writeln!(
            out,
            "| {:<20} | {:>7} | {:>8} |",
            class, report.class_counts[code], recall
        );
    }
    let _ = writeln!(out, "+----------------------+---------+----------+\n");
    let _ = writeln!(out, "Held-out accuracy: {:.2}%", report.accuracy * 100.0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_matrix() {
        let mut m = ConfusionMatrix::new(vec!["Mild".into(), "Severe".into()]);
        m.record(0, 0);
        m.record(0, 1);
        m.record(1, 1);
        m.record(1, 1);
        assert_eq!(m.total(), 4);
        assert_eq!(m.correct(), 3);
        assert_eq!(m.accuracy(), 0.75);
        assert_eq!(m.recall(0), Some(0.5));
        assert_eq!(m.recall(1), Some(1.0));
    }

    #[test]
    fn test_recall_without_support() {
        let m = ConfusionMatrix::new(vec!["Mild".into()]);
        assert_eq!(m.recall(0), None);
        assert_eq!(m.accuracy(), 0.0);
    }
}
