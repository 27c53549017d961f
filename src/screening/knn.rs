//! k-nearest-neighbors classifier over dense feature rows.
//!
//! Neighbors are the `k` training rows closest to the query, ordered by
//! `(distance, training row index)`. Rows at equal distance therefore resolve
//! toward the one that came first in the training partition, and the result
//! never depends on sort stability or hash order.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How neighbor votes are weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Every neighbor counts once.
    Uniform,
    /// Each neighbor counts `1 / distance`. Exact matches outvote everything.
    #[default]
    Distance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
}

impl Metric {
    pub fn distance(self, a: ArrayView1<'_, f64>, b: &[f64]) -> f64 {
        let pairs = a.iter().zip(b.iter());
        match self {
            Metric::Euclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt(),
            Metric::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
        }
    }
}

/// Classifier hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnnParams {
    pub k: usize,
    pub weighting: Weighting,
    pub metric: Metric,
}

impl Default for KnnParams {
    fn default() -> Self {
        KnnParams {
            k: 2,
            weighting: Weighting::Distance,
            metric: Metric::Euclidean,
        }
    }
}

/// A training row selected as a neighbor of a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Row index in the training matrix
    pub index: usize,
    /// Class code of that row
    pub class: usize,
    pub distance: f64,
}

/// Fitted classifier. Holds the training rows verbatim and is never mutated
/// after [`KnnClassifier::fit`].
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    params: KnnParams,
    samples: Array2<f64>,
    targets: Vec<usize>,
    n_classes: usize,
}

impl KnnClassifier {
    /// Fit on `samples` (one row per record) and their class codes.
    ///
    /// Every target must be below `n_classes`.
    pub fn fit(
        params: KnnParams,
        samples: Array2<f64>,
        targets: Vec<usize>,
        n_classes: usize,
    ) -> Result<Self, ModelError> {
        if params.k == 0 {
            return Err(ModelError::InvalidConfig(
                "k must be at least 1".to_string(),
            ));
        }
        if samples.nrows() != targets.len() {
            return Err(ModelError::DimensionMismatch {
                expected: samples.nrows(),
                actual: targets.len(),
            });
        }
        if samples.nrows() < params.k {
            return Err(ModelError::NotEnoughRecords {
                needed: params.k,
                available: samples.nrows(),
            });
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            return Err(ModelError::UnknownCode(bad));
        }

        Ok(KnnClassifier {
            params,
            samples,
            targets,
            n_classes,
        })
    }

    pub fn n_features(&self) -> usize {
        self.samples.ncols()
    }

    pub fn n_samples(&self) -> usize {
        self.samples.nrows()
    }

    /// The `k` nearest training rows, closest first.
    pub fn neighbors(&self, query: &[f64]) -> Result<Vec<Neighbor>, ModelError> {
        if query.len() != self.n_features() {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_features(),
                actual: query.len(),
            });
        }

        let mut all: Vec<Neighbor> = self
            .samples
            .outer_iter()
            .zip(self.targets.iter())
            .enumerate()
            .map(|(index, (row, &class))| Neighbor {
                index,
                class,
                distance: self.params.metric.distance(row, query),
            })
            .collect();

        all.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.index.cmp(&b.index))
        });
        all.truncate(self.params.k);
        Ok(all)
    }

    /// Vote share per class code. Shares sum to 1.
    pub fn predict_proba(&self, query: &[f64]) -> Result<Vec<f64>, ModelError> {
        let neighbors = self.neighbors(query)?;
        let weights = self.params.weighting.weights(&neighbors);

        let mut votes = vec![0.0; self.n_classes];
        for (neighbor, weight) in neighbors.iter().zip(weights) {
            votes[neighbor.class] += weight;
        }

        let total: f64 = votes.iter().sum();
        if total > 0.0 {
            for vote in &mut votes {
                *vote /= total;
            }
        }
        Ok(votes)
    }

    pub fn predict(&self, query: &[f64]) -> Result<usize, ModelError> {
        let votes = self.predict_proba(query)?;
        Ok(winning_class(&votes))
    }

    /// Predict every row of `samples`.
    pub fn predict_batch(&self, samples: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        samples
            .outer_iter()
            .map(|row| self.predict(&row.to_vec()))
            .collect()
    }
}

impl Weighting {
    fn weights(self, neighbors: &[Neighbor]) -> Vec<f64> {
        match self {
            Weighting::Uniform => vec![1.0; neighbors.len()],
            Weighting::Distance => {
                // 1/0 is undefined; exact matches take the whole vote.
                if neighbors.iter().any(|n| n.distance == 0.0) {
                    neighbors
                        .iter()
                        .map(|n| if n.distance == 0.0 { 1.0 } else { 0.0 })
                        .collect()
                } else {
                    neighbors.iter().map(|n| 1.0 / n.distance).collect()
                }
            }
        }
    }
}

/// Class with the largest vote. Equal votes go to the lowest class code.
pub fn winning_class(votes: &[f64]) -> usize {
    let mut best = 0;
    for (class, &vote) in votes.iter().enumerate() {
        if vote > votes[best] {
            best = class;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn params(k: usize, weighting: Weighting) -> KnnParams {
        KnnParams {
            k,
            weighting,
            metric: Metric::Euclidean,
        }
    }

    #[test]
    fn test_metrics() {
        let a = array![0.0, 0.0];
        assert_eq!(Metric::Euclidean.distance(a.view(), &[3.0, 4.0]), 5.0);
        assert_eq!(Metric::Manhattan.distance(a.view(), &[3.0, -4.0]), 7.0);
    }

    #[test]
    fn test_closer_neighbor_dominates_distance_vote() {
        let samples = array![[0.0], [3.0], [10.0]];
        let knn = KnnClassifier::fit(params(2, Weighting::Distance), samples, vec![0, 1, 1], 2)
            .unwrap();

        // Distances 1 and 2: weights 1 and 0.5.
        let votes = knn.predict_proba(&[1.0]).unwrap();
        assert!((votes[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((votes[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(knn.predict(&[1.0]).unwrap(), 0);
    }

    #[test]
    fn test_exact_match_takes_the_whole_vote() {
        let samples = array![[2.0, 2.0], [2.0, 3.0]];
        let knn = KnnClassifier::fit(params(2, Weighting::Distance), samples, vec![1, 0], 2)
            .unwrap();
        assert_eq!(knn.predict_proba(&[2.0, 2.0]).unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_equal_distances_break_toward_earlier_row() {
        let samples = array![[0.0], [2.0], [2.0]];
        let knn = KnnClassifier::fit(params(1, Weighting::Uniform), samples, vec![0, 1, 0], 2)
            .unwrap();
        let neighbors = knn.neighbors(&[1.0]).unwrap();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].index, 0);

        let neighbors = knn.neighbors(&[2.0]).unwrap();
        assert_eq!(neighbors[0].index, 1);
    }

    #[test]
    fn test_tied_votes_go_to_lowest_code() {
        assert_eq!(winning_class(&[0.5, 0.5]), 0);
        assert_eq!(winning_class(&[0.2, 0.4, 0.4]), 1);

        let samples = array![[0.0], [2.0]];
        let knn = KnnClassifier::fit(params(2, Weighting::Uniform), samples, vec![1, 0], 2)
            .unwrap();
        assert_eq!(knn.predict(&[1.0]).unwrap(), 0);
    }

    #[test]
    fn test_fit_validation() {
        let err = KnnClassifier::fit(params(3, Weighting::Distance), array![[0.0], [1.0]], vec![0, 1], 2)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::NotEnoughRecords {
                needed: 3,
                available: 2
            }
        );

        let err = KnnClassifier::fit(params(1, Weighting::Distance), array![[0.0]], vec![0, 1], 2)
            .unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));

        let err = KnnClassifier::fit(params(1, Weighting::Distance), array![[0.0]], vec![4], 2)
            .unwrap_err();
        assert_eq!(err, ModelError::UnknownCode(4));

        let err = KnnClassifier::fit(params(0, Weighting::Distance), array![[0.0]], vec![0], 1)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_query_width_is_checked() {
        let knn = KnnClassifier::fit(params(1, Weighting::Distance), array![[0.0, 1.0]], vec![0], 1)
            .unwrap();
        assert_eq!(
            knn.predict(&[1.0]).unwrap_err(),
            ModelError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
