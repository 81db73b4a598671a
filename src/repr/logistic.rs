//! Logistic regression model data structure.

use ndarray::{Array1, ArrayView1};

use crate::data::Dataset;
use crate::inference;

/// Trained logistic regression weights.
///
/// `weights[0]` multiplies the bias column, so there is no separate intercept:
///
/// ```text
/// p(y = 1 | x) = sigmoid(Σ weights[k] × x[k])
/// ```
///
/// # Example
///
/// ```
/// use parlogit::LogisticModel;
/// use ndarray::array;
///
/// let model = LogisticModel::from_weights(array![0.0, 2.0]);
/// assert_eq!(model.n_features(), 2);
/// assert!(model.predict_row(array![1.0, 1.0].view()) > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    weights: Array1<f64>,
}

impl LogisticModel {
    /// Zero-initialized model with `n_features` weights.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
        }
    }

    /// Wrap an existing weight vector.
    pub fn from_weights(weights: Array1<f64>) -> Self {
        Self { weights }
    }

    /// Number of weights (bias included).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Read-only weight vector.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Weight for one feature column.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    /// Consume the model and return its weights.
    pub fn into_weights(self) -> Array1<f64> {
        self.weights
    }

    /// Probability of class 1 for one feature vector.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n_features()`.
    #[inline]
    pub fn predict_row(&self, x: ArrayView1<'_, f64>) -> f64 {
        inference::predict(x, self.weights.view())
    }

    /// Probability of class 1 for every row of `dataset`.
    ///
    /// # Panics
    ///
    /// Panics if the dataset width differs from the model width.
    pub fn predict_proba(&self, dataset: &Dataset) -> Array1<f64> {
        inference::predict_proba(dataset.features(), self.weights.view())
    }

    /// Largest absolute difference to another model's weights.
    ///
    /// Returns `f64::INFINITY` when the widths differ.
    pub fn max_abs_diff(&self, other: &LogisticModel) -> f64 {
        if self.n_features() != other.n_features() {
            return f64::INFINITY;
        }
        self.weights
            .iter()
            .zip(other.weights.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}
