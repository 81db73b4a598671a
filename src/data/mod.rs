//! Labeled datasets for logistic regression.
//!
//! A [`Dataset`] pairs a row-major feature matrix with a binary label vector.
//!
//! # Layout
//!
//! ```text
//! features: [n_samples, n_features]   column 0 is the bias term (always 1.0)
//! labels:   [n_samples]               0.0 or 1.0, aligned with feature rows
//! ```
//!
//! Both arrays are validated once at construction and are immutable afterwards,
//! so trainers can share a `&Dataset` across worker threads without locking.
//!
//! Feature scaling lives in [`scaling`]; deterministic train/test splits in
//! [`split_indices`] and [`Dataset::split`].

pub mod scaling;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};
use rand::prelude::*;

pub use scaling::MinMaxScaler;

/// Index of the constant bias column.
pub const BIAS_COLUMN: usize = 0;

// =============================================================================
// DatasetError
// =============================================================================

/// Errors raised while building or reshaping a [`Dataset`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset has no samples")]
    Empty,

    #[error("dataset has no feature columns")]
    NoFeatures,

    #[error("label count {labels} does not match sample count {samples}")]
    LabelCountMismatch { samples: usize, labels: usize },

    #[error("label at row {row} must be 0.0 or 1.0, got {value}")]
    NonBinaryLabel { row: usize, value: f64 },

    #[error("bias column must be 1.0, row {row} has {value}")]
    MissingBias { row: usize, value: f64 },

    #[error("non-finite feature at row {row}, column {column}")]
    NonFiniteFeature { row: usize, column: usize },

    #[error("expected {expected} feature columns, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("row index {index} out of bounds for {n_samples} samples")]
    IndexOutOfBounds { index: usize, n_samples: usize },

    #[error("test fraction must be in [0, 1), got {0}")]
    InvalidSplitFraction(f64),
}

// =============================================================================
// Dataset
// =============================================================================

/// Feature matrix with a leading bias column plus aligned binary labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Build a dataset from a feature matrix that already carries the bias column.
    ///
    /// # Errors
    ///
    /// Fails if the dataset is empty, labels are misaligned or not in `{0, 1}`,
    /// column 0 is not all ones, or any feature is NaN/infinite.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self, DatasetError> {
        let (n_samples, n_features) = features.dim();
        if n_samples == 0 {
            return Err(DatasetError::Empty);
        }
        if n_features == 0 {
            return Err(DatasetError::NoFeatures);
        }
        if labels.len() != n_samples {
            return Err(DatasetError::LabelCountMismatch {
                samples: n_samples,
                labels: labels.len(),
            });
        }

        for (row, &value) in labels.iter().enumerate() {
            if value != 0.0 && value != 1.0 {
                return Err(DatasetError::NonBinaryLabel { row, value });
            }
        }

        for (row, x) in features.outer_iter().enumerate() {
            if x[BIAS_COLUMN] != 1.0 {
                return Err(DatasetError::MissingBias {
                    row,
                    value: x[BIAS_COLUMN],
                });
            }
            if let Some(column) = x.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFiniteFeature { row, column });
            }
        }

        Ok(Self { features, labels })
    }

    /// Build a dataset from raw features, prepending the bias column.
    ///
    /// `raw` has shape `[n_samples, n_raw_features]`; the result has
    /// `n_raw_features + 1` columns.
    pub fn with_bias(raw: ArrayView2<'_, f64>, labels: Array1<f64>) -> Result<Self, DatasetError> {
        let (n_samples, n_raw) = raw.dim();
        let mut features = Array2::ones((n_samples, n_raw + 1));
        features.slice_mut(s![.., 1..]).assign(&raw);
        Self::new(features, labels)
    }

    /// Skips validation; callers guarantee the invariants of [`Dataset::new`].
    pub(crate) fn from_parts_unchecked(features: Array2<f64>, labels: Array1<f64>) -> Self {
        debug_assert_eq!(features.nrows(), labels.len());
        Self { features, labels }
    }

    /// Number of rows.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns, bias included.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature matrix view `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Label vector view `[n_samples]`.
    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }

    /// Feature vector of one sample.
    #[inline]
    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.features.row(index)
    }

    /// Label of one sample.
    #[inline]
    pub fn label(&self, index: usize) -> f64 {
        self.labels[index]
    }

    /// Fraction of samples labeled `1.0`.
    pub fn positive_rate(&self) -> f64 {
        self.labels.sum() / self.n_samples() as f64
    }

    /// Copy the given rows (in the given order) into a new dataset.
    pub fn select(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        if indices.is_empty() {
            return Err(DatasetError::Empty);
        }
        let n_samples = self.n_samples();
        if let Some(&index) = indices.iter().find(|&&i| i >= n_samples) {
            return Err(DatasetError::IndexOutOfBounds { index, n_samples });
        }

        Ok(Self {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        })
    }

    /// Shuffle-split into `(train, test)` with a seeded RNG.
    ///
    /// # Errors
    ///
    /// Fails if `test_fraction` is outside `[0, 1)` or either side ends up empty.
    pub fn split(&self, test_fraction: f64, seed: u64) -> Result<(Self, Self), DatasetError> {
        if !(0.0..1.0).contains(&test_fraction) {
            return Err(DatasetError::InvalidSplitFraction(test_fraction));
        }
        let (train_idx, test_idx) = split_indices(self.n_samples(), test_fraction, seed);
        Ok((self.select(&train_idx)?, self.select(&test_idx)?))
    }
}

/// Deterministic train/test split indices.
///
/// Returns `(train_idx, test_idx)`.
pub fn split_indices(rows: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    assert!((0.0..1.0).contains(&test_fraction));
    let mut idx: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let test_len = ((rows as f64) * test_fraction).round() as usize;
    let test_len = test_len.min(rows);
    let (test, train) = idx.split_at(test_len);
    (train.to_vec(), test.to_vec())
}
