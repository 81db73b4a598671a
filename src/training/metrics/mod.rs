//! Evaluation metrics for trained models.
//!
//! Metrics are computed over predicted probabilities and `0.0`/`1.0` labels.
//! They are separate from training: the trainers only use [`LogLoss`] for
//! progress output, and [`Accuracy`] is what the benchmark binary reports.
//!
//! # Available Metrics
//!
//! - [`Accuracy`]: Percentage of correctly classified rows
//! - [`LogLoss`]: Binary cross-entropy

mod classification;

pub use classification::{Accuracy, LogLoss};
pub(crate) use classification::mean_log_loss;

use ndarray::ArrayView1;

use crate::data::Dataset;
use crate::repr::LogisticModel;

// =============================================================================
// EvalError
// =============================================================================

/// Errors raised while evaluating a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("cannot evaluate on an empty dataset")]
    EmptyDataset,

    #[error("model has {model} weights but dataset has {dataset} features")]
    DimensionMismatch { model: usize, dataset: usize },

    #[error("{predictions} predictions for {labels} labels")]
    LengthMismatch { predictions: usize, labels: usize },
}

// =============================================================================
// MetricFn
// =============================================================================

/// A scalar quality measure over probability predictions.
pub trait MetricFn: Send + Sync {
    /// Compute the metric from per-row probabilities and labels.
    ///
    /// # Errors
    ///
    /// [`EvalError::EmptyDataset`] for zero rows,
    /// [`EvalError::LengthMismatch`] if the two views differ in length.
    fn compute(
        &self,
        probabilities: ArrayView1<'_, f64>,
        labels: ArrayView1<'_, f64>,
    ) -> Result<f64, EvalError>;

    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Whether larger values mean a better model.
    fn higher_is_better(&self) -> bool;

    /// Score `model` on every row of `dataset`.
    ///
    /// Checks dimensions before predicting, so a mismatched model is an error
    /// rather than a panic.
    fn evaluate(&self, dataset: &Dataset, model: &LogisticModel) -> Result<f64, EvalError> {
        if dataset.n_samples() == 0 {
            return Err(EvalError::EmptyDataset);
        }
        if model.n_features() != dataset.n_features() {
            return Err(EvalError::DimensionMismatch {
                model: model.n_features(),
                dataset: dataset.n_features(),
            });
        }
        let probabilities = model.predict_proba(dataset);
        self.compute(probabilities.view(), dataset.labels())
    }
}

fn check_lengths(
    probabilities: ArrayView1<'_, f64>,
    labels: ArrayView1<'_, f64>,
) -> Result<(), EvalError> {
    if probabilities.len() != labels.len() {
        return Err(EvalError::LengthMismatch {
            predictions: probabilities.len(),
            labels: labels.len(),
        });
    }
    if labels.is_empty() {
        return Err(EvalError::EmptyDataset);
    }
    Ok(())
}
