//! Common trainer interface.
//!
//! Both trainers start from zero weights, run a fixed number of epochs and
//! return a [`LogisticModel`]. The [`Trainer`] trait lets the benchmark harness
//! time either one through the same code path.

use ndarray::ArrayView1;

use crate::data::Dataset;
use crate::inference;
use crate::repr::LogisticModel;

use super::logger::TrainingLogger;
use super::metrics::mean_log_loss;
use super::params::{ConfigError, TrainParams};

// =============================================================================
// TrainError
// =============================================================================

/// Errors raised before or during a training call.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("initial model has {model} weights but dataset has {dataset} features")]
    DimensionMismatch { model: usize, dataset: usize },

    #[error("failed to build a {n_threads}-thread pool: {source}")]
    ThreadPool {
        n_threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

// =============================================================================
// Trainer
// =============================================================================

/// A gradient-descent trainer for logistic regression.
pub trait Trainer: Send + Sync {
    /// Short name used in logs and benchmark reports.
    fn name(&self) -> &'static str;

    /// Hyperparameters this trainer runs with.
    fn params(&self) -> &TrainParams;

    /// Fit a model to `dataset`.
    ///
    /// Parameters are validated before the first epoch, so an invalid
    /// configuration never launches work.
    ///
    /// # Errors
    ///
    /// [`TrainError::Config`] for invalid parameters,
    /// [`TrainError::ThreadPool`] if a dedicated pool cannot be built.
    /// Neither can happen once the first epoch has started.
    fn train(&self, dataset: &Dataset) -> Result<LogisticModel, TrainError>;
}

/// Log the current training loss if the logger wants this epoch.
pub(super) fn report_epoch(
    logger: &TrainingLogger,
    epoch: usize,
    dataset: &Dataset,
    weights: ArrayView1<'_, f64>,
) {
    if !logger.wants_epoch(epoch) {
        return;
    }
    let probabilities = inference::predict_proba(dataset.features(), weights);
    logger.log_epoch(epoch, mean_log_loss(probabilities.view(), dataset.labels()));
}
