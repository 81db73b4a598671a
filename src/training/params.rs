//! Training configuration with builder pattern.
//!
//! [`TrainParams`] is shared by [`SequentialTrainer`](super::SequentialTrainer)
//! and [`ParallelTrainer`](super::ParallelTrainer). It uses the `bon` crate for
//! builder generation; `build()` validates before returning.
//!
//! # Example
//!
//! ```
//! use parlogit::{BatchMode, SyncStrategy, TrainParams};
//!
//! // Defaults: lr 0.1, 1000 epochs, minibatches of 100, accumulate
//! let params = TrainParams::builder().build().unwrap();
//!
//! let params = TrainParams::builder()
//!     .learning_rate(0.5)
//!     .n_epochs(200)
//!     .batch_mode(BatchMode::mini(32))
//!     .strategy(SyncStrategy::ApplyPerBatch)
//!     .n_threads(4)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.batch_mode.batch_size(), Some(32));
//!
//! // Zero batch size is rejected up front
//! assert!(TrainParams::builder().batch_mode(BatchMode::mini(0)).build().is_err());
//! ```

use bon::Builder;

use super::logger::Verbosity;
use super::partition::Minibatches;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors raised while validating training or benchmark configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("learning_rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    #[error("n_epochs must be at least 1")]
    InvalidEpochs,

    #[error("batch_size must be at least 1")]
    InvalidBatchSize,

    #[error("repetitions ({repetitions}) must exceed twice the trim count ({trim})")]
    TooFewRepetitions { repetitions: usize, trim: usize },

    #[error("progress_every must be at least 1")]
    InvalidProgressInterval,
}

// =============================================================================
// BatchMode / SyncStrategy
// =============================================================================

/// How an epoch is divided into gradient updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// One gradient over all samples, one update per epoch.
    FullBatch,
    /// Contiguous batches of `batch_size` rows; the last one may be shorter.
    MiniBatch { batch_size: usize },
}

impl Default for BatchMode {
    fn default() -> Self {
        Self::MiniBatch { batch_size: 100 }
    }
}

impl BatchMode {
    /// Shorthand for [`BatchMode::MiniBatch`].
    pub fn mini(batch_size: usize) -> Self {
        Self::MiniBatch { batch_size }
    }

    /// Configured batch size, `None` for full batch.
    pub fn batch_size(self) -> Option<usize> {
        match self {
            Self::FullBatch => None,
            Self::MiniBatch { batch_size } => Some(batch_size),
        }
    }

    /// Partition `n_samples` rows according to this mode.
    pub fn partition(self, n_samples: usize) -> Result<Minibatches, ConfigError> {
        match self {
            Self::FullBatch => Ok(Minibatches::full(n_samples)),
            Self::MiniBatch { batch_size } => Minibatches::new(n_samples, batch_size),
        }
    }
}

/// How the parallel trainer merges concurrent batch gradients into the weights.
///
/// The two strategies have different determinism guarantees and are never
/// mixed within one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Every batch gradient is computed against the epoch's starting weights
    /// into a private buffer. After all batches finish, the buffers are summed
    /// in batch order and one update (divided by the sample count) is applied.
    ///
    /// Identical to full-batch gradient descent for any batch size, and
    /// reproducible bit-for-bit regardless of thread count or scheduling.
    #[default]
    AccumulateThenApply,
    /// Every batch snapshots the current weights, computes its gradient without
    /// holding the lock, then locks and applies its own update (divided by its
    /// own length).
    ///
    /// Which updates a batch observes depends on scheduling, so final weights
    /// vary from run to run. This variance is accepted for throughput.
    ApplyPerBatch,
}

impl SyncStrategy {
    /// Short label, e.g. `"accumulate"`.
    pub fn as_str(self) -> &'static str {
        self.trainer_name().trim_start_matches("parallel/")
    }

    /// Name reported by a [`ParallelTrainer`](super::ParallelTrainer) using
    /// this strategy.
    pub fn trainer_name(self) -> &'static str {
        match self {
            Self::AccumulateThenApply => "parallel/accumulate",
            Self::ApplyPerBatch => "parallel/apply-per-batch",
        }
    }
}

// =============================================================================
// TrainParams
// =============================================================================

/// Gradient descent hyperparameters.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TrainParams {
    /// Step size. Default: 0.1.
    #[builder(default = 0.1)]
    pub learning_rate: f64,

    /// Number of passes over the dataset. Default: 1000.
    #[builder(default = 1000)]
    pub n_epochs: usize,

    /// Batch partitioning. Default: minibatches of 100.
    ///
    /// The parallel trainer treats [`BatchMode::FullBatch`] as a single batch.
    #[builder(default)]
    pub batch_mode: BatchMode,

    /// Merge strategy for the parallel trainer. Ignored by the sequential one.
    #[builder(default)]
    pub strategy: SyncStrategy,

    /// Worker threads for the parallel trainer.
    ///
    /// `0` uses the current rayon pool, `1` runs batches inline,
    /// `n > 1` uses a dedicated pool of `n` threads.
    #[builder(default)]
    pub n_threads: usize,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: train_params_builder::IsComplete> TrainParamsBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `learning_rate <= 0` or is not finite
    /// - `n_epochs == 0`
    /// - the batch mode is `MiniBatch` with `batch_size == 0`
    pub fn build(self) -> Result<TrainParams, ConfigError> {
        let params = self.__build_internal();
        params.validate()?;
        Ok(params)
    }
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            n_epochs: 1000,
            batch_mode: BatchMode::default(),
            strategy: SyncStrategy::default(),
            n_threads: 0,
            verbosity: Verbosity::default(),
        }
    }
}

impl TrainParams {
    /// Check every field. Trainers call this again before their first epoch,
    /// since the fields are public and may have been edited after `build()`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.n_epochs == 0 {
            return Err(ConfigError::InvalidEpochs);
        }
        if self.batch_mode.batch_size() == Some(0) {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(())
    }
}
