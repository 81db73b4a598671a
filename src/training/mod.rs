//! Training infrastructure for logistic regression.
//!
//! This module provides the gradient-descent trainers and their shared pieces:
//!
//! - [`SequentialTrainer`]: single-threaded reference, full-batch or minibatch
//! - [`ParallelTrainer`]: minibatches fanned out over rayon, see [`SyncStrategy`]
//! - [`TrainParams`], [`BatchMode`]: hyperparameters (builder, validated)
//! - [`BatchGradient`]: summed gradient plus contributing row count
//! - [`Minibatches`]: contiguous partition of the rows
//! - [`Accuracy`], [`LogLoss`]: evaluation metrics via [`MetricFn`]
//! - [`TrainingLogger`], [`Verbosity`]: progress output through `log`
//!
//! Both trainers implement [`Trainer`], which is what the benchmark harness
//! consumes.

mod gradients;
mod logger;
mod metrics;
mod parallel;
mod params;
mod partition;
mod sequential;
mod trainer;

pub use gradients::BatchGradient;
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{Accuracy, EvalError, LogLoss, MetricFn};
pub use parallel::ParallelTrainer;
pub use params::{BatchMode, ConfigError, SyncStrategy, TrainParams};
pub use partition::Minibatches;
pub use sequential::SequentialTrainer;
pub use trainer::{TrainError, Trainer};
