//! parlogit: sequential and parallel logistic regression trainers.
//!
//! Trains a binary logistic regression model with batch gradient descent and
//! compares a single-threaded reference loop against a rayon-parallel minibatch
//! loop that must agree with it.
//!
//! # Key Types
//!
//! - [`Dataset`] - Validated feature matrix (bias in column 0) and binary labels
//! - [`TrainParams`] - Learning rate, epochs, batch mode and sync strategy
//! - [`SequentialTrainer`] / [`ParallelTrainer`] - The two training loops
//! - [`LogisticModel`] - The trained weight vector
//! - [`Accuracy`] - Thresholded accuracy in percent
//! - [`BenchmarkHarness`] - Repeated timing with trimmed-mean summaries
//!
//! # Example
//!
//! ```
//! use parlogit::testing::synthetic_binary;
//! use parlogit::{Accuracy, MetricFn, ParallelTrainer, SyncStrategy, TrainParams, Trainer};
//!
//! let dataset = synthetic_binary(500, 3, 42, 0.0);
//! let params = TrainParams::builder()
//!     .learning_rate(0.5)
//!     .n_epochs(200)
//!     .strategy(SyncStrategy::AccumulateThenApply)
//!     .build()
//!     .unwrap();
//!
//! let model = ParallelTrainer::new(params).train(&dataset).unwrap();
//! let accuracy = Accuracy::default().evaluate(&dataset, &model).unwrap();
//! assert!((0.0..=100.0).contains(&accuracy));
//! ```

pub mod bench;
pub mod data;
pub mod error;
pub mod inference;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use bench::{
    BenchError, BenchmarkConfig, BenchmarkHarness, BenchmarkSummary, Comparison, StatsError,
    trimmed_mean,
};
pub use data::{Dataset, DatasetError, MinMaxScaler};
pub use error::Error;
pub use inference::{predict, sigmoid};
pub use repr::LogisticModel;
pub use training::{
    Accuracy, BatchMode, ConfigError, EvalError, LogLoss, MetricFn, ParallelTrainer,
    SequentialTrainer, SyncStrategy, TrainError, TrainParams, Trainer, Verbosity,
};
pub use utils::{Parallelism, run_with_threads};
