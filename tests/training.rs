//! Integration tests for the trainers.
//!
//! - `sequential`: reference trainer behavior
//! - `parallel`: both sync strategies against the reference

#[path = "training/parallel.rs"]
mod parallel;
#[path = "training/sequential.rs"]
mod sequential;

use parlogit::testing::synthetic_binary;
use parlogit::{BatchMode, Dataset, MinMaxScaler, SyncStrategy, TrainParams, Verbosity};

/// Scaled synthetic dataset shared by the training tests.
pub fn scaled_dataset(rows: usize, seed: u64) -> Dataset {
    let (_, scaled) = MinMaxScaler::fit_transform(&synthetic_binary(rows, 4, seed, 0.05));
    scaled
}

pub fn params(
    batch_mode: BatchMode,
    strategy: SyncStrategy,
    n_epochs: usize,
    n_threads: usize,
) -> TrainParams {
    TrainParams::builder()
        .learning_rate(0.5)
        .n_epochs(n_epochs)
        .batch_mode(batch_mode)
        .strategy(strategy)
        .n_threads(n_threads)
        .verbosity(Verbosity::Silent)
        .build()
        .unwrap()
}
