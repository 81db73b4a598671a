//! Crate-level error type.
//!
//! Each subsystem has its own error enum; [`Error`] wraps them so callers that
//! drive the whole pipeline (e.g. the `compare` binary) can use `?` throughout.

use crate::bench::{BenchError, StatsError};
use crate::data::DatasetError;
use crate::training::{ConfigError, EvalError, TrainError};

/// Any error surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Train(#[from] TrainError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
