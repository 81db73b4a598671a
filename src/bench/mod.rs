//! Wall-clock benchmarking of trainers.
//!
//! [`BenchmarkHarness`] trains the same dataset many times, timing each full
//! training call, and summarizes the samples with a trimmed mean so a few
//! scheduler hiccups do not skew the result.
//!
//! ```
//! use parlogit::bench::{BenchmarkConfig, BenchmarkHarness};
//! use parlogit::testing::synthetic_binary;
//! use parlogit::{SequentialTrainer, TrainParams};
//!
//! let dataset = synthetic_binary(100, 2, 1, 0.0);
//! let trainer = SequentialTrainer::new(TrainParams::builder().n_epochs(5).build().unwrap());
//!
//! let config = BenchmarkConfig::builder().repetitions(11).trim(2).build().unwrap();
//! let run = BenchmarkHarness::new(config).run(&trainer, &dataset).unwrap();
//! assert_eq!(run.samples.len(), 11);
//! assert_eq!(run.summary.n_samples, 11);
//! ```

mod harness;
mod stats;

pub use harness::{
    BenchError, BenchmarkConfig, BenchmarkHarness, BenchmarkRun, Comparison, LogProgress,
    Progress, ProgressSink,
};
pub use stats::{BenchmarkSummary, StatsError, TimingSamples, trimmed_mean};
