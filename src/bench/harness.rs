//! Repeated timed training runs.

use std::time::Instant;

use bon::Builder;
use serde::Serialize;

use crate::data::Dataset;
use crate::repr::LogisticModel;
use crate::training::{ConfigError, TrainError, Trainer};

use super::stats::{BenchmarkSummary, StatsError, TimingSamples, keeps_samples};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while benchmarking.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("invalid benchmark config: {0}")]
    Config(#[from] ConfigError),

    #[error("training failed during benchmark: {0}")]
    Train(#[from] TrainError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

// =============================================================================
// BenchmarkConfig
// =============================================================================

/// How many times to train and how to summarize.
///
/// ```
/// use parlogit::BenchmarkConfig;
///
/// let config = BenchmarkConfig::builder().build().unwrap();
/// assert_eq!((config.repetitions, config.trim), (1000, 50));
///
/// assert!(BenchmarkConfig::builder().repetitions(10).trim(5).build().is_err());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct BenchmarkConfig {
    /// Timed training calls per trainer. Default: 1000.
    #[builder(default = 1000)]
    pub repetitions: usize,

    /// Samples dropped from each end before averaging. Default: 50.
    #[builder(default = 50)]
    pub trim: usize,

    /// Untimed calls before timing starts. Default: 0.
    #[builder(default)]
    pub warmup: usize,

    /// Report progress every this many timed runs. Default: 100.
    #[builder(default = 100)]
    pub progress_every: usize,
}

impl<S: benchmark_config_builder::IsComplete> BenchmarkConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TooFewRepetitions`] unless `repetitions > 2 * trim`,
    /// [`ConfigError::InvalidProgressInterval`] if `progress_every == 0`.
    pub fn build(self) -> Result<BenchmarkConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: 1000,
            trim: 50,
            warmup: 0,
            progress_every: 100,
        }
    }
}

impl BenchmarkConfig {
    /// Check every field. The harness calls this again before its first run,
    /// since the fields are public and may have been edited after `build()`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !keeps_samples(self.repetitions, self.trim) {
            return Err(ConfigError::TooFewRepetitions {
                repetitions: self.repetitions,
                trim: self.trim,
            });
        }
        if self.progress_every == 0 {
            return Err(ConfigError::InvalidProgressInterval);
        }
        Ok(())
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Snapshot passed to a [`ProgressSink`] between timed runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub trainer: &'static str,
    pub completed: usize,
    pub total: usize,
    /// Duration of the most recent run, in seconds.
    pub last_seconds: f64,
}

/// Receives progress updates. Called outside the timed region.
pub trait ProgressSink {
    fn report(&mut self, progress: &Progress);
}

impl<F: FnMut(&Progress)> ProgressSink for F {
    fn report(&mut self, progress: &Progress) {
        self(progress)
    }
}

/// Writes progress lines through `log::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, progress: &Progress) {
        log::info!(
            target: "parlogit::bench",
            "[{}] {}/{} runs (last {:.6}s)",
            progress.trainer,
            progress.completed,
            progress.total,
            progress.last_seconds
        );
    }
}

struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _: &Progress) {}
}

// =============================================================================
// BenchmarkHarness
// =============================================================================

/// Samples, summary and the model from the final timed run.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub samples: TimingSamples,
    pub summary: BenchmarkSummary,
    pub model: LogisticModel,
}

/// Sequential vs parallel on the same dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub sequential: BenchmarkSummary,
    pub parallel: BenchmarkSummary,
    /// `sequential.trimmed_mean / parallel.trimmed_mean`.
    pub speedup: f64,
    /// Largest absolute weight difference between the two final models.
    pub max_weight_diff: f64,
}

/// Times training calls and summarizes them.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
}

impl BenchmarkHarness {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Time `trainer` on `dataset` without progress output.
    pub fn run(&self, trainer: &dyn Trainer, dataset: &Dataset) -> Result<BenchmarkRun, BenchError> {
        self.run_with_progress(trainer, dataset, &mut NoProgress)
    }

    /// Time `trainer` on `dataset`, reporting to `sink` every
    /// `progress_every` runs and after the last one.
    ///
    /// # Errors
    ///
    /// Fails before any run if the config is invalid, otherwise on the first
    /// training error.
    pub fn run_with_progress(
        &self,
        trainer: &dyn Trainer,
        dataset: &Dataset,
        sink: &mut dyn ProgressSink,
    ) -> Result<BenchmarkRun, BenchError> {
        self.config.validate()?;
        let total = self.config.repetitions;
        let every = self.config.progress_every;

        for _ in 0..self.config.warmup {
            trainer.train(dataset)?;
        }

        let mut samples = TimingSamples::with_capacity(total);
        // validate() guarantees at least one run replaces this
        let mut model = LogisticModel::zeros(dataset.n_features());
        for run in 1..=total {
            let start = Instant::now();
            let trained = trainer.train(dataset)?;
            let elapsed = start.elapsed();
            samples.push(elapsed);
            model = trained;

            if run % every == 0 || run == total {
                sink.report(&Progress {
                    trainer: trainer.name(),
                    completed: run,
                    total,
                    last_seconds: elapsed.as_secs_f64(),
                });
            }
        }

        let summary = samples.summarize(trainer.name(), self.config.trim)?;

        Ok(BenchmarkRun {
            samples,
            summary,
            model,
        })
    }

    /// Benchmark both trainers with the same config and dataset.
    pub fn compare(
        &self,
        sequential: &dyn Trainer,
        parallel: &dyn Trainer,
        dataset: &Dataset,
        sink: &mut dyn ProgressSink,
    ) -> Result<Comparison, BenchError> {
        let seq = self.run_with_progress(sequential, dataset, sink)?;
        let par = self.run_with_progress(parallel, dataset, sink)?;

        let speedup = if par.summary.trimmed_mean > 0.0 {
            seq.summary.trimmed_mean / par.summary.trimmed_mean
        } else {
            f64::INFINITY
        };

        Ok(Comparison {
            max_weight_diff: seq.model.max_abs_diff(&par.model),
            sequential: seq.summary,
            parallel: par.summary,
            speedup,
        })
    }
}
