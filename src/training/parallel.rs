//! Parallel minibatch trainer.
//!
//! Each epoch partitions the rows into contiguous batches and fans them out
//! over the rayon pool, one task per batch. The parallel iterator's join is the
//! epoch barrier: no task from epoch `e + 1` starts before every task of epoch
//! `e` has finished. How the batch gradients reach the weights is chosen by
//! [`SyncStrategy`]:
//!
//! ```text
//! AccumulateThenApply             ApplyPerBatch
//!
//!  w ──┬── batch 0 → g0            w ─lock─ snapshot → batch 0 → g0 ─lock─ w -= g0/|b0|
//!      ├── batch 1 → g1            w ─lock─ snapshot → batch 1 → g1 ─lock─ w -= g1/|b1|
//!      └── batch 2 → g2            ...
//!   join
//!   w -= lr × (g0 + g1 + g2) / N
//! ```
//!
//! Accumulate-then-apply is a full-batch step computed in parallel: the result
//! does not depend on batch size, thread count or scheduling. Apply-per-batch
//! behaves like asynchronous minibatch SGD and trades reproducibility for more
//! updates per epoch.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ndarray::Array1;

use crate::data::Dataset;
use crate::repr::LogisticModel;
use crate::utils::{Parallelism, run_with_threads};

use super::gradients::BatchGradient;
use super::logger::TrainingLogger;
use super::params::{SyncStrategy, TrainParams};
use super::partition::Minibatches;
use super::trainer::{TrainError, Trainer, report_epoch};

/// Minibatch gradient descent with batches processed concurrently.
///
/// # Example
///
/// ```
/// use parlogit::{BatchMode, ParallelTrainer, SyncStrategy, TrainParams, Trainer};
/// use parlogit::testing::synthetic_binary;
///
/// let dataset = synthetic_binary(400, 3, 7, 0.0);
/// let params = TrainParams::builder()
///     .n_epochs(50)
///     .batch_mode(BatchMode::mini(64))
///     .strategy(SyncStrategy::AccumulateThenApply)
///     .n_threads(2)
///     .build()
///     .unwrap();
///
/// let trainer = ParallelTrainer::new(params);
/// let a = trainer.train(&dataset).unwrap();
/// let b = trainer.train(&dataset).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParallelTrainer {
    params: TrainParams,
}

impl ParallelTrainer {
    pub fn new(params: TrainParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn strategy(&self) -> SyncStrategy {
        self.params.strategy
    }

    fn run(
        &self,
        dataset: &Dataset,
        batches: Minibatches,
        parallelism: Parallelism,
    ) -> Array1<f64> {
        let mut logger = TrainingLogger::new(self.params.verbosity, self.name());
        logger.start_training(self.params.n_epochs, dataset.n_samples(), batches.len());
        if let Some(message) = single_batch_warning(&batches, parallelism) {
            logger.warn(message);
        }

        let weights = match self.params.strategy {
            SyncStrategy::AccumulateThenApply => {
                self.accumulate_then_apply(dataset, batches, parallelism, &logger)
            }
            SyncStrategy::ApplyPerBatch => {
                self.apply_per_batch(dataset, batches, parallelism, &logger)
            }
        };

        logger.finish_training();
        weights
    }

    fn accumulate_then_apply(
        &self,
        dataset: &Dataset,
        batches: Minibatches,
        parallelism: Parallelism,
        logger: &TrainingLogger,
    ) -> Array1<f64> {
        let mut weights = Array1::zeros(dataset.n_features());
        let mut total = BatchGradient::zeros(dataset.n_features());

        for epoch in 0..self.params.n_epochs {
            // Every batch reads the epoch's starting weights.
            let partials = parallelism.maybe_par_map(0..batches.len(), |i| {
                BatchGradient::compute(dataset, batches.batch(i), weights.view())
            });

            // Single writer, fixed batch order.
            total.reset();
            for partial in &partials {
                total.merge(partial);
            }
            debug_assert_eq!(total.count(), dataset.n_samples());
            total.apply(&mut weights, self.params.learning_rate);

            report_epoch(logger, epoch, dataset, weights.view());
        }

        weights
    }

    fn apply_per_batch(
        &self,
        dataset: &Dataset,
        batches: Minibatches,
        parallelism: Parallelism,
        logger: &TrainingLogger,
    ) -> Array1<f64> {
        let learning_rate = self.params.learning_rate;
        let shared = Mutex::new(Array1::zeros(dataset.n_features()));

        for epoch in 0..self.params.n_epochs {
            parallelism.maybe_par_for_each(0..batches.len(), |i| {
                let snapshot = lock(&shared).clone();
                let gradient = BatchGradient::compute(dataset, batches.batch(i), snapshot.view());
                gradient.apply(&mut lock(&shared), learning_rate);
            });

            report_epoch(logger, epoch, dataset, lock(&shared).view());
        }

        shared.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

fn single_batch_warning(batches: &Minibatches, parallelism: Parallelism) -> Option<&'static str> {
    (batches.len() == 1 && parallelism.is_parallel())
        .then_some("dataset fits in a single batch; batches will not run concurrently")
}

/// Weight updates leave the vector consistent even if a task panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Trainer for ParallelTrainer {
    fn name(&self) -> &'static str {
        self.params.strategy.trainer_name()
    }

    fn params(&self) -> &TrainParams {
        &self.params
    }

    fn train(&self, dataset: &Dataset) -> Result<LogisticModel, TrainError> {
        self.params.validate()?;
        let batches = self.params.batch_mode.partition(dataset.n_samples())?;

        let n_threads = self.params.n_threads;
        let weights = run_with_threads(n_threads, |parallelism| {
            self.run(dataset, batches, parallelism)
        })
        .map_err(|source| TrainError::ThreadPool { n_threads, source })?;

        Ok(LogisticModel::from_weights(weights))
    }
}
