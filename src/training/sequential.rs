//! Single-threaded reference trainer.
//!
//! Walks the batches of each epoch in order on the calling thread, applying one
//! update per batch. With [`BatchMode::FullBatch`](super::BatchMode::FullBatch)
//! this is classic batch gradient descent and the baseline every parallel
//! strategy is checked against.

use crate::data::Dataset;
use crate::repr::LogisticModel;

use super::gradients::BatchGradient;
use super::logger::TrainingLogger;
use super::params::TrainParams;
use super::trainer::{TrainError, Trainer, report_epoch};

/// Sequential gradient descent.
///
/// # Example
///
/// ```
/// use parlogit::{BatchMode, SequentialTrainer, TrainParams, Trainer};
/// use parlogit::testing::linearly_separable;
///
/// let dataset = linearly_separable();
/// let params = TrainParams::builder()
///     .learning_rate(1.0)
///     .n_epochs(500)
///     .batch_mode(BatchMode::FullBatch)
///     .build()
///     .unwrap();
///
/// let model = SequentialTrainer::new(params).train(&dataset).unwrap();
/// assert_eq!(model.n_features(), dataset.n_features());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialTrainer {
    params: TrainParams,
}

impl SequentialTrainer {
    pub fn new(params: TrainParams) -> Self {
        Self { params }
    }

    /// Continue training from existing weights instead of zeros.
    pub fn train_from(
        &self,
        dataset: &Dataset,
        initial: LogisticModel,
    ) -> Result<LogisticModel, TrainError> {
        self.params.validate()?;
        let batches = self.params.batch_mode.partition(dataset.n_samples())?;
        if initial.n_features() != dataset.n_features() {
            return Err(TrainError::DimensionMismatch {
                model: initial.n_features(),
                dataset: dataset.n_features(),
            });
        }

        let mut weights = initial.into_weights();
        let mut gradient = BatchGradient::zeros(dataset.n_features());

        let mut logger = TrainingLogger::new(self.params.verbosity, self.name());
        logger.start_training(self.params.n_epochs, dataset.n_samples(), batches.len());

        for epoch in 0..self.params.n_epochs {
            for batch in batches.iter() {
                gradient.reset();
                gradient.accumulate(dataset, batch, weights.view());
                gradient.apply(&mut weights, self.params.learning_rate);
            }
            report_epoch(&logger, epoch, dataset, weights.view());
        }

        logger.finish_training();
        Ok(LogisticModel::from_weights(weights))
    }
}

impl Trainer for SequentialTrainer {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn params(&self) -> &TrainParams {
        &self.params
    }

    fn train(&self, dataset: &Dataset) -> Result<LogisticModel, TrainError> {
        self.train_from(dataset, LogisticModel::zeros(dataset.n_features()))
    }
}
