//! Sequential trainer tests.

use super::{params, scaled_dataset};
use approx::assert_abs_diff_eq;
use parlogit::testing::linearly_separable;
use parlogit::{
    Accuracy, BatchMode, LogLoss, MetricFn, SequentialTrainer, SyncStrategy, TrainParams, Trainer,
};
use rstest::rstest;

#[rstest]
#[case::full_batch(BatchMode::FullBatch)]
#[case::mini_1(BatchMode::mini(1))]
#[case::mini_3(BatchMode::mini(3))]
#[case::mini_larger_than_data(BatchMode::mini(100))]
fn separable_data_reaches_full_accuracy(#[case] batch_mode: BatchMode) {
    let dataset = linearly_separable();
    let trainer = SequentialTrainer::new(params(batch_mode, SyncStrategy::default(), 500, 1));
    let model = trainer.train(&dataset).unwrap();

    assert_eq!(Accuracy::default().evaluate(&dataset, &model).unwrap(), 100.0);
}

#[test]
fn training_lowers_log_loss() {
    let dataset = scaled_dataset(500, 3);
    let short = SequentialTrainer::new(params(BatchMode::mini(50), SyncStrategy::default(), 1, 1))
        .train(&dataset)
        .unwrap();
    let long = SequentialTrainer::new(params(BatchMode::mini(50), SyncStrategy::default(), 200, 1))
        .train(&dataset)
        .unwrap();

    let short_loss = LogLoss.evaluate(&dataset, &short).unwrap();
    let long_loss = LogLoss.evaluate(&dataset, &long).unwrap();
    assert!(long_loss < short_loss, "{long_loss} !< {short_loss}");
}

#[test]
fn learns_synthetic_data() {
    let dataset = scaled_dataset(2000, 11);
    let (train, test) = dataset.split(0.25, 11).unwrap();
    let model = SequentialTrainer::new(params(BatchMode::mini(100), SyncStrategy::default(), 300, 1))
        .train(&train)
        .unwrap();

    let accuracy = Accuracy::default().evaluate(&test, &model).unwrap();
    assert!(accuracy > 80.0, "test accuracy {accuracy}");
}

#[test]
fn repeated_runs_are_identical() {
    let dataset = scaled_dataset(300, 5);
    let trainer = SequentialTrainer::new(params(BatchMode::mini(32), SyncStrategy::default(), 20, 1));
    assert_eq!(trainer.train(&dataset).unwrap(), trainer.train(&dataset).unwrap());
}

#[test]
fn weights_start_from_zero_every_call() {
    let dataset = linearly_separable();
    let trainer = SequentialTrainer::new(
        TrainParams::builder()
            .n_epochs(1)
            .learning_rate(1.0)
            .batch_mode(BatchMode::FullBatch)
            .build()
            .unwrap(),
    );
    let first = trainer.train(&dataset).unwrap();
    let second = trainer.train(&dataset).unwrap();

    // Balanced labels with zero weights: the bias gradient is zero.
    assert_abs_diff_eq!(first.weight(0), 0.0, epsilon = 1e-15);
    assert_eq!(first, second);
}
