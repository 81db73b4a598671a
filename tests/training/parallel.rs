//! Parallel trainer tests.

use super::{params, scaled_dataset};
use approx::assert_abs_diff_eq;
use parlogit::testing::linearly_separable;
use parlogit::{
    Accuracy, BatchMode, ConfigError, MetricFn, ParallelTrainer, SequentialTrainer, SyncStrategy,
    TrainError, Trainer,
};
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(7)]
#[case(64)]
#[case(100)]
#[case(1000)]
fn accumulate_equals_full_batch_for_any_batch_size(#[case] batch_size: usize) {
    let dataset = scaled_dataset(400, 1);
    let reference = SequentialTrainer::new(params(BatchMode::FullBatch, SyncStrategy::default(), 25, 1))
        .train(&dataset)
        .unwrap();

    let model = ParallelTrainer::new(params(
        BatchMode::mini(batch_size),
        SyncStrategy::AccumulateThenApply,
        25,
        4,
    ))
    .train(&dataset)
    .unwrap();

    assert_abs_diff_eq!(model.max_abs_diff(&reference), 0.0, epsilon = 1e-9);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn accumulate_is_reproducible(#[case] n_threads: usize) {
    let dataset = scaled_dataset(500, 2);
    let trainer = ParallelTrainer::new(params(
        BatchMode::mini(37),
        SyncStrategy::AccumulateThenApply,
        15,
        n_threads,
    ));
    let baseline = ParallelTrainer::new(params(
        BatchMode::mini(37),
        SyncStrategy::AccumulateThenApply,
        15,
        1,
    ))
    .train(&dataset)
    .unwrap();

    for _ in 0..3 {
        assert_eq!(trainer.train(&dataset).unwrap(), baseline);
    }
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(33)]
fn apply_per_batch_on_one_thread_is_sequential_minibatch(#[case] batch_size: usize) {
    let dataset = scaled_dataset(200, 4);
    let p = params(BatchMode::mini(batch_size), SyncStrategy::ApplyPerBatch, 10, 1);

    let parallel = ParallelTrainer::new(p.clone()).train(&dataset).unwrap();
    let sequential = SequentialTrainer::new(p).train(&dataset).unwrap();
    assert_eq!(parallel, sequential);
}

#[rstest]
#[case::accumulate(SyncStrategy::AccumulateThenApply)]
#[case::apply_per_batch(SyncStrategy::ApplyPerBatch)]
fn separable_data_reaches_full_accuracy(#[case] strategy: SyncStrategy) {
    let dataset = linearly_separable();
    let model = ParallelTrainer::new(params(BatchMode::mini(2), strategy, 500, 4))
        .train(&dataset)
        .unwrap();
    assert_eq!(Accuracy::default().evaluate(&dataset, &model).unwrap(), 100.0);
}

#[test]
fn apply_per_batch_learns_with_many_threads() {
    let dataset = scaled_dataset(2000, 8);
    let (train, test) = dataset.split(0.25, 8).unwrap();
    let model = ParallelTrainer::new(params(BatchMode::mini(50), SyncStrategy::ApplyPerBatch, 100, 4))
        .train(&train)
        .unwrap();

    let accuracy = Accuracy::default().evaluate(&test, &model).unwrap();
    assert!(accuracy > 80.0, "test accuracy {accuracy}");
}

#[test]
fn invalid_batch_size_launches_nothing() {
    let mut p = params(BatchMode::mini(10), SyncStrategy::ApplyPerBatch, 5, 2);
    p.batch_mode = BatchMode::mini(0);
    let err = ParallelTrainer::new(p).train(&linearly_separable()).unwrap_err();
    assert!(matches!(err, TrainError::Config(ConfigError::InvalidBatchSize)));
}
