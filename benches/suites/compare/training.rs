//! Compare benchmarks: sequential vs parallel training on the same data.

#[path = "../../common/mod.rs"]
mod common;

use common::criterion_config::default_criterion;

use parlogit::testing::synthetic_binary;
use parlogit::{
	BatchMode, ParallelTrainer, SequentialTrainer, SyncStrategy, TrainParams, Trainer, Verbosity,
};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const N_FEATURES: usize = 8;
const N_EPOCHS: usize = 20;

fn params(batch_mode: BatchMode, strategy: SyncStrategy, n_threads: usize) -> TrainParams {
	TrainParams::builder()
		.learning_rate(0.1)
		.n_epochs(N_EPOCHS)
		.batch_mode(batch_mode)
		.strategy(strategy)
		.n_threads(n_threads)
		.verbosity(Verbosity::Silent)
		.build()
		.unwrap()
}

fn bench_trainers(c: &mut Criterion) {
	let mut group = c.benchmark_group("compare/train/logistic");

	for num_rows in [1_000usize, 10_000, 50_000] {
		let dataset = synthetic_binary(num_rows, N_FEATURES, 42, 0.05);
		group.throughput(Throughput::Elements((num_rows * N_EPOCHS) as u64));

		let trainers: Vec<(&str, Box<dyn Trainer>)> = vec![
			(
				"sequential/full",
				Box::new(SequentialTrainer::new(params(BatchMode::FullBatch, SyncStrategy::default(), 1))),
			),
			(
				"sequential/mini",
				Box::new(SequentialTrainer::new(params(BatchMode::mini(100), SyncStrategy::default(), 1))),
			),
			(
				SyncStrategy::AccumulateThenApply.trainer_name(),
				Box::new(ParallelTrainer::new(params(BatchMode::mini(100), SyncStrategy::AccumulateThenApply, 0))),
			),
			(
				SyncStrategy::ApplyPerBatch.trainer_name(),
				Box::new(ParallelTrainer::new(params(BatchMode::mini(100), SyncStrategy::ApplyPerBatch, 0))),
			),
		];

		for (label, trainer) in &trainers {
			group.bench_with_input(BenchmarkId::new(*label, num_rows), &dataset, |b, ds| {
				b.iter(|| black_box(trainer.train(black_box(ds))).unwrap())
			});
		}
	}

	group.finish();
}

criterion_group! {
	name = benches;
	config = default_criterion();
	targets = bench_trainers
}
criterion_main!(benches);
