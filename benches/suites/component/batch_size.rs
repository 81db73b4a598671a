//! Component benchmarks: parallel trainer throughput by batch size and thread count.

#[path = "../../common/mod.rs"]
mod common;

use common::criterion_config::{default_criterion, fast_criterion};

use parlogit::bench::trimmed_mean;
use parlogit::testing::synthetic_binary;
use parlogit::{BatchMode, ParallelTrainer, SyncStrategy, TrainParams, Trainer};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

fn bench_batch_size(c: &mut Criterion) {
	let num_rows = 20_000usize;
	let dataset = synthetic_binary(num_rows, 8, 42, 0.05);
	let mut group = c.benchmark_group("component/train/parallel/batch_size");
	group.throughput(Throughput::Elements((num_rows * 10) as u64));

	for strategy in [SyncStrategy::AccumulateThenApply, SyncStrategy::ApplyPerBatch] {
		for batch_size in [32usize, 256, 2048] {
			let params = TrainParams::builder()
				.n_epochs(10)
				.batch_mode(BatchMode::mini(batch_size))
				.strategy(strategy)
				.build()
				.unwrap();
			let trainer = ParallelTrainer::new(params);
			group.bench_with_input(BenchmarkId::new(strategy.as_str(), batch_size), &dataset, |b, ds| {
				b.iter(|| black_box(trainer.train(black_box(ds))).unwrap())
			});
		}
	}

	group.finish();
}

fn bench_threads(c: &mut Criterion) {
	let num_rows = 20_000usize;
	let dataset = synthetic_binary(num_rows, 8, 42, 0.05);
	let mut group = c.benchmark_group("component/train/parallel/threads");

	for n_threads in [1usize, 2, 4, 8] {
		let params = TrainParams::builder()
			.n_epochs(10)
			.batch_mode(BatchMode::mini(256))
			.n_threads(n_threads)
			.build()
			.unwrap();
		let trainer = ParallelTrainer::new(params);
		group.bench_with_input(BenchmarkId::new("accumulate", n_threads), &dataset, |b, ds| {
			b.iter(|| black_box(trainer.train(black_box(ds))).unwrap())
		});
	}

	group.finish();
}

fn bench_trimmed_mean(c: &mut Criterion) {
	let mut group = c.benchmark_group("component/stats/trimmed_mean");
	let mut rng = StdRng::seed_from_u64(7);

	for n in [100usize, 1_000, 10_000] {
		let samples: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>()).collect();
		group.throughput(Throughput::Elements(n as u64));
		group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, s| {
			b.iter(|| black_box(trimmed_mean(black_box(s), n / 20)).unwrap())
		});
	}

	group.finish();
}

criterion_group! {
	name = train;
	config = default_criterion();
	targets = bench_batch_size, bench_threads
}
criterion_group! {
	name = stats;
	config = fast_criterion();
	targets = bench_trimmed_mean
}
criterion_main!(train, stats);
