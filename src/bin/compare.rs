//! Sequential vs parallel logistic regression on synthetic data.
//!
//! Trains both trainers on the same scaled dataset, reports test accuracy,
//! then times each one repeatedly and prints trimmed-mean summaries.
//!
//! ```text
//! cargo run --release --bin compare -- --rows 20000 --features 8 --repetitions 50 --trim 5
//! RUST_LOG=info cargo run --release --bin compare -- -v --json
//! ```

use clap::{Parser, ValueEnum};

use parlogit::bench::LogProgress;
use parlogit::testing::synthetic_binary;
use parlogit::{
    Accuracy, BatchMode, BenchmarkConfig, BenchmarkHarness, DatasetError, Error, MetricFn,
    MinMaxScaler, ParallelTrainer, SequentialTrainer, SyncStrategy, TrainParams, Trainer,
    Verbosity,
};

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Benchmark sequential vs parallel logistic regression")]
struct Cli {
    /// Number of generated samples
    #[arg(long, default_value_t = 10_000)]
    rows: usize,
    /// Number of generated features (bias column excluded)
    #[arg(long, default_value_t = 4)]
    features: usize,
    /// Seed for data generation and the train/test split
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Label noise amplitude added to the generating score
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
    /// Fraction of rows held out for accuracy
    #[arg(long, default_value_t = 0.2)]
    test_fraction: f64,
    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,
    #[arg(long, default_value_t = 1000)]
    epochs: usize,
    /// Minibatch size; 0 trains the sequential reference on the full batch
    #[arg(long, default_value_t = 100)]
    batch_size: usize,
    #[arg(long, value_enum, default_value_t = StrategyArg::Accumulate)]
    strategy: StrategyArg,
    /// Worker threads for the parallel trainer (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Timed training calls per trainer
    #[arg(long, default_value_t = 1000)]
    repetitions: usize,
    /// Samples dropped from each end of the timings
    #[arg(long, default_value_t = 50)]
    trim: usize,
    #[arg(long, default_value_t = 0)]
    warmup: usize,
    /// Print the comparison as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Accumulate,
    PerBatch,
}

impl From<StrategyArg> for SyncStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Accumulate => SyncStrategy::AccumulateThenApply,
            StrategyArg::PerBatch => SyncStrategy::ApplyPerBatch,
        }
    }
}

fn verbosity(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Warning,
        1 => Verbosity::Info,
        _ => Verbosity::Debug,
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let level = match verbosity(cli.verbose) {
        Verbosity::Debug => log::LevelFilter::Debug,
        Verbosity::Info => log::LevelFilter::Info,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.rows == 0 {
        return Err(DatasetError::Empty.into());
    }
    let raw = synthetic_binary(cli.rows, cli.features, cli.seed, cli.noise);
    let (train, test) = raw.split(cli.test_fraction, cli.seed)?;
    let (scaler, train) = MinMaxScaler::fit_transform(&train);
    let test = scaler.transform(&test)?;
    log::info!(
        "{} train / {} test samples, {} features, {:.1}% positive",
        train.n_samples(),
        test.n_samples(),
        train.n_features(),
        100.0 * train.positive_rate()
    );

    let batch_mode = match cli.batch_size {
        0 => BatchMode::FullBatch,
        n => BatchMode::mini(n),
    };
    let params = TrainParams::builder()
        .learning_rate(cli.learning_rate)
        .n_epochs(cli.epochs)
        .batch_mode(batch_mode)
        .strategy(cli.strategy.into())
        .n_threads(cli.threads)
        .verbosity(verbosity(cli.verbose))
        .build()?;
    let bench_config = BenchmarkConfig::builder()
        .repetitions(cli.repetitions)
        .trim(cli.trim)
        .warmup(cli.warmup)
        .progress_every((cli.repetitions / 10).max(1))
        .build()?;

    let sequential = SequentialTrainer::new(params.clone());
    let parallel = ParallelTrainer::new(params.clone());

    let accuracy = Accuracy::default();
    for trainer in [&sequential as &dyn Trainer, &parallel] {
        let model = trainer.train(&train)?;
        let score = accuracy.evaluate(&test, &model)?;
        if !cli.json {
            println!("{:<26} test accuracy {:.2}%", trainer.name(), score);
        }
    }

    // Timed runs stay quiet; per-epoch logging would dominate the samples.
    let mut quiet = params;
    quiet.verbosity = Verbosity::Silent;
    let sequential = SequentialTrainer::new(quiet.clone());
    let parallel = ParallelTrainer::new(quiet);

    let comparison = BenchmarkHarness::new(bench_config).compare(
        &sequential,
        &parallel,
        &train,
        &mut LogProgress,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{}", comparison.sequential);
        println!("{}", comparison.parallel);
        println!(
            "speedup {:.2}x, max weight diff {:.3e}",
            comparison.speedup, comparison.max_weight_diff
        );
    }
    Ok(())
}
