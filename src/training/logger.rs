//! Verbosity-gated training output.
//!
//! All messages go through the [`log`] facade with target `parlogit::training`,
//! so a binary chooses where they end up (the `compare` binary installs
//! `env_logger`). Nothing is emitted while the training loop holds a lock.

/// How much a trainer reports while it runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Only warnings.
    Warning,
    /// Start/finish lines plus log-loss every tenth of the run.
    Info,
    /// Log-loss after every epoch.
    Debug,
}

const TARGET: &str = "parlogit::training";

/// Emits progress for one training call.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    name: &'static str,
    n_epochs: usize,
    started: Option<std::time::Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity, name: &'static str) -> Self {
        Self {
            verbosity,
            name,
            n_epochs: 0,
            started: None,
        }
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn start_training(&mut self, n_epochs: usize, n_samples: usize, n_batches: usize) {
        self.n_epochs = n_epochs;
        self.started = Some(std::time::Instant::now());
        if self.verbosity >= Verbosity::Info {
            log::info!(
                target: TARGET,
                "[{}] training {} epochs on {} samples ({} batches/epoch)",
                self.name,
                n_epochs,
                n_samples,
                n_batches
            );
        }
    }

    /// Whether `epoch` (0-based) should be reported.
    ///
    /// Trainers check this first so the loss is only computed when it will be
    /// printed.
    pub fn wants_epoch(&self, epoch: usize) -> bool {
        match self.verbosity {
            Verbosity::Debug => true,
            Verbosity::Info => {
                let every = (self.n_epochs / 10).max(1);
                (epoch + 1) % every == 0 || epoch + 1 == self.n_epochs
            }
            _ => false,
        }
    }

    pub fn log_epoch(&self, epoch: usize, loss: f64) {
        match self.verbosity {
            Verbosity::Debug => log::debug!(
                target: TARGET,
                "[{}] epoch {}/{} logloss={:.6}",
                self.name,
                epoch + 1,
                self.n_epochs,
                loss
            ),
            Verbosity::Info => log::info!(
                target: TARGET,
                "[{}] epoch {}/{} logloss={:.6}",
                self.name,
                epoch + 1,
                self.n_epochs,
                loss
            ),
            _ => {}
        }
    }

    pub fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Warning {
            log::warn!(target: TARGET, "[{}] {}", self.name, message);
        }
    }

    pub fn finish_training(&self) {
        if self.verbosity < Verbosity::Info {
            return;
        }
        let elapsed = self.started.map(|t| t.elapsed().as_secs_f64()).unwrap_or(0.0);
        log::info!(
            target: TARGET,
            "[{}] finished {} epochs in {:.3}s",
            self.name,
            self.n_epochs,
            elapsed
        );
    }
}
