//! Timing statistics.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Errors raised while summarizing timing samples.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("trimming {trim} from each end needs more than twice that many samples, got {n_samples}")]
    NotEnoughSamples { n_samples: usize, trim: usize },

    #[error("sample {index} is not a valid duration: {value}")]
    InvalidSample { index: usize, value: f64 },
}

/// Mean of `samples` after dropping the `trim` smallest and `trim` largest.
///
/// The input is left untouched; sorting happens on a copy.
///
/// # Errors
///
/// - [`StatsError::NotEnoughSamples`] if `samples.len() <= 2 * trim`
/// - [`StatsError::InvalidSample`] for NaN, infinite or negative values
///
/// # Example
///
/// ```
/// use parlogit::trimmed_mean;
///
/// let samples: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert_eq!(trimmed_mean(&samples, 1).unwrap(), 5.5);
/// assert!(trimmed_mean(&samples, 5).is_err());
/// ```
pub fn trimmed_mean(samples: &[f64], trim: usize) -> Result<f64, StatsError> {
    let n_samples = samples.len();
    if !keeps_samples(n_samples, trim) {
        return Err(StatsError::NotEnoughSamples { n_samples, trim });
    }
    validate(samples)?;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let kept = &sorted[trim..n_samples - trim];
    Ok(kept.iter().sum::<f64>() / kept.len() as f64)
}

/// Whether `n_samples > 2 * trim`, without overflowing for huge `trim`.
#[inline]
pub(crate) fn keeps_samples(n_samples: usize, trim: usize) -> bool {
    trim < n_samples.div_ceil(2)
}

fn validate(samples: &[f64]) -> Result<(), StatsError> {
    match samples
        .iter()
        .position(|v| !v.is_finite() || *v < 0.0)
    {
        Some(index) => Err(StatsError::InvalidSample {
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}

// =============================================================================
// TimingSamples
// =============================================================================

/// Per-run wall-clock durations in seconds, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSamples {
    seconds: Vec<f64>,
}

impl TimingSamples {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seconds: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, elapsed: Duration) {
        self.seconds.push(elapsed.as_secs_f64());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.seconds
    }

    /// Summary statistics, with the trimmed mean dropping `trim` from each end.
    pub fn summarize(&self, name: &str, trim: usize) -> Result<BenchmarkSummary, StatsError> {
        let trimmed_mean = trimmed_mean(&self.seconds, trim)?;

        let n = self.seconds.len();
        let mean = self.seconds.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            self.seconds.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let min = self.seconds.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.seconds.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Ok(BenchmarkSummary {
            name: name.to_string(),
            n_samples: n,
            trim,
            trimmed_mean,
            mean,
            std: variance.sqrt(),
            min,
            max,
        })
    }
}

impl From<Vec<f64>> for TimingSamples {
    fn from(seconds: Vec<f64>) -> Self {
        Self { seconds }
    }
}

// =============================================================================
// BenchmarkSummary
// =============================================================================

/// Statistics over one trainer's timing samples. All times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub name: String,
    pub n_samples: usize,
    pub trim: usize,
    pub trimmed_mean: f64,
    pub mean: f64,
    /// Sample standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<26} trimmed mean {:.6}s  (mean {:.6} ± {:.6}, min {:.6}, max {:.6}, n={}, trim={})",
            self.name,
            self.trimmed_mean,
            self.mean,
            self.std,
            self.min,
            self.max,
            self.n_samples,
            self.trim
        )
    }
}
