//! Contiguous minibatch partitioning.
//!
//! Splits `[0, n_samples)` into `ceil(n_samples / batch_size)` half-open ranges:
//!
//! ```text
//! n_samples = 10, batch_size = 4
//!
//! [0, 4)  [4, 8)  [8, 10)
//! ```
//!
//! Ranges are contiguous, pairwise disjoint and cover every row exactly once.
//! Only the last range can be shorter than `batch_size`. Batches are computed
//! on demand from `(n_samples, batch_size)`, so the partition costs nothing to
//! recreate each epoch.

use std::ops::Range;

use super::params::ConfigError;

/// Partition of `[0, n_samples)` into fixed-size contiguous batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minibatches {
    n_samples: usize,
    batch_size: usize,
}

impl Minibatches {
    /// Partition `n_samples` rows into batches of `batch_size`.
    ///
    /// A dataset smaller than one batch yields a single batch holding every row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBatchSize`] if `batch_size == 0`.
    pub fn new(n_samples: usize, batch_size: usize) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(Self {
            n_samples,
            batch_size,
        })
    }

    /// A single batch covering all rows.
    pub fn full(n_samples: usize) -> Self {
        Self {
            n_samples,
            batch_size: n_samples.max(1),
        }
    }

    /// Number of rows being partitioned.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Configured batch size (the last batch may be shorter).
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches: `ceil(n_samples / batch_size)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_samples.div_ceil(self.batch_size)
    }

    /// `true` when there are no rows to partition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_samples == 0
    }

    /// Row range of batch `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn batch(&self, index: usize) -> Range<usize> {
        assert!(
            index < self.len(),
            "batch index {} out of range for {} batches",
            index,
            self.len()
        );
        let start = index * self.batch_size;
        let end = (start + self.batch_size).min(self.n_samples);
        start..end
    }

    /// Iterate batch ranges in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Range<usize>> + Clone + use<> {
        let this = *self;
        (0..this.len()).map(move |i| this.batch(i))
    }

    /// Collect all batch ranges.
    pub fn ranges(&self) -> Vec<Range<usize>> {
        self.iter().collect()
    }
}
