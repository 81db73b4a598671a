//! Common utilities used across the crate.
//!
//! This module provides the parallelism flag and thread pool setup shared by
//! the parallel trainer, the benchmark harness and the `compare` binary.

use rayon::prelude::*;

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// This is a simple flag passed into the epoch loop. When `Parallel`, batches
/// are fanned out with `rayon` parallel iterators; when `Sequential`, they run
/// inline on the calling thread in batch order.
///
/// The thread pool itself is set up once per training call by
/// [`run_with_threads`]. Code that receives a `Parallelism` never builds pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if the rayon pool has multiple threads, sequential otherwise)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    #[inline]
    pub fn maybe_par_for_each<T, I, F>(self, iter: I, f: F)
    where
        T: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().for_each(f);
        } else {
            iter.into_iter().for_each(f);
        }
    }

    /// Map in parallel, keeping the input order in the output.
    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}

// =============================================================================
// Thread Pool Setup
// =============================================================================

/// Run a closure with the appropriate thread pool.
///
/// Thread count semantics:
/// - `0` = auto (run on the current rayon pool)
/// - `1` = sequential (no thread pool)
/// - `n > 1` = use exactly `n` threads, building a pool only if the current
///   one has a different size
///
/// # Errors
///
/// Returns the rayon error if a dedicated pool cannot be built.
///
/// # Example
///
/// ```
/// use parlogit::run_with_threads;
///
/// let threads = run_with_threads(2, |_| rayon::current_num_threads()).unwrap();
/// assert_eq!(threads, 2);
///
/// let sequential = run_with_threads(1, |p| p.is_parallel()).unwrap();
/// assert!(!sequential);
/// ```
pub fn run_with_threads<T: Send>(
    n_threads: usize,
    f: impl FnOnce(Parallelism) -> T + Send,
) -> Result<T, rayon::ThreadPoolBuildError> {
    let parallelism = Parallelism::from_threads(n_threads);

    match parallelism {
        Parallelism::Sequential => Ok(f(Parallelism::Sequential)),
        Parallelism::Parallel if n_threads == 0 || rayon::current_num_threads() == n_threads => {
            Ok(f(Parallelism::Parallel))
        }
        Parallelism::Parallel => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()?;
            Ok(pool.install(|| f(Parallelism::Parallel)))
        }
    }
}
