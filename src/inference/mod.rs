//! Logistic scoring.
//!
//! Maps a feature vector and a weight vector to a probability:
//!
//! ```text
//! predict(x, w) = sigmoid(x · w),   sigmoid(z) = 1 / (1 + e^-z)
//! ```
//!
//! Both functions are pure. Large `|z|` saturates to `0.0` or `1.0` rather than
//! overflowing. Passing vectors of different lengths is a caller bug and panics.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Logistic function.
///
/// Uses `e^z / (1 + e^z)` for negative `z` so `exp` never sees a large positive
/// argument.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Probability that `x` belongs to class 1 under weights `w`.
///
/// # Panics
///
/// Panics if `x.len() != w.len()`.
#[inline]
pub fn predict(x: ArrayView1<'_, f64>, w: ArrayView1<'_, f64>) -> f64 {
    assert_eq!(
        x.len(),
        w.len(),
        "feature vector length {} does not match weight vector length {}",
        x.len(),
        w.len()
    );
    sigmoid(x.dot(&w))
}

/// Probabilities for every row of `features` (`[n_samples, n_features]`).
///
/// # Panics
///
/// Panics if `features.ncols() != w.len()`.
pub fn predict_proba(features: ArrayView2<'_, f64>, w: ArrayView1<'_, f64>) -> Array1<f64> {
    assert_eq!(
        features.ncols(),
        w.len(),
        "feature matrix has {} columns but weight vector has length {}",
        features.ncols(),
        w.len()
    );
    features.dot(&w).mapv_into(sigmoid)
}
