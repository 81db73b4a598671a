//! Gradient accumulation for batch gradient descent.
//!
//! For a batch of rows `[start, end)` the log-loss gradient is
//!
//! ```text
//! error_j      = predict(x_j, w) - y_j
//! gradient[k] += error_j × x_j[k]
//! ```
//!
//! and one update step is
//!
//! ```text
//! w[k] -= learning_rate × gradient[k] / count
//! ```
//!
//! where `count` is the number of rows that contributed to `gradient`. A
//! [`BatchGradient`] keeps the raw sum together with that count, so buffers
//! from several batches can be merged before a single update is applied.

use std::ops::Range;

use ndarray::{Array1, ArrayView1};

use crate::data::Dataset;
use crate::inference::predict;

/// Summed gradient over some rows, plus how many rows were summed.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGradient {
    sum: Array1<f64>,
    count: usize,
}

impl BatchGradient {
    /// Empty buffer for `n_features` weights.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            sum: Array1::zeros(n_features),
            count: 0,
        }
    }

    /// Gradient of rows `batch` under `weights`, in a fresh buffer.
    pub fn compute(dataset: &Dataset, batch: Range<usize>, weights: ArrayView1<'_, f64>) -> Self {
        let mut gradient = Self::zeros(dataset.n_features());
        gradient.accumulate(dataset, batch, weights);
        gradient
    }

    /// Add the gradient of rows `batch` under `weights` to this buffer.
    ///
    /// # Panics
    ///
    /// Panics if `batch` is out of bounds or widths differ.
    pub fn accumulate(
        &mut self,
        dataset: &Dataset,
        batch: Range<usize>,
        weights: ArrayView1<'_, f64>,
    ) {
        debug_assert_eq!(self.sum.len(), weights.len());
        let labels = dataset.labels();
        for row in batch {
            let x = dataset.row(row);
            let error = predict(x, weights) - labels[row];
            self.sum.scaled_add(error, &x);
            self.count += 1;
        }
    }

    /// Fold another buffer into this one.
    pub fn merge(&mut self, other: &BatchGradient) {
        self.sum += &other.sum;
        self.count += other.count;
    }

    /// Clear the buffer for reuse without reallocating.
    pub fn reset(&mut self) {
        self.sum.fill(0.0);
        self.count = 0;
    }

    /// Raw (unnormalized) gradient sum.
    #[inline]
    pub fn sum(&self) -> ArrayView1<'_, f64> {
        self.sum.view()
    }

    /// Number of rows accumulated.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply `w -= learning_rate × sum / count`. No-op for an empty buffer.
    pub fn apply(&self, weights: &mut Array1<f64>, learning_rate: f64) {
        if self.count == 0 {
            return;
        }
        let step = -learning_rate / self.count as f64;
        weights.scaled_add(step, &self.sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn toy() -> Dataset {
        Dataset::new(
            array![[1.0, 2.0], [1.0, -1.0], [1.0, 0.5]],
            array![1.0, 0.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn zero_weights_give_half_minus_label_errors() {
        let ds = toy();
        let w = Array1::zeros(2);
        let g = BatchGradient::compute(&ds, 0..3, w.view());

        // errors: -0.5, 0.5, -0.5
        assert_eq!(g.count(), 3);
        assert_abs_diff_eq!(g.sum()[0], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g.sum()[1], -0.5 * 2.0 + 0.5 * -1.0 - 0.5 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn merge_equals_single_pass() {
        let ds = toy();
        let w = array![0.3, -0.2];

        let whole = BatchGradient::compute(&ds, 0..3, w.view());
        let mut merged = BatchGradient::compute(&ds, 0..1, w.view());
        merged.merge(&BatchGradient::compute(&ds, 1..3, w.view()));

        assert_eq!(merged.count(), whole.count());
        for k in 0..2 {
            assert_abs_diff_eq!(merged.sum()[k], whole.sum()[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn apply_divides_by_count() {
        let mut g = BatchGradient::zeros(2);
        g.sum = array![4.0, -2.0];
        g.count = 2;

        let mut w = array![1.0, 1.0];
        g.apply(&mut w, 0.5);
        // w -= 0.5 * [4, -2] / 2
        assert_abs_diff_eq!(w[0], 0.0);
        assert_abs_diff_eq!(w[1], 1.5);
    }

    #[test]
    fn apply_on_empty_is_noop() {
        let g = BatchGradient::zeros(2);
        let mut w = array![0.25, -0.75];
        g.apply(&mut w, 1.0);
        assert_eq!(w, array![0.25, -0.75]);
    }

    #[test]
    fn reset_clears_sum_and_count() {
        let ds = toy();
        let mut g = BatchGradient::compute(&ds, 0..3, Array1::zeros(2).view());
        g.reset();
        assert_eq!(g, BatchGradient::zeros(2));
    }
}
