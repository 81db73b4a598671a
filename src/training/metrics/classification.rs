//! Classification metrics.

use ndarray::ArrayView1;

use super::{EvalError, MetricFn, check_lengths};

// =============================================================================
// Accuracy
// =============================================================================

/// Percentage of rows whose thresholded prediction matches the label.
///
/// `p >= threshold` predicts class 1. The result lies in `[0, 100]`.
/// Higher is better.
#[derive(Debug, Clone, Copy)]
pub struct Accuracy {
    pub threshold: f64,
}

impl Default for Accuracy {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Accuracy {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl MetricFn for Accuracy {
    fn compute(
        &self,
        probabilities: ArrayView1<'_, f64>,
        labels: ArrayView1<'_, f64>,
    ) -> Result<f64, EvalError> {
        check_lengths(probabilities, labels)?;

        let correct = probabilities
            .iter()
            .zip(labels.iter())
            .filter(|&(&p, &l)| {
                let predicted = if p >= self.threshold { 1.0 } else { 0.0 };
                (predicted - l).abs() < 0.5
            })
            .count();

        Ok(100.0 * correct as f64 / labels.len() as f64)
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }

    fn higher_is_better(&self) -> bool {
        true
    }
}

// =============================================================================
// LogLoss (Binary Cross-Entropy)
// =============================================================================

/// Binary cross-entropy: -mean(y*log(p) + (1-y)*log(1-p))
///
/// Probabilities are clamped to `[1e-15, 1 - 1e-15]`. Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLoss;

impl MetricFn for LogLoss {
    fn compute(
        &self,
        probabilities: ArrayView1<'_, f64>,
        labels: ArrayView1<'_, f64>,
    ) -> Result<f64, EvalError> {
        check_lengths(probabilities, labels)?;
        Ok(mean_log_loss(probabilities, labels))
    }

    fn name(&self) -> &'static str {
        "logloss"
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}

/// Unchecked log-loss, for trainer logging where lengths are known to match.
pub(crate) fn mean_log_loss(probabilities: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64 {
    const EPS: f64 = 1e-15;

    if labels.is_empty() {
        return 0.0;
    }
    let sum: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &l)| {
            let p = p.clamp(EPS, 1.0 - EPS);
            -(l * p.ln() + (1.0 - l) * (1.0 - p).ln())
        })
        .sum();
    sum / labels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn accuracy_all_correct_is_100() {
        let p = array![0.9, 0.1, 0.7, 0.2];
        let y = array![1.0, 0.0, 1.0, 0.0];
        assert_eq!(Accuracy::default().compute(p.view(), y.view()).unwrap(), 100.0);
    }

    #[test]
    fn accuracy_all_wrong_is_0() {
        let p = array![0.1, 0.9];
        let y = array![1.0, 0.0];
        assert_eq!(Accuracy::default().compute(p.view(), y.view()).unwrap(), 0.0);
    }

    #[test]
    fn accuracy_threshold_is_inclusive() {
        let p = array![0.5];
        let y = array![1.0];
        assert_eq!(Accuracy::default().compute(p.view(), y.view()).unwrap(), 100.0);
        assert_eq!(
            Accuracy::with_threshold(0.6).compute(p.view(), y.view()).unwrap(),
            0.0
        );
    }

    #[test]
    fn accuracy_partial() {
        let p = array![0.9, 0.9, 0.1, 0.1];
        let y = array![1.0, 0.0, 0.0, 0.0];
        assert_abs_diff_eq!(
            Accuracy::default().compute(p.view(), y.view()).unwrap(),
            75.0
        );
    }

    #[test]
    fn empty_is_error() {
        let p = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(
            Accuracy::default().compute(p.view(), p.view()),
            Err(EvalError::EmptyDataset)
        );
        assert_eq!(LogLoss.compute(p.view(), p.view()), Err(EvalError::EmptyDataset));
    }

    #[test]
    fn length_mismatch_is_error() {
        let p = array![0.5, 0.5];
        let y = array![1.0];
        assert_eq!(
            LogLoss.compute(p.view(), y.view()),
            Err(EvalError::LengthMismatch {
                predictions: 2,
                labels: 1
            })
        );
    }

    #[test]
    fn logloss_at_half_is_ln2() {
        let p = array![0.5, 0.5];
        let y = array![1.0, 0.0];
        assert_abs_diff_eq!(
            LogLoss.compute(p.view(), y.view()).unwrap(),
            std::f64::consts::LN_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn logloss_clamps_certain_mistakes() {
        let p = array![0.0];
        let y = array![1.0];
        let loss = LogLoss.compute(p.view(), y.view()).unwrap();
        assert!(loss.is_finite());
        assert!(loss > 30.0);
    }
}
