//! Min-max feature scaling.
//!
//! Rescales every non-bias column to `[0, 1]` using the column range observed
//! on the fitting dataset: `x' = (x - min) / (max - min)`. A constant column has
//! no range and is mapped to `0.0` instead of dividing by zero.

use ndarray::{Array1, Axis};

use super::{BIAS_COLUMN, Dataset, DatasetError};

/// Per-column min/max learned from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    min: Array1<f64>,
    max: Array1<f64>,
}

impl MinMaxScaler {
    /// Learn column ranges from `dataset`.
    pub fn fit(dataset: &Dataset) -> Self {
        let features = dataset.features();
        let min = features.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));
        let max = features.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x));
        Self { min, max }
    }

    /// Number of columns this scaler was fitted on (bias included).
    pub fn n_features(&self) -> usize {
        self.min.len()
    }

    /// Column minimums.
    pub fn min(&self) -> &Array1<f64> {
        &self.min
    }

    /// Column maximums.
    pub fn max(&self) -> &Array1<f64> {
        &self.max
    }

    /// Apply the learned scaling, leaving the bias column untouched.
    ///
    /// Values outside the fitted range (e.g. on a held-out split) map outside
    /// `[0, 1]`; they are not clipped.
    pub fn transform(&self, dataset: &Dataset) -> Result<Dataset, DatasetError> {
        if dataset.n_features() != self.n_features() {
            return Err(DatasetError::FeatureCountMismatch {
                expected: self.n_features(),
                got: dataset.n_features(),
            });
        }
        Ok(self.scale(dataset))
    }

    /// Fit on `dataset` and return it scaled.
    pub fn fit_transform(dataset: &Dataset) -> (Self, Dataset) {
        let scaler = Self::fit(dataset);
        let scaled = scaler.scale(dataset);
        (scaler, scaled)
    }

    fn scale(&self, dataset: &Dataset) -> Dataset {
        let mut features = dataset.features().to_owned();
        for (column, mut values) in features.axis_iter_mut(Axis(1)).enumerate() {
            if column == BIAS_COLUMN {
                continue;
            }
            let lo = self.min[column];
            let range = self.max[column] - lo;
            if range > 0.0 {
                values.mapv_inplace(|x| (x - lo) / range);
            } else {
                values.fill(0.0);
            }
        }

        Dataset::from_parts_unchecked(features, dataset.labels().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn scales_columns_to_unit_range() {
        let ds = Dataset::new(
            array![[1.0, 2.0, 10.0], [1.0, 4.0, 30.0], [1.0, 3.0, 20.0]],
            array![0.0, 1.0, 1.0],
        )
        .unwrap();

        let (scaler, scaled) = MinMaxScaler::fit_transform(&ds);
        assert_eq!(scaler.min(), &array![1.0, 2.0, 10.0]);
        assert_eq!(scaler.max(), &array![1.0, 4.0, 30.0]);

        let f = scaled.features();
        assert_abs_diff_eq!(f[[0, 1]], 0.0);
        assert_abs_diff_eq!(f[[1, 1]], 1.0);
        assert_abs_diff_eq!(f[[2, 1]], 0.5);
        assert_abs_diff_eq!(f[[2, 2]], 0.5);
    }

    #[test]
    fn keeps_bias_and_labels() {
        let ds = Dataset::new(array![[1.0, 5.0], [1.0, 7.0]], array![1.0, 0.0]).unwrap();
        let (_, scaled) = MinMaxScaler::fit_transform(&ds);
        assert_eq!(scaled.features().column(0).to_vec(), vec![1.0, 1.0]);
        assert_eq!(scaled.labels(), ds.labels());
    }

    #[test]
    fn constant_column_maps_to_zero() {
        let ds = Dataset::new(array![[1.0, 3.0], [1.0, 3.0]], array![1.0, 0.0]).unwrap();
        let (_, scaled) = MinMaxScaler::fit_transform(&ds);
        assert_eq!(scaled.features().column(1).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn transform_rejects_wrong_width() {
        let ds = Dataset::new(array![[1.0, 3.0]], array![1.0]).unwrap();
        let other = Dataset::new(array![[1.0, 3.0, 4.0]], array![1.0]).unwrap();
        let scaler = MinMaxScaler::fit(&ds);
        assert_eq!(
            scaler.transform(&other).unwrap_err(),
            DatasetError::FeatureCountMismatch {
                expected: 2,
                got: 3
            }
        );
    }
}
