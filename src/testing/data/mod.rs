use ndarray::{Array1, Array2, s};
use rand::prelude::*;

use crate::data::Dataset;

/// Generate random dense features, shape `[rows, cols]`.
///
/// Values are uniform in `[min, max]`.
pub fn random_features(rows: usize, cols: usize, seed: u64, min: f64, max: f64) -> Array2<f64> {
	assert!(max >= min);
	let mut rng = StdRng::seed_from_u64(seed);
	let width = max - min;
	Array2::from_shape_simple_fn((rows, cols), || min + rng.r#gen::<f64>() * width)
}

/// Generate a binary classification dataset from a random linear score.
///
/// Features are uniform in `[0, 1]` with a bias column prepended, so the
/// result has `cols + 1` columns. The label is `1.0` where
/// `Σ w_c (x_c - 0.5) + noise > 0`, with `w_c` uniform in `[-1, 1]` and noise
/// uniform in `[-noise_amplitude, noise_amplitude]`.
///
/// # Panics
///
/// Panics if `rows == 0`.
pub fn synthetic_binary(rows: usize, cols: usize, seed: u64, noise_amplitude: f64) -> Dataset {
	assert!(rows > 0, "synthetic dataset needs at least one row");
	let raw = random_features(rows, cols, seed, 0.0, 1.0);

	let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
	let weights: Vec<f64> = (0..cols).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();

	let labels: Array1<f64> = raw
		.outer_iter()
		.map(|x| {
			let mut score: f64 = x.iter().zip(&weights).map(|(v, w)| (v - 0.5) * w).sum();
			if noise_amplitude > 0.0 {
				score += (rng.r#gen::<f64>() * 2.0 - 1.0) * noise_amplitude;
			}
			if score > 0.0 { 1.0 } else { 0.0 }
		})
		.collect();

	let mut features = Array2::ones((rows, cols + 1));
	features.slice_mut(s![.., 1..]).assign(&raw);
	Dataset::from_parts_unchecked(features, labels)
}

/// Eight points on a line, separable at `x = 0`.
///
/// ```text
/// x: -1.0 -0.8 -0.6 -0.4 | 0.4 0.6 0.8 1.0
/// y:    0    0    0    0 |   1   1   1   1
/// ```
pub fn linearly_separable() -> Dataset {
	let xs = [-1.0, -0.8, -0.6, -0.4, 0.4, 0.6, 0.8, 1.0];
	let features = Array2::from_shape_fn((xs.len(), 2), |(r, c)| if c == 0 { 1.0 } else { xs[r] });
	let labels = xs.iter().map(|&x| if x > 0.0 { 1.0 } else { 0.0 }).collect();
	Dataset::from_parts_unchecked(features, labels)
}
