//! Test and benchmark support.
//!
//! Seeded dataset generators shared by unit tests, integration tests, the
//! criterion benches and the `compare` binary. Everything here is
//! deterministic for a given seed.

pub mod data;

pub use data::{linearly_separable, random_features, synthetic_binary};
