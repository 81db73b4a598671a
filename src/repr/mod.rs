//! Trained model representations.

mod logistic;

pub use logistic::LogisticModel;
