//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use ubique::{Result, Value};

pub const EPSILON: f64 = 1e-10;

/// The 2x3 matrix used throughout the doc examples
pub fn sample_matrix() -> Result<Value<f64>> {
    Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]])
}

/// Daily returns of two assets, ten observations each
pub fn returns() -> (Vec<f64>, Vec<f64>) {
    (
        vec![0.003, 0.026, 0.015, -0.009, 0.014, 0.024, 0.015, 0.066, -0.014, 0.039],
        vec![-0.005, 0.081, 0.04, -0.037, -0.061, 0.058, -0.049, -0.021, 0.062, 0.058],
    )
}

/// Unwrap a one-element result into its scalar
pub fn scalar(v: Value<f64>) -> f64 {
    v.into_scalar().expect("single value")
}
