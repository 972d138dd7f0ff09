//! Descriptive statistics for ubique values
//!
//! This crate provides lane-wise estimators built on the core reduction
//! kernel:
//! - `mean`: arithmetic mean
//! - `moment`: k-th central moment
//! - `kurtosis`: moment ratio with optional small-sample correction
//! - `median`: middle of the sorted lane
//!
//! All of them default to [`Dim::Rows`](ubique_core::Dim::Rows). A matrix
//! reduced along rows gives one value per row as a column matrix.
//!
//! # Non-finite results
//!
//! Zero-variance lanes and undersized corrected kurtosis produce NaN or an
//! infinity. These are returned as values; only structural problems (empty
//! input) are errors.
//!
//! # Examples
//!
//! ```rust
//! use ubique_core::{Dim, Value};
//! use ubique_stats::{median, moment};
//!
//! let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
//! assert_eq!(median(&m, None).unwrap(), Value::from_rows(vec![vec![5.0], vec![7.0]]).unwrap());
//!
//! let var = moment(&m, 2, Dim::Columns).unwrap();
//! assert_eq!(var, Value::from_rows(vec![vec![1.0, 1.0, 9.0]]).unwrap());
//! ```

pub mod central;
pub mod config;
pub mod kurtosis;

pub use central::{mean, median, moment};
pub use config::{BiasFlag, KurtosisOptions};
pub use kurtosis::kurtosis;
