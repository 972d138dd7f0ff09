//! Core value model and broadcasting kernel for the ubique helpers
//!
//! This crate provides the foundation every other ubique crate builds on:
//!
//! 1. **Data model** - [`Value`] is a closed `Scalar | Vector | Matrix` type,
//!    classified once at construction. [`Matrix`] cannot hold ragged rows.
//! 2. **Kernel** - [`broadcast`], [`reduce_axis`] and [`map_axis`] define how
//!    a scalar operation is applied across shapes and axes.
//! 3. **Errors** - a single [`Error`] taxonomy (`Argument`, `Shape`, `Format`)
//!    shared by the whole workspace.
//!
//! All functions are pure; nothing here holds state between calls.
//!
//! # Example
//!
//! ```rust
//! use ubique_core::{broadcast, reduce_axis, Dim, Value};
//!
//! let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
//!
//! // Element-wise against a scalar
//! let shifted = broadcast(&m, &Value::scalar(1.0), |a, b| a + b).unwrap();
//! assert_eq!(shifted.shape().cols, 3);
//!
//! // Per-column maximum
//! let max = reduce_axis(&m, Dim::Columns, |lane| lane.iter().cloned().fold(f64::MIN, f64::max)).unwrap();
//! assert_eq!(max, Value::from_rows(vec![vec![7.0, 8.0, 5.0]]).unwrap());
//! ```

pub mod error;
pub mod kernel;
pub mod matrix;
pub mod shape;
pub mod utils;
pub mod value;

// Re-export core types
pub use error::{Error, Result};
pub use kernel::{broadcast, map_axis, reduce_axis};
pub use matrix::Matrix;
pub use shape::{Dim, Shape, ShapeKind};
pub use value::Value;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        broadcast, map_axis, reduce_axis, Dim, Error, Matrix, Result, Shape, ShapeKind, Value,
    };
}
