//! Shape inspection

use ubique_core::{Error, Result, Shape, Value};

/// Rows and columns of `x`; a vector is 1xN and a scalar 1x1
pub fn size<T>(x: &Value<T>) -> Shape {
    x.shape()
}

/// Number of rows; a scalar or vector counts as one row
pub fn nrows<T>(x: &Value<T>) -> usize {
    x.shape().rows
}

/// Number of columns of a vector or matrix
///
/// A scalar has no columns to count and is an argument error.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::ncols;
///
/// assert_eq!(ncols(&Value::vector(vec![5, 6, 7])).unwrap(), 3);
/// assert!(ncols(&Value::scalar(5)).is_err());
/// ```
pub fn ncols<T>(x: &Value<T>) -> Result<usize> {
    match x {
        Value::Scalar(_) => Err(Error::Argument("Input must be an array or matrix".into())),
        other => Ok(other.shape().cols),
    }
}

/// Total number of elements
pub fn numel<T>(x: &Value<T>) -> usize {
    x.numel()
}

/// Whether `x` is a single-column matrix
///
/// Only non-empty matrices can be tested; anything else is an argument
/// error.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::iscolumn;
///
/// assert!(iscolumn(&Value::from_rows(vec![vec![2], vec![2]]).unwrap()).unwrap());
/// assert!(!iscolumn(&Value::from_rows(vec![vec![2, 2]]).unwrap()).unwrap());
/// assert!(iscolumn(&Value::scalar(5)).is_err());
/// ```
pub fn iscolumn<T>(x: &Value<T>) -> Result<bool> {
    match x {
        Value::Matrix(m) if !m.is_empty() => Ok(m.cols() == 1),
        _ => Err(Error::Argument("Input must be a non-empty matrix".into())),
    }
}
