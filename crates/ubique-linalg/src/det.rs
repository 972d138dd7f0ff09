//! Determinant through LU decomposition

use crate::lu::lu;
use num_traits::Float;
use ubique_core::{Result, Value};

/// Determinant of a square matrix
///
/// Computed as the product of the `U` diagonal times the permutation sign. A
/// negative-zero result is reported as zero. Input errors are those of
/// [`lu`](crate::lu()).
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_linalg::det;
///
/// let a = Value::from_rows(vec![vec![1.0, 5.0], vec![6.0, 2.0]]).unwrap();
/// assert_eq!(det(&a).unwrap(), -28.0);
///
/// let b = Value::from_rows(vec![vec![4.0, 8.0, 2.0], vec![4.0, 6.0, 8.0], vec![4.0, 2.0, 8.0]]).unwrap();
/// assert_eq!(det(&b).unwrap(), 96.0);
/// ```
pub fn det<T: Float>(x: &Value<T>) -> Result<T> {
    let d = lu(x)?.determinant();
    Ok(if d == T::zero() { T::zero() } else { d })
}
