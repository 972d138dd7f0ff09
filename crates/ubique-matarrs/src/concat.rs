//! Horizontal and vertical concatenation
//!
//! Every operand is promoted with `to_matrix` first, so scalars count as 1x1
//! and vectors as single rows.

use ubique_core::{Error, Matrix, Result, Value};

/// Concatenate side by side; all operands need the same number of rows
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::horzcat;
///
/// let a = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
/// let b = Value::from_rows(vec![vec![-1, 3, -1], vec![4, 5, 9]]).unwrap();
/// assert_eq!(
///     horzcat(&[a, b]).unwrap().to_rows(),
///     vec![vec![5, 6, 5, -1, 3, -1], vec![7, 8, -1, 4, 5, 9]]
/// );
///
/// let scalars = [Value::scalar(5), Value::scalar(6), Value::scalar(7)];
/// assert_eq!(horzcat(&scalars).unwrap().to_rows(), vec![vec![5, 6, 7]]);
/// ```
pub fn horzcat<T: Clone>(parts: &[Value<T>]) -> Result<Matrix<T>> {
    let mats = promote(parts, "horzcat")?;
    let rows = mats[0].rows();
    if let Some(bad) = mats.iter().find(|m| m.rows() != rows) {
        return Err(Error::shape_mismatch(mats[0].shape(), bad.shape(), "horzcat"));
    }
    let joined: Vec<Vec<T>> = (0..rows)
        .map(|i| mats.iter().flat_map(|m| m.row(i).iter().cloned()).collect())
        .collect();
    Matrix::from_rows(joined)
}

/// Stack on top of each other; all operands need the same number of columns
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::vertcat;
///
/// let a = Value::vector(vec![5, 6]);
/// let b = Value::from_rows(vec![vec![7, 8], vec![9, 10]]).unwrap();
/// assert_eq!(vertcat(&[a, b]).unwrap().to_rows(), vec![vec![5, 6], vec![7, 8], vec![9, 10]]);
/// ```
pub fn vertcat<T: Clone>(parts: &[Value<T>]) -> Result<Matrix<T>> {
    let mats = promote(parts, "vertcat")?;
    let cols = mats[0].cols();
    if let Some(bad) = mats.iter().find(|m| m.cols() != cols) {
        return Err(Error::shape_mismatch(mats[0].shape(), bad.shape(), "vertcat"));
    }
    let joined: Vec<Vec<T>> = mats.iter().flat_map(|m| m.to_rows()).collect();
    Matrix::from_rows(joined)
}

fn promote<T: Clone>(parts: &[Value<T>], context: &str) -> Result<Vec<Matrix<T>>> {
    if parts.is_empty() {
        return Err(Error::not_enough_input(context));
    }
    Ok(parts.iter().map(Value::to_matrix).collect())
}
