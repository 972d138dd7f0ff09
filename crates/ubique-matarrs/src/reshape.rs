//! Reshaping: transpose, flatten, flip and matrix promotion

use ubique_core::{Dim, Matrix, Value};

/// Swap rows and columns
///
/// A vector becomes an Nx1 column matrix; a scalar is returned unchanged.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::transpose;
///
/// let t = transpose(&Value::vector(vec![1, 2]));
/// assert_eq!(t, Value::from_rows(vec![vec![1], vec![2]]).unwrap());
/// ```
pub fn transpose<T: Clone>(x: &Value<T>) -> Value<T> {
    match x {
        Value::Scalar(_) => x.clone(),
        Value::Vector(v) => Value::Matrix(Matrix::column_vector(v.clone())),
        Value::Matrix(m) => Value::Matrix(m.transpose()),
    }
}

/// Concatenate the lanes of a matrix into a vector
///
/// [`Dim::Rows`] (the default) concatenates row after row, [`Dim::Columns`]
/// column after column. Scalars and vectors are returned unchanged.
///
/// ```rust
/// use ubique_core::{Dim, Value};
/// use ubique_matarrs::flatten;
///
/// let m = Value::from_rows(vec![vec![1, 1, -1], vec![1, -2, 3], vec![2, 3, 1]]).unwrap();
/// assert_eq!(flatten(&m, None), Value::vector(vec![1, 1, -1, 1, -2, 3, 2, 3, 1]));
/// assert_eq!(flatten(&m, Dim::Columns), Value::vector(vec![1, 1, 2, 1, -2, 3, -1, 3, 1]));
/// ```
pub fn flatten<T: Clone>(x: &Value<T>, dim: impl Into<Option<Dim>>) -> Value<T> {
    match x {
        Value::Matrix(m) => match dim.into().unwrap_or(Dim::Rows) {
            Dim::Rows => Value::Vector(m.as_slice().to_vec()),
            Dim::Columns => Value::Vector(m.transpose().into_vec()),
        },
        other => other.clone(),
    }
}

/// Reverse the order of the rows
///
/// Scalars and vectors (a single row) are returned unchanged.
pub fn flipud<T: Clone>(x: &Value<T>) -> Value<T> {
    match x {
        Value::Matrix(m) => {
            let rows = m.rows();
            Value::Matrix(Matrix::from_fn(rows, m.cols(), |i, j| {
                m[(rows - 1 - i, j)].clone()
            }))
        }
        other => other.clone(),
    }
}

/// Promote to a matrix: a scalar becomes 1x1, a vector a single row
pub fn tomat<T: Clone>(x: &Value<T>) -> Matrix<T> {
    x.to_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value<i32> {
        Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap()
    }

    #[test]
    fn test_transpose() {
        assert_eq!(
            transpose(&sample()),
            Value::from_rows(vec![vec![5, 7], vec![6, 8], vec![5, -1]]).unwrap()
        );
        assert_eq!(transpose(&Value::scalar(3)), Value::scalar(3));
        assert_eq!(transpose(&transpose(&sample())), sample());
    }

    #[test]
    fn test_flatten() {
        let m = Value::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        assert_eq!(flatten(&m, Dim::Rows), Value::vector(vec![5, 6, 7, 8]));
        assert_eq!(flatten(&m, Dim::Columns), Value::vector(vec![5, 7, 6, 8]));
        assert_eq!(flatten(&Value::vector(vec![1, 2]), None), Value::vector(vec![1, 2]));
    }

    #[test]
    fn test_flipud() {
        let m = Value::from_rows(vec![vec![1, 4], vec![2, 5], vec![3, 6]]).unwrap();
        assert_eq!(
            flipud(&m),
            Value::from_rows(vec![vec![3, 6], vec![2, 5], vec![1, 4]]).unwrap()
        );
        assert_eq!(flipud(&Value::scalar(5)), Value::scalar(5));
    }

    #[test]
    fn test_tomat() {
        assert_eq!(tomat(&Value::scalar(true)).to_rows(), vec![vec![true]]);
        assert_eq!(tomat(&Value::vector(vec![5, 6, 3])).to_rows(), vec![vec![5, 6, 3]]);
        assert_eq!(
            tomat(&Value::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()).to_rows(),
            vec![vec![1, 2], vec![3, 4]]
        );
    }
}
