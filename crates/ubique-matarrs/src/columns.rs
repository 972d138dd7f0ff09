//! Column extraction and replacement

use ubique_core::{Error, Matrix, Result, Value};

/// Column `n` (0-based) of `x` as a vector
///
/// A vector is treated as a single row, so its columns are its elements.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::getcol;
///
/// let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
/// assert_eq!(getcol(&m, 1).unwrap(), vec![6, 8]);
/// ```
pub fn getcol<T: Clone>(x: &Value<T>, n: usize) -> Result<Vec<T>> {
    let m = x.to_matrix();
    if n >= m.cols() {
        log::debug!("getcol({n}) on {}", m.shape());
        return Err(Error::index_out_of_bounds(n, m.cols(), "Column"));
    }
    Ok(m.column(n))
}

/// Replace column `n` of `mat` with `col`
///
/// `col` must have one entry per matrix row.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_matarrs::setcol;
///
/// let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
/// let r = setcol(&[9, 21], &m, 2).unwrap();
/// assert_eq!(r.to_rows(), vec![vec![5, 6, 9], vec![7, 8, 21]]);
/// ```
pub fn setcol<T: Clone>(col: &[T], mat: &Value<T>, n: usize) -> Result<Matrix<T>> {
    let m = match mat {
        Value::Matrix(m) => m,
        _ => return Err(Error::Argument("Input matrix must be a 2D array".into())),
    };
    if n >= m.cols() {
        return Err(Error::index_out_of_bounds(n, m.cols(), "Column"));
    }
    if col.len() != m.rows() {
        return Err(Error::Shape(format!(
            "Column vector length must match the number of matrix rows: {} vs {}",
            col.len(),
            m.rows()
        )));
    }
    Ok(Matrix::from_fn(m.rows(), m.cols(), |i, j| {
        if j == n {
            col[i].clone()
        } else {
            m[(i, j)].clone()
        }
    }))
}
