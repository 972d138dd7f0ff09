//! LU decomposition with partial pivoting
//!
//! Row-by-row Gaussian elimination. The factors are packed into one matrix:
//! the strict lower triangle holds `L` (unit diagonal implied) and the upper
//! triangle holds `U`, so that `P * A = L * U` where `P` reorders rows as
//! given by `pivots`.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use ubique_core::{Error, Matrix, Result, Value};

/// Packed result of [`lu`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>"))]
pub struct LuDecomposition<T> {
    /// `L` below the diagonal, `U` on and above it
    pub lu: Matrix<T>,
    /// Row `i` of `L * U` is row `pivots[i]` of the input
    pub pivots: Vec<usize>,
    /// Permutation sign, flipped on every row swap
    pub sign: T,
}

impl<T: Float> LuDecomposition<T> {
    /// Unit lower-triangular factor
    pub fn lower(&self) -> Matrix<T> {
        let n = self.lu.rows();
        Matrix::from_fn(n, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[(i, j)],
            std::cmp::Ordering::Equal => T::one(),
            std::cmp::Ordering::Less => T::zero(),
        })
    }

    /// Upper-triangular factor
    pub fn upper(&self) -> Matrix<T> {
        let n = self.lu.rows();
        Matrix::from_fn(n, n, |i, j| if i <= j { self.lu[(i, j)] } else { T::zero() })
    }

    /// Product of the diagonal of `U` times the permutation sign
    pub fn determinant(&self) -> T {
        (0..self.lu.rows()).fold(self.sign, |acc, i| acc * self.lu[(i, i)])
    }

    /// Whether some pivot is exactly zero
    pub fn is_singular(&self) -> bool {
        (0..self.lu.rows()).any(|i| self.lu[(i, i)] == T::zero())
    }
}

/// Factor a square matrix
///
/// A scalar, a vector or a non-square matrix is a shape error; a 0x0 matrix
/// is an argument error. Singular input is factored anyway, leaving a zero
/// on the diagonal of `U`.
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_linalg::lu;
///
/// let a = Value::from_rows(vec![vec![1.0, 5.0], vec![6.0, 2.0]]).unwrap();
/// let f = lu(&a).unwrap();
/// assert_eq!(f.pivots, vec![1, 0]);
/// assert_eq!(f.sign, -1.0);
/// ```
pub fn lu<T: Float>(x: &Value<T>) -> Result<LuDecomposition<T>> {
    let m = square_matrix(x)?;
    let n = m.rows();
    let mut a = m.as_slice().to_vec();
    let mut pivots: Vec<usize> = (0..n).collect();
    let mut sign = T::one();

    for k in 0..n {
        // Largest magnitude in column k at or below the diagonal
        let mut p = k;
        let mut best = a[k * n + k].abs();
        for i in (k + 1)..n {
            let candidate = a[i * n + k].abs();
            if candidate > best {
                best = candidate;
                p = i;
            }
        }

        if p != k {
            for j in 0..n {
                a.swap(p * n + j, k * n + j);
            }
            pivots.swap(p, k);
            sign = -sign;
        }

        let pivot = a[k * n + k];
        if pivot == T::zero() {
            log::trace!("zero pivot in column {k}");
            continue;
        }
        for i in (k + 1)..n {
            let factor = a[i * n + k] / pivot;
            a[i * n + k] = factor;
            for j in (k + 1)..n {
                a[i * n + j] = a[i * n + j] - factor * a[k * n + j];
            }
        }
    }

    Ok(LuDecomposition {
        lu: Matrix::from_vec(n, n, a)?,
        pivots,
        sign,
    })
}

pub(crate) fn square_matrix<T>(x: &Value<T>) -> Result<&Matrix<T>> {
    let m = match x {
        Value::Matrix(m) => m,
        other => {
            log::debug!("expected a square matrix, got {:?}", other.kind());
            return Err(Error::Shape("Input must be a matrix".to_string()));
        }
    };
    if m.is_empty() {
        return Err(Error::not_enough_input("LU decomposition"));
    }
    if !m.shape().is_square() {
        return Err(Error::not_square(m.rows(), m.cols()));
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
        Matrix::from_fn(a.rows(), b.cols(), |i, j| {
            (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum()
        })
    }

    #[test]
    fn test_factors_reconstruct_permuted_input() {
        let rows = vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 4.0, 5.0],
            vec![1.0, 0.0, 6.0],
        ];
        let a = Value::from_rows(rows.clone()).unwrap();
        let f = lu(&a).unwrap();
        let product = matmul(&f.lower(), &f.upper());
        for (i, &p) in f.pivots.iter().enumerate() {
            for j in 0..3 {
                assert_relative_eq!(product[(i, j)], rows[p][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_pivoting_picks_largest() {
        let a = Value::from_rows(vec![vec![1.0, 5.0], vec![6.0, 2.0]]).unwrap();
        let f = lu(&a).unwrap();
        assert_eq!(f.lu[(0, 0)], 6.0);
        assert_relative_eq!(f.lu[(1, 0)], 1.0 / 6.0);
        assert_relative_eq!(f.determinant(), -28.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_input_factors() {
        let a = Value::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let f = lu(&a).unwrap();
        assert!(f.is_singular());
        assert_eq!(f.sign, 1.0);
    }

    #[test]
    fn test_rejects_non_matrices() {
        assert!(matches!(lu(&Value::scalar(2.0)), Err(Error::Shape(_))));
        assert!(matches!(lu(&Value::vector(vec![1.0, 2.0])), Err(Error::Shape(_))));
        let wide = Value::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert!(matches!(lu(&wide), Err(Error::Shape(_))));
        let empty: Value<f64> = Value::from_rows(vec![]).unwrap();
        assert!(matches!(lu(&empty), Err(Error::Argument(_))));
    }
}
