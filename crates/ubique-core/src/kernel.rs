//! Broadcasting and axis-wise reduction kernel
//!
//! Every numeric helper in the workspace is expressed through three
//! operations defined here:
//!
//! - [`broadcast`] pairs two values element-wise under the scalar/vector/matrix
//!   broadcasting rules
//! - [`reduce_axis`] collapses each row or column of a matrix to one value
//! - [`map_axis`] transforms each row or column of a matrix into a new lane
//!
//! Element-wise unary application is [`Value::map`].
//!
//! # Broadcasting rules
//!
//! | left \ right | Scalar | Vector | Matrix |
//! |--------------|--------|--------|--------|
//! | Scalar | Scalar | Vector | Matrix |
//! | Vector | Vector | Vector (equal length) | Matrix (row length = vector length) |
//! | Matrix | Matrix | Matrix (row length = vector length) | Matrix (equal shape) |
//!
//! Any other combination fails with [`Error::Shape`]. No padding or
//! truncation is ever applied.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::shape::Dim;
use crate::value::Value;

/// Combine `x` and `y` element-wise with `f`
///
/// # Examples
///
/// ```rust
/// use ubique_core::{broadcast, Value};
///
/// let x = Value::scalar(5.0);
/// let y = Value::vector(vec![5.0, 6.0, 3.0]);
/// let ge = broadcast(&x, &y, |a, b| a >= b).unwrap();
/// assert_eq!(ge, Value::vector(vec![true, false, true]));
/// ```
pub fn broadcast<A, B, C, F>(x: &Value<A>, y: &Value<B>, f: F) -> Result<Value<C>>
where
    F: Fn(&A, &B) -> C,
{
    log::trace!("broadcast {:?} x {:?}", x.shape(), y.shape());
    match (x, y) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(f(a, b))),
        (Value::Scalar(a), other) => Ok(other.map(|b| f(a, b))),
        (other, Value::Scalar(b)) => Ok(other.map(|a| f(a, b))),
        (Value::Vector(a), Value::Vector(b)) => {
            if a.len() != b.len() {
                log::debug!("vector length mismatch: {} vs {}", a.len(), b.len());
                return Err(Error::shape_mismatch(x.shape(), y.shape(), "broadcast"));
            }
            Ok(Value::Vector(a.iter().zip(b).map(|(a, b)| f(a, b)).collect()))
        }
        (Value::Matrix(a), Value::Matrix(b)) => {
            if a.shape() != b.shape() {
                log::debug!("matrix shape mismatch: {} vs {}", a.shape(), b.shape());
                return Err(Error::shape_mismatch(a.shape(), b.shape(), "broadcast"));
            }
            let data = a
                .as_slice()
                .iter()
                .zip(b.as_slice())
                .map(|(a, b)| f(a, b))
                .collect();
            Matrix::from_vec(a.rows(), a.cols(), data).map(Value::Matrix)
        }
        (Value::Vector(v), Value::Matrix(m)) => {
            check_row_broadcast(v.len(), m, x, y)?;
            Ok(Value::Matrix(Matrix::from_fn(m.rows(), m.cols(), |i, j| {
                f(&v[j], &m[(i, j)])
            })))
        }
        (Value::Matrix(m), Value::Vector(v)) => {
            check_row_broadcast(v.len(), m, x, y)?;
            Ok(Value::Matrix(Matrix::from_fn(m.rows(), m.cols(), |i, j| {
                f(&m[(i, j)], &v[j])
            })))
        }
    }
}

fn check_row_broadcast<T, A, B>(
    len: usize,
    m: &Matrix<T>,
    x: &Value<A>,
    y: &Value<B>,
) -> Result<()> {
    if len != m.cols() {
        log::debug!("vector of length {len} cannot broadcast over rows of {}", m.shape());
        return Err(Error::shape_mismatch(x.shape(), y.shape(), "row broadcast"));
    }
    Ok(())
}

/// Reduce each lane of `x` to a single value
///
/// - a scalar is returned unchanged
/// - a vector is reduced as a whole and `dim` is ignored
/// - an R x C matrix reduced along [`Dim::Rows`] gives an R x 1 column,
///   along [`Dim::Columns`] a 1 x C row
///
/// Empty input is an [`Error::Argument`].
///
/// # Examples
///
/// ```rust
/// use ubique_core::{reduce_axis, Dim, Value};
///
/// let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
/// let sums = reduce_axis(&m, Dim::Rows, |lane| lane.iter().sum()).unwrap();
/// assert_eq!(sums, Value::from_rows(vec![vec![16.0], vec![14.0]]).unwrap());
/// ```
pub fn reduce_axis<T, F>(x: &Value<T>, dim: Dim, f: F) -> Result<Value<T>>
where
    T: Clone,
    F: Fn(&[T]) -> T,
{
    log::trace!("reduce_axis {:?} along {dim}", x.shape());
    match x {
        Value::Scalar(_) => Ok(x.clone()),
        Value::Vector(v) => {
            if v.is_empty() {
                return Err(Error::not_enough_input("axis reduction"));
            }
            Ok(Value::Scalar(f(v.as_slice())))
        }
        Value::Matrix(m) => {
            if m.is_empty() {
                return Err(Error::not_enough_input("axis reduction"));
            }
            match dim {
                Dim::Rows => {
                    let out: Vec<T> = m.iter_rows().map(&f).collect();
                    Ok(Value::Matrix(Matrix::column_vector(out)))
                }
                Dim::Columns => {
                    let out: Vec<T> = m.columns().iter().map(|c| f(c.as_slice())).collect();
                    Ok(Value::Matrix(Matrix::row_vector(out)))
                }
            }
        }
    }
}

/// Transform each lane of `x` into a new lane
///
/// - a scalar is returned unchanged
/// - a vector is transformed as a whole and `dim` is ignored
/// - along [`Dim::Rows`] the result has one row per input row, along
///   [`Dim::Columns`] one row per input column
///
/// Lanes that come back with different lengths are an [`Error::Shape`];
/// empty input is an [`Error::Argument`].
///
/// # Examples
///
/// ```rust
/// use ubique_core::{map_axis, Dim, Value};
///
/// let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
/// let reversed = map_axis(&m, Dim::Columns, |lane| lane.iter().rev().copied().collect()).unwrap();
/// assert_eq!(reversed, Value::from_rows(vec![vec![7, 5], vec![8, 6], vec![-1, 5]]).unwrap());
/// ```
pub fn map_axis<T, F>(x: &Value<T>, dim: Dim, f: F) -> Result<Value<T>>
where
    T: Clone,
    F: Fn(&[T]) -> Vec<T>,
{
    log::trace!("map_axis {:?} along {dim}", x.shape());
    match x {
        Value::Scalar(_) => Ok(x.clone()),
        Value::Vector(v) => {
            if v.is_empty() {
                return Err(Error::not_enough_input("axis map"));
            }
            Ok(Value::Vector(f(v.as_slice())))
        }
        Value::Matrix(m) => {
            if m.is_empty() {
                return Err(Error::not_enough_input("axis map"));
            }
            let lanes: Vec<Vec<T>> = match dim {
                Dim::Rows => m.iter_rows().map(&f).collect(),
                Dim::Columns => m.columns().iter().map(|c| f(c.as_slice())).collect(),
            };
            Matrix::from_rows(lanes).map(Value::Matrix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn sample() -> Value<i32> {
        Value::from_rows(vec![vec![5, 6], vec![3, 5]]).unwrap()
    }

    #[test]
    fn test_broadcast_scalar_scalar() {
        let r = broadcast(&Value::Scalar(5), &Value::Scalar(5), |a, b| a >= b).unwrap();
        assert_eq!(r, Value::Scalar(true));
    }

    #[test]
    fn test_broadcast_scalar_against_containers() {
        let r = broadcast(&Value::Scalar(5), &sample(), |a, b| a >= b).unwrap();
        assert_eq!(
            r,
            Value::from_rows(vec![vec![true, false], vec![true, true]]).unwrap()
        );

        let r = broadcast(&Value::vector(vec![5, 6, 3]), &Value::Scalar(5), |a, b| a >= b).unwrap();
        assert_eq!(r, Value::vector(vec![true, true, false]));
    }

    #[test]
    fn test_broadcast_equal_shapes() {
        let r = broadcast(
            &Value::vector(vec![5, 6, 3]),
            &Value::vector(vec![2, 6, 0]),
            |a, b| a - b,
        )
        .unwrap();
        assert_eq!(r, Value::vector(vec![3, 0, 3]));

        let other = Value::from_rows(vec![vec![5, 6], vec![-1, 2]]).unwrap();
        let r = broadcast(&other, &sample(), |a, b| a >= b).unwrap();
        assert_eq!(
            r,
            Value::from_rows(vec![vec![true, true], vec![false, false]]).unwrap()
        );
    }

    #[test]
    fn test_broadcast_vector_over_rows() {
        let v = Value::vector(vec![4, 5]);
        let r = broadcast(&v, &sample(), |a, b| a + b).unwrap();
        assert_eq!(r, Value::from_rows(vec![vec![9, 11], vec![7, 10]]).unwrap());

        let r = broadcast(&sample(), &v, |a, b| a - b).unwrap();
        assert_eq!(r, Value::from_rows(vec![vec![1, 1], vec![-1, 0]]).unwrap());
    }

    #[test]
    fn test_broadcast_mismatch_fails() {
        let err = broadcast(
            &Value::vector(vec![1, 2, 3]),
            &Value::vector(vec![1, 2]),
            |a, b| a + b,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));

        let wide = Value::from_rows(vec![vec![1, 2, 3]]).unwrap();
        assert!(broadcast(&wide, &sample(), |a, b| a + b).is_err());
        assert!(broadcast(&Value::vector(vec![1, 2, 3]), &sample(), |a, b| a + b).is_err());
    }

    #[test]
    fn test_reduce_axis_layouts() {
        let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
        let rows = reduce_axis(&m, Dim::Rows, |l| l.iter().sum()).unwrap();
        assert_eq!(rows.shape(), Shape::new(2, 1));
        assert_eq!(rows, Value::from_rows(vec![vec![16], vec![14]]).unwrap());

        let cols = reduce_axis(&m, Dim::Columns, |l| l.iter().sum()).unwrap();
        assert_eq!(cols, Value::from_rows(vec![vec![12, 14, 4]]).unwrap());

        let v = reduce_axis(&Value::vector(vec![1, 2, 3]), Dim::Columns, |l| l.iter().sum()).unwrap();
        assert_eq!(v, Value::Scalar(6));
    }

    #[test]
    fn test_reduce_axis_scalar_is_noop() {
        let r = reduce_axis(&Value::Scalar(42), Dim::Rows, |_| 0).unwrap();
        assert_eq!(r, Value::Scalar(42));
    }

    #[test]
    fn test_empty_input_is_argument_error() {
        let empty: Value<i32> = Value::vector(vec![]);
        assert!(matches!(
            reduce_axis(&empty, Dim::Rows, |l| l.len() as i32),
            Err(Error::Argument(_))
        ));
        let empty: Value<i32> = Value::from_rows(vec![]).unwrap();
        assert!(matches!(
            map_axis(&empty, Dim::Rows, |l| l.to_vec()),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn test_map_axis_layouts() {
        let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
        let tail = |l: &[i32]| l[1..].to_vec();

        let rows = map_axis(&m, Dim::Rows, tail).unwrap();
        assert_eq!(rows, Value::from_rows(vec![vec![6, 5], vec![8, -1]]).unwrap());

        let cols = map_axis(&m, Dim::Columns, tail).unwrap();
        assert_eq!(cols, Value::from_rows(vec![vec![7], vec![8], vec![-1]]).unwrap());
    }

    #[test]
    fn test_map_axis_ragged_lanes_fail() {
        let m = Value::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let r = map_axis(&m, Dim::Rows, |l| if l[0] == 1 { vec![1] } else { vec![1, 2] });
        assert!(matches!(r, Err(Error::Shape(_))));
    }
}
