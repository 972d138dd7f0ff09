//! Location and central moments
//!
//! Each function reduces lanes with `reduce_axis`, so along [`Dim::Rows`]
//! (the default) an R x C matrix gives an R x 1 column and along
//! [`Dim::Columns`] a 1 x C row.

use num_traits::Float;
use ubique_core::utils::{self, count_as, sorted};
use ubique_core::{reduce_axis, Dim, Result, Value};

/// Central moment of one lane: mean((x - mean)^k)
pub(crate) fn lane_moment<T: Float>(lane: &[T], k: i32) -> T {
    let mu = utils::mean(lane);
    let sum = lane
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mu).powi(k));
    sum / count_as(lane.len())
}

fn lane_median<T: Float>(lane: &[T]) -> T {
    let s = sorted(lane);
    let mid = s.len() / 2;
    if s.len() % 2 == 1 {
        s[mid]
    } else {
        (s[mid - 1] + s[mid]) / count_as(2)
    }
}

/// Arithmetic mean along `dim` (default rows)
///
/// # Examples
///
/// ```rust
/// use ubique_core::{Dim, Value};
/// use ubique_stats::mean;
///
/// let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
/// assert_eq!(mean(&m, None).unwrap(), Value::from_rows(vec![vec![16.0 / 3.0], vec![14.0 / 3.0]]).unwrap());
/// assert_eq!(mean(&m, Dim::Columns).unwrap(), Value::from_rows(vec![vec![6.0, 7.0, 2.0]]).unwrap());
/// ```
pub fn mean<T: Float>(x: &Value<T>, dim: impl Into<Option<Dim>>) -> Result<Value<T>> {
    reduce_axis(x, dim.into().unwrap_or(Dim::Rows), utils::mean)
}

/// k-th central moment along `dim` (default rows)
///
/// A scalar has no spread to measure and yields NaN.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_stats::moment;
///
/// let m = moment(&Value::vector(vec![1.0, 2.0, 3.0, 4.0, 5.0]), 2, None).unwrap();
/// assert_eq!(m, Value::scalar(2.0));
/// ```
pub fn moment<T: Float>(x: &Value<T>, k: i32, dim: impl Into<Option<Dim>>) -> Result<Value<T>> {
    if x.is_scalar() {
        return Ok(Value::Scalar(T::nan()));
    }
    reduce_axis(x, dim.into().unwrap_or(Dim::Rows), |lane| lane_moment(lane, k))
}

/// Median along `dim` (default rows)
///
/// Odd-length lanes take the middle of the sorted lane, even-length lanes
/// average the two middle elements. NaN sorts last. A scalar is its own
/// median.
///
/// ```rust
/// use ubique_core::{Dim, Value};
/// use ubique_stats::median;
///
/// assert_eq!(median(&Value::vector(vec![5.0, 6.0, 3.0]), None).unwrap(), Value::scalar(5.0));
///
/// let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
/// assert_eq!(median(&m, Dim::Columns).unwrap(), Value::from_rows(vec![vec![6.0, 7.0, 2.0]]).unwrap());
/// ```
pub fn median<T: Float>(x: &Value<T>, dim: impl Into<Option<Dim>>) -> Result<Value<T>> {
    reduce_axis(x, dim.into().unwrap_or(Dim::Rows), lane_median)
}
