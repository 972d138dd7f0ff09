//! Lane-wise cumulative operations
//!
//! Both functions default to `Dim::Columns` and follow the `map_axis`
//! layout: along columns the result has one row per input column.

use num_traits::Float;
use ubique_core::{map_axis, Dim, Result, Value};

fn running_max<T: Float>(lane: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(lane.len());
    let mut acc: Option<T> = None;
    for &v in lane {
        let next = match acc {
            None => v,
            // NaN sticks once seen
            Some(a) if a.is_nan() || v.is_nan() => T::nan(),
            Some(a) => a.max(v),
        };
        acc = Some(next);
        out.push(next);
    }
    out
}

fn adjacent_diff<T: Float>(lane: &[T]) -> Vec<T> {
    lane.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Cumulative maximum along `dim` (default columns)
///
/// # Examples
///
/// ```rust
/// use ubique_core::{Dim, Value};
/// use ubique_elemop::cummax;
///
/// let x = Value::vector(vec![5.0, 6.0, 3.0]);
/// assert_eq!(cummax(&x, None).unwrap(), Value::vector(vec![5.0, 6.0, 6.0]));
///
/// let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
/// assert_eq!(
///     cummax(&m, Dim::Rows).unwrap(),
///     Value::from_rows(vec![vec![5.0, 6.0, 6.0], vec![7.0, 8.0, 8.0]]).unwrap()
/// );
/// ```
pub fn cummax<T: Float>(x: &Value<T>, dim: impl Into<Option<Dim>>) -> Result<Value<T>> {
    map_axis(x, dim.into().unwrap_or(Dim::Columns), running_max)
}

/// Differences between adjacent elements along `dim` (default columns)
///
/// A lane of length one yields an empty lane.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_elemop::diff;
///
/// assert_eq!(diff(&Value::vector(vec![5.0, 6.0, 3.0]), None).unwrap(), Value::vector(vec![1.0, -3.0]));
/// ```
pub fn diff<T: Float>(x: &Value<T>, dim: impl Into<Option<Dim>>) -> Result<Value<T>> {
    map_axis(x, dim.into().unwrap_or(Dim::Columns), adjacent_diff)
}
