//! Utility functions for working with numeric slices

use num_traits::Float;
use std::cmp::Ordering;

/// Total order for floats that places NaN after every other value
pub fn nan_last_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use ubique_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Float>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(nan_last_cmp);
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use ubique_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
pub fn mean<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / count_as(data.len())
}

/// Convert an element count into the float type
pub fn count_as<T: Float>(n: usize) -> T {
    <T as num_traits::NumCast>::from(n).unwrap_or_else(T::nan)
}

/// Scale factor 10^n used by the decimal rounding helpers
pub fn pow10<T: Float>(n: i32) -> T {
    let ten = count_as::<T>(10);
    ten.powi(n)
}
