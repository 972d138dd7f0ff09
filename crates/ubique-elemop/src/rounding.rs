//! Decimal-precision rounding
//!
//! Both helpers scale by 10^n, apply the integer rounding rule, scale back and
//! normalize a negative-zero result to positive zero.

use num_traits::Float;
use ubique_core::utils::pow10;
use ubique_core::Value;

fn scaled<T, F>(x: T, n: i32, rule: F) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let p = pow10::<T>(n);
    let res = rule(x * p) / p;
    // -0.0 == 0.0, so this also folds negative zero
    if res == T::zero() {
        T::zero()
    } else {
        res
    }
}

/// Round to the nearest value at `n` decimals (default 0), halves away from zero
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_elemop::round;
///
/// assert_eq!(round(&Value::scalar(-2.34567), 2), Value::scalar(-2.35));
/// assert_eq!(round(&Value::vector(vec![-1.9, -0.2, 3.4, 5.6]), None), Value::vector(vec![-2.0, 0.0, 3.0, 6.0]));
/// ```
pub fn round<T: Float>(x: &Value<T>, n: impl Into<Option<i32>>) -> Value<T> {
    let n = n.into().unwrap_or(0);
    x.map(|&v| scaled(v, n, T::round))
}

/// Round toward positive infinity at `n` decimals
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_elemop::ceil;
///
/// assert_eq!(ceil(&Value::vector(vec![4.51, -1.4]), None), Value::vector(vec![5.0, -1.0]));
/// ```
pub fn ceil<T: Float>(x: &Value<T>, n: impl Into<Option<i32>>) -> Value<T> {
    let n = n.into().unwrap_or(0);
    x.map(|&v| scaled(v, n, T::ceil))
}
