//! Elementary math: exponential and the error functions
//!
//! `erfc` uses the Chebyshev fit from Numerical Recipes (fractional error
//! below 1.2e-7 everywhere), so `erf(0.5)` is `0.5204999077`, not the exact
//! `0.5204998778`.

use num_traits::Float;
use ubique_core::Value;

/// Element-wise natural exponential
pub fn exp<T: Float>(x: &Value<T>) -> Value<T> {
    x.map(|&v| v.exp())
}

fn chebyshev_erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let ans = t * (-z * z + poly).exp();
    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

/// Element-wise complementary error function
///
/// # Examples
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use ubique_core::Value;
/// use ubique_elemop::erfc;
///
/// let r = erfc(&Value::scalar(0.5));
/// assert_abs_diff_eq!(*r.as_scalar().unwrap(), 0.4795000923, epsilon = 1e-9);
/// ```
pub fn erfc(x: &Value<f64>) -> Value<f64> {
    x.map(|&v| chebyshev_erfc(v))
}

/// Element-wise error function, `1 - erfc(x)`
pub fn erf(x: &Value<f64>) -> Value<f64> {
    x.map(|&v| 1.0 - chebyshev_erfc(v))
}
