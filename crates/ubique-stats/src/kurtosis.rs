//! Kurtosis: fourth central moment over the squared second

use crate::central::lane_moment;
use crate::config::{BiasFlag, KurtosisOptions};
use num_traits::Float;
use ubique_core::utils::count_as;
use ubique_core::{reduce_axis, Result, Value};

fn lane_kurtosis<T: Float>(lane: &[T], flag: BiasFlag) -> T {
    let m2 = lane_moment(lane, 2);
    let k = lane_moment(lane, 4) / (m2 * m2);
    match flag {
        BiasFlag::Biased => k,
        BiasFlag::Corrected => {
            let n: T = count_as(lane.len());
            let one = T::one();
            let two = one + one;
            let three = two + one;
            // n <= 3 divides by zero or flips sign; the result is returned as is
            ((n + one) * k - three * (n - one)) * (n - one) / ((n - two) * (n - three)) + three
        }
    }
}

/// Kurtosis along `options.dim`
///
/// Zero variance gives NaN rather than an error, and so does a scalar input.
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_stats::{kurtosis, KurtosisOptions};
///
/// let x = Value::vector(vec![0.003_f64, 0.026, 0.015, -0.009, 0.014, 0.024, 0.015, 0.066, -0.014, 0.039]);
/// let k = kurtosis(&x, KurtosisOptions::default()).unwrap().into_scalar().unwrap();
/// assert!((k - 3.037581).abs() < 1e-6);
///
/// let flat = kurtosis(&Value::vector(vec![1.0_f64; 5]), KurtosisOptions::default()).unwrap();
/// assert!(flat.into_scalar().unwrap().is_nan());
/// ```
pub fn kurtosis<T: Float>(x: &Value<T>, options: KurtosisOptions) -> Result<Value<T>> {
    if x.is_scalar() {
        return Ok(Value::Scalar(T::nan()));
    }
    log::trace!("kurtosis with {:?}", options);
    reduce_axis(x, options.dim, |lane| lane_kurtosis(lane, options.flag))
}
