//! Broadcasting comparisons returning boolean values

use ubique_core::{broadcast, Result, Value};

/// Element-wise `x >= y`
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_elemop::ge;
///
/// let r = ge(&Value::scalar(5.0), &Value::vector(vec![5.0, 6.0, 3.0])).unwrap();
/// assert_eq!(r, Value::vector(vec![true, false, true]));
/// ```
pub fn ge<T: PartialOrd>(x: &Value<T>, y: &Value<T>) -> Result<Value<bool>> {
    broadcast(x, y, |a, b| a >= b)
}

/// Element-wise `x > y`
pub fn gt<T: PartialOrd>(x: &Value<T>, y: &Value<T>) -> Result<Value<bool>> {
    broadcast(x, y, |a, b| a > b)
}

/// Element-wise `x < y`
pub fn lt<T: PartialOrd>(x: &Value<T>, y: &Value<T>) -> Result<Value<bool>> {
    broadcast(x, y, |a, b| a < b)
}

/// Element-wise `x <= y`
pub fn le<T: PartialOrd>(x: &Value<T>, y: &Value<T>) -> Result<Value<bool>> {
    broadcast(x, y, |a, b| a <= b)
}
