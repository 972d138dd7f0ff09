//! Broadcasting arithmetic

use std::ops::{Add, Div, Mul, Sub};
use ubique_core::{broadcast, Result, Value};

/// Element-wise `x + y`
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_elemop::plus;
///
/// let m = Value::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let r = plus(&m, &Value::vector(vec![10.0, 20.0])).unwrap();
/// assert_eq!(r, Value::from_rows(vec![vec![11.0, 22.0], vec![13.0, 24.0]]).unwrap());
/// ```
pub fn plus<T>(x: &Value<T>, y: &Value<T>) -> Result<Value<T>>
where
    T: Copy + Add<Output = T>,
{
    broadcast(x, y, |&a, &b| a + b)
}

/// Element-wise `x - y`
pub fn minus<T>(x: &Value<T>, y: &Value<T>) -> Result<Value<T>>
where
    T: Copy + Sub<Output = T>,
{
    broadcast(x, y, |&a, &b| a - b)
}

/// Element-wise `x * y`
pub fn times<T>(x: &Value<T>, y: &Value<T>) -> Result<Value<T>>
where
    T: Copy + Mul<Output = T>,
{
    broadcast(x, y, |&a, &b| a * b)
}

/// Element-wise right division `x / y`
///
/// Division by zero follows the element type; for floats it yields an
/// infinity or NaN.
pub fn rdivide<T>(x: &Value<T>, y: &Value<T>) -> Result<Value<T>>
where
    T: Copy + Div<Output = T>,
{
    broadcast(x, y, |&a, &b| a / b)
}
