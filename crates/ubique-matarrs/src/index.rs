//! Subscript to linear index conversion

use ubique_core::{Error, Result, Shape, Value};

/// Convert `[row, col]` subscripts into column-major linear indices
///
/// `index` is either a single `[row, col]` vector or a matrix with one
/// `[row, col]` pair per row. One pair gives a scalar, several a vector.
/// A linear index past the end of `size` is a shape error.
///
/// # Examples
///
/// ```rust
/// use ubique_core::{Shape, Value};
/// use ubique_matarrs::sub2ind;
///
/// let size = Shape::new(2, 3);
/// assert_eq!(sub2ind(size, &Value::vector(vec![1, 2])).unwrap(), Value::scalar(5));
///
/// let pairs = Value::from_rows(vec![vec![0, 0], vec![1, 0], vec![0, 1]]).unwrap();
/// assert_eq!(sub2ind(size, &pairs).unwrap(), Value::vector(vec![0, 1, 2]));
/// ```
pub fn sub2ind(size: Shape, index: &Value<usize>) -> Result<Value<usize>> {
    let pairs: Vec<&[usize]> = match index {
        Value::Vector(v) => vec![v.as_slice()],
        Value::Matrix(m) => m.iter_rows().collect(),
        Value::Scalar(_) => {
            return Err(Error::Argument(
                "sub2ind needs [row, col] subscripts".to_string(),
            ))
        }
    };
    if pairs.is_empty() {
        return Err(Error::not_enough_input("sub2ind"));
    }

    let mut out = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let &[row, col] = pair else {
            return Err(Error::Shape(format!(
                "subscripts must come in [row, col] pairs, got {} values",
                pair.len()
            )));
        };
        let numel = size.rows.saturating_mul(size.cols);
        let Some(linear) = col.checked_mul(size.rows).and_then(|v| v.checked_add(row)) else {
            log::debug!("subscript ({row}, {col}) overflows the linear index");
            return Err(Error::index_out_of_bounds(col, size.cols, "Column"));
        };
        if linear >= numel {
            log::debug!("subscript ({row}, {col}) outside {size}");
            return Err(Error::index_out_of_bounds(linear, numel, "Linear"));
        }
        out.push(linear);
    }

    Ok(match out.as_slice() {
        [single] => Value::Scalar(*single),
        _ => Value::Vector(out),
    })
}
