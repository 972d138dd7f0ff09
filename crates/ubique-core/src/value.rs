//! Closed scalar/vector/matrix value type
//!
//! Every ubique function receives a [`Value`] and dispatches once on its
//! variant. Vectors behave as 1xN rows for shape purposes.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::shape::{Shape, ShapeKind};
use serde::{Deserialize, Serialize};

/// A scalar, a vector, or a rectangular matrix of `T`
///
/// Serializes untagged, so `5`, `[5, 6]` and `[[5], [6]]` map to the three
/// variants respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>"))]
pub enum Value<T> {
    Scalar(T),
    Vector(Vec<T>),
    Matrix(Matrix<T>),
}

impl<T> Value<T> {
    pub fn scalar(value: T) -> Self {
        Value::Scalar(value)
    }

    pub fn vector(values: Vec<T>) -> Self {
        Value::Vector(values)
    }

    /// Classify nested rows as a matrix, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows).map(Value::Matrix)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Value::Scalar(_) => ShapeKind::Scalar,
            Value::Vector(_) => ShapeKind::Vector,
            Value::Matrix(_) => ShapeKind::Matrix,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::new(1, 1),
            Value::Vector(v) => Shape::new(1, v.len()),
            Value::Matrix(m) => m.shape(),
        }
    }

    /// Number of scalar leaves
    pub fn numel(&self) -> usize {
        self.shape().numel()
    }

    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Value::Scalar(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[T]> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix<T>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Apply `f` to every scalar leaf, preserving structure
    pub fn map<U, F>(&self, mut f: F) -> Value<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Value::Scalar(x) => Value::Scalar(f(x)),
            Value::Vector(v) => Value::Vector(v.iter().map(f).collect()),
            Value::Matrix(m) => Value::Matrix(m.map(f)),
        }
    }

    /// Fallible variant of [`Value::map`]; stops at the first error
    pub fn try_map<U, F>(&self, mut f: F) -> Result<Value<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        Ok(match self {
            Value::Scalar(x) => Value::Scalar(f(x)?),
            Value::Vector(v) => Value::Vector(v.iter().map(f).collect::<Result<Vec<U>>>()?),
            Value::Matrix(m) => Value::Matrix(m.try_map(f)?),
        })
    }

    /// Iterate over the scalar leaves in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Value::Scalar(x) => std::slice::from_ref(x).iter(),
            Value::Vector(v) => v.iter(),
            Value::Matrix(m) => m.as_slice().iter(),
        }
    }
}

impl<T: Clone> Value<T> {
    /// Promote to a matrix: a scalar becomes 1x1, a vector a single row
    pub fn to_matrix(&self) -> Matrix<T> {
        match self {
            Value::Scalar(x) => Matrix::row_vector(vec![x.clone()]),
            Value::Vector(v) => Matrix::row_vector(v.clone()),
            Value::Matrix(m) => m.clone(),
        }
    }

    /// Extract the sole leaf of a scalar or one-element container
    pub fn into_scalar(self) -> Result<T> {
        match self {
            Value::Scalar(x) => Ok(x),
            other if other.numel() == 1 => {
                other.iter().next().cloned().ok_or_else(|| Error::not_enough_input("scalar"))
            }
            other => Err(Error::Shape(format!(
                "expected a single value, got {}",
                other.shape()
            ))),
        }
    }
}

impl<T> From<Vec<T>> for Value<T> {
    fn from(values: Vec<T>) -> Self {
        Value::Vector(values)
    }
}

impl<T> From<Matrix<T>> for Value<T> {
    fn from(matrix: Matrix<T>) -> Self {
        Value::Matrix(matrix)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Value<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Value::from_rows(rows)
    }
}

macro_rules! impl_scalar_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<$t> {
                fn from(value: $t) -> Self {
                    Value::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_from!(f64, f32, i64, i32, usize, bool);
