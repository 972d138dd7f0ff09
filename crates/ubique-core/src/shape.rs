//! Shape descriptors and axis selection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Scalar,
    Vector,
    Matrix,
}

/// (rows, cols) pair derived from the structure of a value
///
/// A scalar is 1x1, a vector of length N is 1xN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of elements
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// Axis selector for per-lane operations
///
/// `Rows` (0) applies an operation to each row independently, `Columns` (1)
/// to each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dim {
    Rows = 0,
    Columns = 1,
}

impl Dim {
    /// Numeric selector as used in the `dim` argument convention
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Dim {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Dim::Rows),
            1 => Ok(Dim::Columns),
            other => Err(Error::Argument(format!(
                "dim must be 0 (rows) or 1 (columns), got {other}"
            ))),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Rows => write!(f, "rows"),
            Dim::Columns => write!(f, "columns"),
        }
    }
}
