//! Rectangular row-major matrix
//!
//! `Matrix` can only be built through constructors that validate
//! rectangularity, so every instance satisfies `data.len() == rows * cols`.

use crate::error::{Error, Result};
use crate::shape::Shape;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Rectangular two-dimensional container stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "Vec<Vec<T>>",
    try_from = "Vec<Vec<T>>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows, rejecting ragged input
    ///
    /// An empty outer vector yields a 0x0 matrix; `vec![vec![]]` yields 1x0.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                log::debug!("rejecting ragged matrix at row {i}");
                return Err(Error::ragged_rows(i, n_cols, row.len()));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Build a matrix from row-major data
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::Shape(format!(
                "{} elements cannot fill a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix by evaluating `f(row, col)` for every position
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Single-row matrix wrapping a vector
    pub fn row_vector(values: Vec<T>) -> Self {
        let cols = values.len();
        Self {
            data: values,
            rows: 1,
            cols,
        }
    }

    /// Single-column matrix wrapping a vector
    pub fn column_vector(values: Vec<T>) -> Self {
        let rows = values.len();
        Self {
            data: values,
            rows,
            cols: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// True when the matrix holds no elements along either axis
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major view of the elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every element, keeping the shape
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Fallible variant of [`Matrix::map`]
    pub fn try_map<U, F>(&self, f: F) -> Result<Matrix<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        Ok(Matrix {
            data: self.data.iter().map(f).collect::<Result<Vec<U>>>()?,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Clone> Matrix<T> {
    /// Copy out column `j`
    ///
    /// # Panics
    ///
    /// Panics if `j >= cols`.
    pub fn column(&self, j: usize) -> Vec<T> {
        self.iter_rows().map(|row| row[j].clone()).collect()
    }

    /// Copy out every column
    pub fn columns(&self) -> Vec<Vec<T>> {
        (0..self.cols).map(|j| self.column(j)).collect()
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i].clone())
    }

    /// Nested-row representation
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    /// n x n identity matrix
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rectangular() {
        let m = Matrix::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.row(1), &[7, 8, -1]);
        assert_eq!(m[(0, 1)], 6);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_empty_shapes() {
        let m: Matrix<f64> = Matrix::from_rows(vec![]).unwrap();
        assert_eq!(m.shape(), Shape::new(0, 0));
        assert!(m.is_empty());

        let m: Matrix<f64> = Matrix::from_rows(vec![vec![]]).unwrap();
        assert_eq!(m.shape(), Shape::new(1, 0));
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 1);
    }

    #[test]
    fn test_columns_and_transpose() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.column(2), vec![3, 6]);
        assert_eq!(m.columns(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        let t = m.transpose();
        assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_identity() {
        let eye: Matrix<f64> = Matrix::identity(3);
        assert_eq!(eye[(1, 1)], 1.0);
        assert_eq!(eye[(0, 2)], 0.0);
    }

    #[test]
    fn test_serde_as_nested_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

        let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let ragged: std::result::Result<Matrix<f64>, _> = serde_json::from_str("[[1.0],[2.0,3.0]]");
        assert!(ragged.is_err());
    }
}
