//! Matrix and array helpers for ubique values
//!
//! This crate groups the structural helpers that do not compute on the
//! elements themselves:
//! - Inspection: `size`, `nrows`, `ncols`, `numel`, `iscolumn`
//! - Reshaping: `transpose`, `flatten`, `flipud`, `tomat`
//! - Columns: `getcol`, `setcol`
//! - Concatenation: `horzcat`, `vertcat`
//! - Indexing: `sub2ind`
//! - Sequences: `linspace`, `logspace`
//!
//! Indices are 0-based throughout.
//!
//! # Examples
//!
//! ```rust
//! use ubique_core::Value;
//! use ubique_matarrs::{getcol, horzcat, size, transpose};
//!
//! let m = Value::from_rows(vec![vec![5, 6, 5], vec![7, 8, -1]]).unwrap();
//! assert_eq!(size(&transpose(&m)).rows, 3);
//! assert_eq!(getcol(&m, 2).unwrap(), vec![5, -1]);
//!
//! let wide = horzcat(&[m.clone(), m]).unwrap();
//! assert_eq!(wide.cols(), 6);
//! ```

pub mod columns;
pub mod concat;
pub mod index;
pub mod info;
pub mod reshape;
pub mod spacing;

pub use columns::{getcol, setcol};
pub use concat::{horzcat, vertcat};
pub use index::sub2ind;
pub use info::{iscolumn, ncols, nrows, numel, size};
pub use reshape::{flatten, flipud, tomat, transpose};
pub use spacing::{linspace, logspace};
