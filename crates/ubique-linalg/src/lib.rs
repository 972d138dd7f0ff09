//! Linear algebra on ubique matrices
//!
//! - [`lu`] factors a square matrix with partial pivoting
//! - [`det`] derives the determinant from that factorization
//!
//! ```rust
//! use ubique_core::Value;
//! use ubique_linalg::{det, lu};
//!
//! let a = Value::from_rows(vec![vec![2.0, 2.0], vec![2.0, 3.0]]).unwrap();
//! assert_eq!(det(&a).unwrap(), 2.0);
//! assert!(!lu(&a).unwrap().is_singular());
//! ```

pub mod det;
pub mod lu;

pub use det::det;
pub use lu::{lu, LuDecomposition};
