//! Element-wise operations over ubique values
//!
//! This crate provides the numeric helpers that act leaf by leaf or lane by
//! lane:
//! - Rounding at a decimal precision (`round`, `ceil`)
//! - Cumulative lane operations (`cummax`, `diff`)
//! - Broadcasting comparisons (`ge`, `gt`, `lt`, `le`)
//! - Broadcasting arithmetic (`plus`, `minus`, `times`, `rdivide`)
//! - Elementary math (`exp`, `erf`, `erfc`)
//!
//! # Operation summary
//!
//! | Operation | Input shapes | Output | Fails on |
//! |-----------|--------------|--------|----------|
//! | round, ceil, exp, erf, erfc | any | same shape | never |
//! | cummax, diff | any | `map_axis` layout | empty input |
//! | comparisons | broadcast pair | `Value<bool>` | shape mismatch |
//! | arithmetic | broadcast pair | `Value<T>` | shape mismatch |
//!
//! # Examples
//!
//! ```rust
//! use ubique_core::{Dim, Value};
//! use ubique_elemop::{cummax, ge, round};
//!
//! let m = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
//!
//! let flags = ge(&m, &Value::scalar(6.0)).unwrap();
//! assert_eq!(flags, Value::from_rows(vec![vec![false, true, false], vec![true, true, false]]).unwrap());
//!
//! let running = cummax(&m, Dim::Rows).unwrap();
//! assert_eq!(running, Value::from_rows(vec![vec![5.0, 6.0, 6.0], vec![7.0, 8.0, 8.0]]).unwrap());
//!
//! assert_eq!(round(&Value::scalar(1.456), 1), Value::scalar(1.5));
//! ```

pub mod arith;
pub mod compare;
pub mod cumulative;
pub mod elmath;
pub mod rounding;

pub use arith::{minus, plus, rdivide, times};
pub use compare::{ge, gt, le, lt};
pub use cumulative::{cummax, diff};
pub use elmath::{erf, erfc, exp};
pub use rounding::{ceil, round};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ceil, cummax, diff, erf, erfc, exp, ge, gt, le, lt, minus, plus, rdivide, round, times,
    };
}
