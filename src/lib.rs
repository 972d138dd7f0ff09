//! ubique: numeric, matrix, linear-algebra, statistics and date helpers
//!
//! Every function takes a [`Value`], which is a scalar, a vector or a
//! rectangular matrix, and returns a value of the matching shape. The
//! workspace crates are re-exported as modules and their functions are
//! flattened into the crate root:
//!
//! - [`base`]: the value model, broadcasting kernel and errors
//! - [`elemop`]: element-wise arithmetic, comparisons, rounding, `erf`
//! - [`matarrs`]: shape queries, reshaping, concatenation, spacing
//! - [`linalg`]: LU decomposition and determinants
//! - [`stats`]: mean, central moments, kurtosis, median
//! - [`datetime`]: `datenum`, `datestr`, `datevec`
//!
//! # Example
//!
//! ```rust
//! use ubique::prelude::*;
//!
//! let x = Value::from_rows(vec![vec![5.0, 6.0, 5.0], vec![7.0, 8.0, -1.0]]).unwrap();
//! let col_means = flatten(&mean(&x, Dim::Columns).unwrap(), None);
//! let centered = minus(&x, &col_means).unwrap();
//! assert_eq!(round(&centered, 2).shape(), size(&x));
//!
//! let square = Value::from_rows(vec![vec![1.0, 5.0], vec![6.0, 2.0]]).unwrap();
//! assert_eq!(det(&square).unwrap(), -28.0);
//! ```

pub use ubique_core as base;
pub use ubique_datetime as datetime;
pub use ubique_elemop as elemop;
pub use ubique_linalg as linalg;
pub use ubique_matarrs as matarrs;
pub use ubique_stats as stats;

pub use ubique_core::{broadcast, map_axis, reduce_axis, Dim, Error, Matrix, Result, Shape, ShapeKind, Value};
pub use ubique_datetime::{datenum, datestr, datevec, now, DateInput, DateOptions, DateSpec, OneOrMany, Pattern};
pub use ubique_elemop::{
    ceil, cummax, diff, erf, erfc, exp, ge, gt, le, lt, minus, plus, rdivide, round, times,
};
pub use ubique_linalg::{det, lu, LuDecomposition};
pub use ubique_matarrs::{
    flatten, flipud, getcol, horzcat, iscolumn, linspace, logspace, ncols, nrows, numel, setcol,
    size, sub2ind, tomat, transpose, vertcat,
};
pub use ubique_stats::{kurtosis, mean, median, moment, BiasFlag, KurtosisOptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use ubique_core::prelude::*;
    pub use ubique_datetime::prelude::*;
    pub use ubique_elemop::prelude::*;
    pub use ubique_linalg::{det, lu, LuDecomposition};
    pub use ubique_matarrs::{
        flatten, flipud, getcol, horzcat, iscolumn, linspace, logspace, ncols, nrows, numel,
        setcol, size, sub2ind, tomat, transpose, vertcat,
    };
    pub use ubique_stats::{kurtosis, mean, median, moment, BiasFlag, KurtosisOptions};
}
