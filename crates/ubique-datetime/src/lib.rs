//! Date helpers for the ubique toolkit
//!
//! Three conversions share one pattern language ([`Pattern`], dayjs tokens):
//!
//! | Function    | From                          | To                                 |
//! |-------------|-------------------------------|------------------------------------|
//! | [`datenum`] | text or component vectors     | Unix seconds                       |
//! | [`datestr`] | Unix seconds                  | text, UTC                          |
//! | [`datevec`] | timestamps or text            | `[Y, M, D, h, m, s, ms]` rows      |
//!
//! Single inputs give single results, lists give lists in the same order.
//!
//! ```rust
//! use ubique_core::Value;
//! use ubique_datetime::{datenum, datestr, DateOptions};
//!
//! let fmt = DateOptions::with_format("DD-MM-YYYY");
//! let ts = datenum("31-12-2014", &fmt).unwrap();
//! assert_eq!(datestr(&ts, &fmt).unwrap(), Value::scalar("31-12-2014".to_string()));
//! ```

pub mod components;
pub mod convert;
pub mod input;
pub mod pattern;

pub use convert::{datenum, datestr, datevec, now, DEFAULT_FORMAT};
pub use input::{DateInput, DateOptions, DateSpec, OneOrMany};
pub use pattern::{Parsed, Pattern};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{datenum, datestr, datevec, now, DateInput, DateOptions, DateSpec, OneOrMany};
}
