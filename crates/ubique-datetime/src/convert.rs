//! Conversions between dates, timestamps and component vectors
//!
//! Timestamps are Unix seconds unless stated otherwise. `datenum` and
//! `datestr` work in UTC; `datevec` on text resolves to UTC only when the
//! pattern carries an offset token and uses the local zone otherwise.

use crate::components;
use crate::input::{DateInput, DateOptions, DateSpec, OneOrMany};
use crate::pattern::{instant_from_millis, Parsed, Pattern};
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use ubique_core::{Error, Matrix, Result, Value};

/// Pattern used by [`datestr`] when none is given
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

fn compile(options: &DateOptions) -> Result<Option<Pattern>> {
    options.format.as_deref().map(Pattern::compile).transpose()
}

fn spec_to_timestamp(spec: &DateSpec, pattern: Option<&Pattern>) -> Result<i64> {
    match spec {
        DateSpec::Text(text) => {
            let pattern = pattern.ok_or_else(Error::missing_format)?;
            Ok(pattern.parse(text)?.to_utc()?.timestamp())
        }
        DateSpec::Components(parts) => components::to_utc(parts).map(|dt| dt.timestamp()),
    }
}

/// Convert date text or components into Unix seconds
///
/// Text needs `options.format`. Components are read as UTC and may
/// overflow into larger fields. Sub-second parts are floored away.
///
/// # Examples
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_datetime::{datenum, DateOptions};
///
/// let fmt = DateOptions::with_format("DD-MM-YYYY");
/// assert_eq!(datenum("31-12-2014", &fmt).unwrap(), Value::scalar(1419984000i64));
/// assert_eq!(
///     datenum(vec!["31-12-2014", "31-01-2015"], &fmt).unwrap(),
///     Value::vector(vec![1419984000i64, 1422662400])
/// );
/// assert_eq!(
///     datenum(vec![2015i64, 4, 5, 12, 20, 30, 0], &DateOptions::default()).unwrap(),
///     Value::scalar(1428236430i64)
/// );
/// ```
pub fn datenum(d: impl Into<OneOrMany<DateSpec>>, options: &DateOptions) -> Result<Value<i64>> {
    let pattern = compile(options)?;
    match d.into() {
        OneOrMany::One(spec) => spec_to_timestamp(&spec, pattern.as_ref()).map(Value::Scalar),
        OneOrMany::Many(specs) => specs
            .iter()
            .map(|spec| spec_to_timestamp(spec, pattern.as_ref()))
            .collect::<Result<Vec<i64>>>()
            .map(Value::Vector),
    }
}

/// Render Unix seconds as UTC text
///
/// Uses `options.format`, or [`DEFAULT_FORMAT`] when unset. Scalars,
/// vectors and matrices keep their shape.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_datetime::{datestr, DateOptions};
///
/// let r = datestr(&Value::scalar(1419984000i64), &DateOptions::default()).unwrap();
/// assert_eq!(r, Value::scalar("2014-12-31".to_string()));
///
/// let r = datestr(&Value::vector(vec![1419984000, 1422662400]), &DateOptions::with_format("DD-MMM-YY")).unwrap();
/// assert_eq!(r, Value::vector(vec!["31-Dec-14".to_string(), "31-Jan-15".to_string()]));
/// ```
pub fn datestr(x: &Value<i64>, options: &DateOptions) -> Result<Value<String>> {
    let pattern = Pattern::compile(options.format.as_deref().unwrap_or(DEFAULT_FORMAT))?;
    x.try_map(|&ts| {
        let dt = Utc
            .timestamp_opt(ts, 0)
            .single()
            .ok_or_else(|| Error::Format(format!("timestamp {ts} is out of range")))?;
        Ok(pattern.format(&dt))
    })
}

fn timestamp_millis(ts: i64) -> Result<i64> {
    // ten decimal digits means second resolution
    if ts.to_string().len() == 10 {
        ts.checked_mul(1000)
            .ok_or_else(|| Error::Format(format!("timestamp {ts} is out of range")))
    } else {
        Ok(ts)
    }
}

fn local_components(naive: &NaiveDateTime) -> Vec<i64> {
    let resolved = Local.from_local_datetime(naive);
    match resolved.earliest() {
        Some(dt) => {
            if resolved.single().is_none() {
                log::debug!("{naive} is ambiguous in the local zone; using the earlier instant");
            }
            components::from_datetime(&dt)
        }
        None => {
            log::debug!("{naive} does not exist in the local zone; keeping wall-clock fields");
            components::from_datetime(naive)
        }
    }
}

fn input_to_components(input: &DateInput, pattern: Option<&Pattern>) -> Result<Vec<i64>> {
    match input {
        DateInput::Timestamp(ts) => {
            let dt = instant_from_millis(timestamp_millis(*ts)?)?;
            Ok(components::from_datetime(&dt))
        }
        DateInput::Text(text) => {
            let pattern = pattern.ok_or_else(Error::missing_format)?;
            let parsed = pattern.parse(text)?;
            if pattern.has_offset() {
                return Ok(components::from_datetime(&parsed.to_utc()?));
            }
            Ok(match parsed {
                Parsed::Instant(dt) => components::from_datetime(&dt.with_timezone(&Local)),
                Parsed::Fields { naive, .. } => local_components(&naive),
            })
        }
    }
}

/// Split timestamps or date text into `[Y, M, D, h, m, s, ms]`
///
/// One input gives a 7-element vector, a list gives a matrix with one row
/// per input. Ten-digit timestamps are seconds, any other length is
/// milliseconds; both are read in UTC. Text needs `options.format`.
///
/// ```rust
/// use ubique_core::Value;
/// use ubique_datetime::{datevec, DateOptions};
///
/// let v = datevec(1428236430579i64, &DateOptions::default()).unwrap();
/// assert_eq!(v, Value::vector(vec![2015, 4, 5, 12, 20, 30, 579]));
///
/// let fmt = DateOptions::with_format("YYYY-MM-DDTHH:mm:ssZ");
/// let v = datevec("2023-08-25T14:45:00+02:00", &fmt).unwrap();
/// assert_eq!(v, Value::vector(vec![2023, 8, 25, 12, 45, 0, 0]));
/// ```
pub fn datevec(d: impl Into<OneOrMany<DateInput>>, options: &DateOptions) -> Result<Value<i64>> {
    let pattern = compile(options)?;
    match d.into() {
        OneOrMany::One(input) => input_to_components(&input, pattern.as_ref()).map(Value::Vector),
        OneOrMany::Many(inputs) => {
            let rows = inputs
                .iter()
                .map(|input| input_to_components(input, pattern.as_ref()))
                .collect::<Result<Vec<Vec<i64>>>>()?;
            Matrix::from_rows(rows).map(Value::Matrix)
        }
    }
}

/// Current time as Unix seconds
pub fn now() -> i64 {
    Utc::now().timestamp()
}
