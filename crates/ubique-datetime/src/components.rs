//! Calendar components <-> instants
//!
//! Component vectors are `[year, month, day, hour, minute, second, ms]`
//! with a 1-based month. Out-of-range fields carry into the next larger
//! field (month 13 is January of the following year, day 0 the last day of
//! the previous month), so any combination of integers names an instant as
//! long as it stays within chrono's range.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use ubique_core::{Error, Result};

const MAX_COMPONENTS: usize = 7;

fn out_of_range(components: &[i64]) -> Error {
    Error::Format(format!("date components {components:?} are out of range"))
}

/// Interpret components as UTC
///
/// Only the year is required; month and day default to 1, the time fields
/// to 0.
pub fn to_utc(components: &[i64]) -> Result<DateTime<Utc>> {
    let [year, rest @ ..] = components else {
        return Err(Error::not_enough_input("date components"));
    };
    if components.len() > MAX_COMPONENTS {
        log::debug!(
            "ignoring {} trailing date components",
            components.len() - MAX_COMPONENTS
        );
    }
    let field = |i: usize, default: i64| rest.get(i).copied().unwrap_or(default);
    let range = || out_of_range(components);

    let months = field(0, 1)
        .checked_sub(1)
        .and_then(|m| year.checked_mul(12)?.checked_add(m))
        .ok_or_else(range)?;
    let y = i32::try_from(months.div_euclid(12)).map_err(|_| range())?;
    let m = months.rem_euclid(12) as u32 + 1;
    let start = NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(range)?;

    let deltas = [
        field(1, 1).checked_sub(1).and_then(TimeDelta::try_days),
        TimeDelta::try_hours(field(2, 0)),
        TimeDelta::try_minutes(field(3, 0)),
        TimeDelta::try_seconds(field(4, 0)),
        TimeDelta::try_milliseconds(field(5, 0)),
    ];
    let naive = deltas
        .into_iter()
        .try_fold(start, |at, delta| at.checked_add_signed(delta?))
        .ok_or_else(range)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Split a date-time into its seven components, month 1-based
pub fn from_datetime<D: Datelike + Timelike>(dt: &D) -> Vec<i64> {
    vec![
        i64::from(dt.year()),
        i64::from(dt.month()),
        i64::from(dt.day()),
        i64::from(dt.hour()),
        i64::from(dt.minute()),
        i64::from(dt.second()),
        // leap seconds report nanoseconds past 1e9
        i64::from((dt.nanosecond() / 1_000_000).min(999)),
    ]
}
