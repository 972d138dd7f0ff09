//! Date pattern language
//!
//! Patterns use the dayjs token set (`YYYY-MM-DD HH:mm:ss`, `DD-MMM-YY`,
//! `YYYY-MM-DDTHH:mm:ssZ`, ...). Text inside `[...]` is copied verbatim and
//! any character that is not a token is a literal.
//!
//! Parsing is strict: literals must match exactly, the whole input must be
//! consumed and the resulting calendar date must exist. Fields missing from
//! the pattern default to 1970-01-01 00:00:00.000.

use chrono::{
    DateTime, Datelike, FixedOffset, Month, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use std::fmt::{self, Write};
use ubique_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    Month,
    Month2,
    MonthShort,
    MonthLong,
    Day,
    Day2,
    Weekday,
    WeekdayMin,
    WeekdayShort,
    WeekdayLong,
    Hour,
    Hour2,
    Hour12,
    Hour12Padded,
    Minute,
    Minute2,
    Second,
    Second2,
    Tenths,
    Hundredths,
    Millis,
    MeridiemUpper,
    MeridiemLower,
    OffsetColon,
    OffsetCompact,
    UnixSeconds,
    UnixMillis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Token(Token),
    Literal(String),
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    items: Vec<Item>,
}

/// Result of parsing text against a [`Pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// The input carried an absolute instant (`X` or `x`)
    Instant(DateTime<Utc>),
    /// Wall-clock fields, with the offset if the pattern had `Z`/`ZZ`
    Fields {
        naive: NaiveDateTime,
        offset: Option<FixedOffset>,
    },
}

impl Parsed {
    /// Resolve to UTC; fields without an offset are read as UTC
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        match *self {
            Parsed::Instant(dt) => Ok(dt),
            Parsed::Fields { naive, offset: None } => Ok(Utc.from_utc_datetime(&naive)),
            Parsed::Fields {
                naive,
                offset: Some(offset),
            } => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| Error::Format(format!("cannot resolve {naive} at {offset}"))),
        }
    }
}

fn run_length(bytes: &[u8], start: usize, c: u8) -> usize {
    bytes[start..].iter().take_while(|&&b| b == c).count()
}

impl Pattern {
    /// Tokenize a pattern string
    ///
    /// An unterminated `[` escape is a format error.
    pub fn compile(pattern: &str) -> Result<Self> {
        let bytes = pattern.as_bytes();
        let mut items: Vec<Item> = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'[' {
                let close = pattern[i + 1..].find(']').ok_or_else(|| {
                    Error::Format(format!("unterminated escape in pattern {pattern:?}"))
                })?;
                literal.push_str(&pattern[i + 1..i + 1 + close]);
                i += close + 2;
                continue;
            }

            let run = run_length(bytes, i, bytes[i]);
            let matched = match bytes[i] {
                b'Y' if run >= 4 => Some((Token::Year4, 4)),
                b'Y' if run >= 2 => Some((Token::Year2, 2)),
                b'M' => Some(match run {
                    1 => (Token::Month, 1),
                    2 => (Token::Month2, 2),
                    3 => (Token::MonthShort, 3),
                    _ => (Token::MonthLong, 4),
                }),
                b'D' if run >= 2 => Some((Token::Day2, 2)),
                b'D' => Some((Token::Day, 1)),
                b'd' => Some(match run {
                    1 => (Token::Weekday, 1),
                    2 => (Token::WeekdayMin, 2),
                    3 => (Token::WeekdayShort, 3),
                    _ => (Token::WeekdayLong, 4),
                }),
                b'H' if run >= 2 => Some((Token::Hour2, 2)),
                b'H' => Some((Token::Hour, 1)),
                b'h' if run >= 2 => Some((Token::Hour12Padded, 2)),
                b'h' => Some((Token::Hour12, 1)),
                b'm' if run >= 2 => Some((Token::Minute2, 2)),
                b'm' => Some((Token::Minute, 1)),
                b's' if run >= 2 => Some((Token::Second2, 2)),
                b's' => Some((Token::Second, 1)),
                b'S' if run >= 3 => Some((Token::Millis, 3)),
                b'S' if run == 2 => Some((Token::Hundredths, 2)),
                b'S' => Some((Token::Tenths, 1)),
                b'A' => Some((Token::MeridiemUpper, 1)),
                b'a' => Some((Token::MeridiemLower, 1)),
                b'Z' if run >= 2 => Some((Token::OffsetCompact, 2)),
                b'Z' => Some((Token::OffsetColon, 1)),
                b'X' => Some((Token::UnixSeconds, 1)),
                b'x' => Some((Token::UnixMillis, 1)),
                _ => None,
            };

            match matched {
                Some((token, width)) => {
                    if !literal.is_empty() {
                        items.push(Item::Literal(std::mem::take(&mut literal)));
                    }
                    items.push(Item::Token(token));
                    i += width;
                }
                None => {
                    let ch = pattern[i..].chars().next().unwrap_or_default();
                    literal.push(ch);
                    i += ch.len_utf8().max(1);
                }
            }
        }
        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }
        Ok(Self { items })
    }

    /// Whether the pattern carries a UTC offset token (`Z` or `ZZ`)
    pub fn has_offset(&self) -> bool {
        self.items.iter().any(|item| {
            matches!(
                item,
                Item::Token(Token::OffsetColon) | Item::Token(Token::OffsetCompact)
            )
        })
    }

    /// Render `dt` in its own time zone
    pub fn format<Tz>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        for item in &self.items {
            // Writing into a String cannot fail
            let _ = match item {
                Item::Literal(text) => out.write_str(text),
                Item::Token(token) => write_token(&mut out, *token, dt),
            };
        }
        out
    }

    /// Parse `input`, which must match the pattern completely
    pub fn parse(&self, input: &str) -> Result<Parsed> {
        let mut cursor = Cursor { input, pos: 0 };
        let mut fields = RawFields::default();

        for item in &self.items {
            match item {
                Item::Literal(text) => cursor.expect(text)?,
                Item::Token(token) => read_token(&mut cursor, *token, &mut fields)?,
            }
        }
        if cursor.pos != input.len() {
            return Err(Error::Format(format!(
                "unexpected trailing input {:?} in {input:?}",
                &input[cursor.pos..]
            )));
        }
        fields.build(input)
    }
}

fn write_token<Tz>(out: &mut String, token: Token, dt: &DateTime<Tz>) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let millis = dt.timestamp_subsec_millis();
    match token {
        Token::Year4 => write!(out, "{:04}", dt.year()),
        Token::Year2 => write!(out, "{:02}", dt.year().rem_euclid(100)),
        Token::Month => write!(out, "{}", dt.month()),
        Token::Month2 => write!(out, "{:02}", dt.month()),
        Token::MonthShort => write!(out, "{}", dt.format("%b")),
        Token::MonthLong => write!(out, "{}", dt.format("%B")),
        Token::Day => write!(out, "{}", dt.day()),
        Token::Day2 => write!(out, "{:02}", dt.day()),
        Token::Weekday => write!(out, "{}", dt.weekday().num_days_from_sunday()),
        Token::WeekdayMin => {
            let short = dt.format("%a").to_string();
            out.write_str(&short[..2])
        }
        Token::WeekdayShort => write!(out, "{}", dt.format("%a")),
        Token::WeekdayLong => write!(out, "{}", dt.format("%A")),
        Token::Hour => write!(out, "{}", dt.hour()),
        Token::Hour2 => write!(out, "{:02}", dt.hour()),
        Token::Hour12 => write!(out, "{}", dt.hour12().1),
        Token::Hour12Padded => write!(out, "{:02}", dt.hour12().1),
        Token::Minute => write!(out, "{}", dt.minute()),
        Token::Minute2 => write!(out, "{:02}", dt.minute()),
        Token::Second => write!(out, "{}", dt.second()),
        Token::Second2 => write!(out, "{:02}", dt.second()),
        Token::Tenths => write!(out, "{}", millis / 100),
        Token::Hundredths => write!(out, "{:02}", millis / 10),
        Token::Millis => write!(out, "{millis:03}"),
        Token::MeridiemUpper => out.write_str(if dt.hour12().0 { "PM" } else { "AM" }),
        Token::MeridiemLower => out.write_str(if dt.hour12().0 { "pm" } else { "am" }),
        Token::OffsetColon => write!(out, "{}", dt.format("%:z")),
        Token::OffsetCompact => write!(out, "{}", dt.format("%z")),
        Token::UnixSeconds => write!(out, "{}", dt.timestamp()),
        Token::UnixMillis => write!(out, "{}", dt.timestamp_millis()),
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn error(&self, what: &str) -> Error {
        Error::Format(format!(
            "expected {what} at position {} of {:?}",
            self.pos, self.input
        ))
    }

    fn expect(&mut self, literal: &str) -> Result<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(&format!("{literal:?}")))
        }
    }

    fn digits(&mut self, min: usize, max: usize) -> Result<u32> {
        let len = self
            .rest()
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return Err(self.error(&format!("{min} digit(s)")));
        }
        let text = &self.rest()[..len];
        self.pos += len;
        text.parse().map_err(|_| self.error("a number"))
    }

    fn signed_integer(&mut self) -> Result<i64> {
        let rest = self.rest();
        let sign = usize::from(rest.starts_with('-'));
        let len = rest[sign..].bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return Err(self.error("an integer"));
        }
        let text = &rest[..sign + len];
        self.pos += sign + len;
        text.parse().map_err(|_| self.error("an integer"))
    }

    fn word(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
        self.pos += len;
        &rest[..len]
    }
}

#[derive(Debug, Default)]
struct RawFields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    millis: Option<u32>,
    pm: Option<bool>,
    offset: Option<FixedOffset>,
    instant: Option<DateTime<Utc>>,
}

fn month_from_name(word: &str, short: bool) -> Option<u32> {
    (1..=12u8).find_map(|n| {
        let name = Month::try_from(n).ok()?.name();
        let candidate = if short { &name[..3] } else { name };
        candidate
            .eq_ignore_ascii_case(word)
            .then_some(u32::from(n))
    })
}

fn read_token(cursor: &mut Cursor<'_>, token: Token, f: &mut RawFields) -> Result<()> {
    match token {
        Token::Year4 => f.year = Some(cursor.digits(4, 4)? as i32),
        Token::Year2 => {
            let yy = cursor.digits(2, 2)? as i32;
            f.year = Some(if yy > 68 { 1900 + yy } else { 2000 + yy });
        }
        Token::Month | Token::Month2 => f.month = Some(cursor.digits(1, 2)?),
        Token::MonthShort | Token::MonthLong => {
            let word = cursor.word();
            let n = month_from_name(word, token == Token::MonthShort)
                .ok_or_else(|| Error::Format(format!("unknown month name {word:?}")))?;
            f.month = Some(n);
        }
        Token::Day | Token::Day2 => f.day = Some(cursor.digits(1, 2)?),
        Token::Weekday => {
            cursor.digits(1, 1)?;
        }
        Token::WeekdayMin | Token::WeekdayShort | Token::WeekdayLong => {
            if cursor.word().is_empty() {
                return Err(cursor.error("a weekday name"));
            }
        }
        Token::Hour | Token::Hour2 | Token::Hour12 | Token::Hour12Padded => {
            f.hour = Some(cursor.digits(1, 2)?)
        }
        Token::Minute | Token::Minute2 => f.minute = Some(cursor.digits(1, 2)?),
        Token::Second | Token::Second2 => f.second = Some(cursor.digits(1, 2)?),
        Token::Tenths => f.millis = Some(cursor.digits(1, 1)? * 100),
        Token::Hundredths => f.millis = Some(cursor.digits(2, 2)? * 10),
        Token::Millis => f.millis = Some(cursor.digits(3, 3)?),
        Token::MeridiemUpper | Token::MeridiemLower => {
            let rest = cursor.rest();
            let marker = rest.get(..2).unwrap_or(rest);
            f.pm = Some(if marker.eq_ignore_ascii_case("pm") {
                true
            } else if marker.eq_ignore_ascii_case("am") {
                false
            } else {
                return Err(cursor.error("AM or PM"));
            });
            cursor.pos += 2;
        }
        Token::OffsetColon | Token::OffsetCompact => f.offset = Some(read_offset(cursor)?),
        Token::UnixSeconds => {
            // sign comes from the text so that "-0.5" stays negative
            let negative = cursor.rest().starts_with('-');
            let secs = cursor.signed_integer()?;
            let mut millis = 0;
            if cursor.rest().starts_with('.') {
                cursor.pos += 1;
                let frac_start = cursor.pos;
                let frac = cursor.digits(1, 3)?;
                let width = cursor.pos - frac_start;
                millis = frac * 10u32.pow(3 - width as u32);
            }
            let magnitude = secs
                .checked_abs()
                .and_then(|secs| secs.checked_mul(1000))
                .and_then(|ms| ms.checked_add(i64::from(millis)))
                .ok_or_else(|| cursor.error("a timestamp within range"))?;
            let ms = if negative { -magnitude } else { magnitude };
            f.instant = Some(instant_from_millis(ms)?);
        }
        Token::UnixMillis => f.instant = Some(instant_from_millis(cursor.signed_integer()?)?),
    }
    Ok(())
}

fn read_offset(cursor: &mut Cursor<'_>) -> Result<FixedOffset> {
    let rest = cursor.rest();
    if rest.starts_with('Z') || rest.starts_with('z') {
        cursor.pos += 1;
        return FixedOffset::east_opt(0).ok_or_else(|| cursor.error("an offset"));
    }
    let sign = match rest.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(cursor.error("an offset such as +02:00")),
    };
    cursor.pos += 1;
    let hours = cursor.digits(2, 2)?;
    if cursor.rest().starts_with(':') {
        cursor.pos += 1;
    }
    let minutes = if cursor.rest().bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        cursor.digits(2, 2)?
    } else {
        0
    };
    let seconds = sign * (hours as i32 * 3600 + minutes as i32 * 60);
    FixedOffset::east_opt(seconds).ok_or_else(|| cursor.error("an offset within a day"))
}

pub(crate) fn instant_from_millis(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| Error::Format(format!("timestamp {ms} ms is out of range")))
}

impl RawFields {
    fn build(self, input: &str) -> Result<Parsed> {
        if let Some(instant) = self.instant {
            return Ok(Parsed::Instant(instant));
        }
        let mut hour = self.hour.unwrap_or(0);
        if let Some(pm) = self.pm {
            hour %= 12;
            if pm {
                hour += 12;
            }
        }
        let invalid = || Error::Format(format!("invalid date {input:?}"));
        let date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(1970),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )
        .ok_or_else(invalid)?;
        let naive = date
            .and_hms_milli_opt(
                hour,
                self.minute.unwrap_or(0),
                self.second.unwrap_or(0),
                self.millis.unwrap_or(0),
            )
            .ok_or_else(invalid)?;
        Ok(Parsed::Fields {
            naive,
            offset: self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(s, 0).single().unwrap()
    }

    #[test]
    fn test_compile_tokens_and_literals() {
        let p = Pattern::compile("YYYY-MM-DDTHH:mm:ssZ").unwrap();
        assert!(p.has_offset());
        assert_eq!(p.items.len(), 12);
        assert_eq!(p.items[5], Item::Literal("T".into()));

        let p = Pattern::compile("[Today is] dddd").unwrap();
        assert_eq!(p.items[0], Item::Literal("Today is ".into()));
        assert!(!p.has_offset());

        assert!(Pattern::compile("YYYY [oops").is_err());
    }

    #[test]
    fn test_format_default_and_names() {
        let dt = utc(1419984000);
        assert_eq!(Pattern::compile("YYYY-MM-DD").unwrap().format(&dt), "2014-12-31");
        assert_eq!(Pattern::compile("DD-MMM-YY").unwrap().format(&dt), "31-Dec-14");
        assert_eq!(
            Pattern::compile("dddd, MMMM D").unwrap().format(&dt),
            "Wednesday, December 31"
        );
        assert_eq!(Pattern::compile("ddd dd d").unwrap().format(&dt), "Wed We 3");
    }

    #[test]
    fn test_format_twelve_hour_clock() {
        let midnight = utc(1419984000);
        let p = Pattern::compile("YY-MM-DD hh:mm:ss A").unwrap();
        assert_eq!(p.format(&midnight), "14-12-31 12:00:00 AM");
        let afternoon = utc(1428236430);
        assert_eq!(Pattern::compile("h:mm a").unwrap().format(&afternoon), "12:20 pm");
    }

    #[test]
    fn test_format_offsets_and_epoch() {
        let dt = utc(1428236430).with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(Pattern::compile("HH:mm Z").unwrap().format(&dt), "14:20 +02:00");
        assert_eq!(Pattern::compile("ZZ").unwrap().format(&dt), "+0200");
        assert_eq!(Pattern::compile("X").unwrap().format(&dt), "1428236430");
        assert_eq!(Pattern::compile("x SSS").unwrap().format(&dt), "1428236430000 000");
    }

    #[test]
    fn test_parse_fields() {
        let p = Pattern::compile("DD-MM-YYYY").unwrap();
        let parsed = p.parse("31-12-2014").unwrap();
        assert_eq!(parsed.to_utc().unwrap().timestamp(), 1419984000);
    }

    #[test]
    fn test_parse_two_digit_years() {
        let p = Pattern::compile("YY").unwrap();
        assert_eq!(p.parse("69").unwrap().to_utc().unwrap().year(), 1969);
        assert_eq!(p.parse("68").unwrap().to_utc().unwrap().year(), 2068);
    }

    #[test]
    fn test_parse_offsets() {
        let p = Pattern::compile("YYYY-MM-DDTHH:mm:ssZ").unwrap();
        let shifted = p.parse("2023-08-25T14:45:00+02:00").unwrap().to_utc().unwrap();
        assert_eq!(shifted.hour(), 12);
        let zulu = p.parse("2023-08-25T14:45:00Z").unwrap().to_utc().unwrap();
        assert_eq!(zulu.hour(), 14);
        let compact = Pattern::compile("HH:mm ZZ").unwrap().parse("10:00 -0130").unwrap();
        assert_eq!(compact.to_utc().unwrap().minute(), 30);
    }

    #[test]
    fn test_parse_names_and_meridiem() {
        let p = Pattern::compile("DD MMM YYYY h:mm A").unwrap();
        let dt = p.parse("05 apr 2015 12:20 PM").unwrap().to_utc().unwrap();
        assert_eq!((dt.month(), dt.hour()), (4, 12));
        let dt = p.parse("05 Apr 2015 12:20 am").unwrap().to_utc().unwrap();
        assert_eq!(dt.hour(), 0);

        let long = Pattern::compile("MMMM D, YYYY").unwrap();
        assert_eq!(long.parse("January 31, 2015").unwrap().to_utc().unwrap().timestamp(), 1422662400);
    }

    #[test]
    fn test_parse_epoch_tokens() {
        let p = Pattern::compile("X").unwrap();
        assert_eq!(p.parse("1428236430").unwrap(), Parsed::Instant(utc(1428236430)));
        let p = Pattern::compile("x").unwrap();
        let parsed = p.parse("1428236430579").unwrap().to_utc().unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 579);
    }

    #[test]
    fn test_parse_fractional_negative_seconds() {
        let p = Pattern::compile("X").unwrap();
        let parsed = p.parse("-0.5").unwrap().to_utc().unwrap();
        assert_eq!(parsed.timestamp_millis(), -500);
        // floored to whole seconds
        assert_eq!(parsed.timestamp(), -1);

        let parsed = p.parse("-2.25").unwrap().to_utc().unwrap();
        assert_eq!(parsed.timestamp_millis(), -2250);
    }

    #[test]
    fn test_parse_epoch_overflow_is_an_error() {
        let p = Pattern::compile("X").unwrap();
        assert!(matches!(p.parse("9300000000000000"), Err(Error::Format(_))));
        assert!(matches!(p.parse("-9300000000000000.5"), Err(Error::Format(_))));
        assert!(matches!(p.parse("-9223372036854775808"), Err(Error::Format(_))));
        let p = Pattern::compile("x").unwrap();
        assert!(matches!(p.parse("99999999999999999999"), Err(Error::Format(_))));
    }

    #[test]
    fn test_parse_failures() {
        let p = Pattern::compile("DD-MM-YYYY").unwrap();
        assert!(matches!(p.parse("31/12/2014"), Err(Error::Format(_))));
        assert!(matches!(p.parse("31-02-2014"), Err(Error::Format(_))));
        assert!(matches!(p.parse("31-12-2014 extra"), Err(Error::Format(_))));
        assert!(matches!(p.parse("31-12-14"), Err(Error::Format(_))));
        let hours = Pattern::compile("HH").unwrap();
        assert!(hours.parse("25").is_err());
    }
}
