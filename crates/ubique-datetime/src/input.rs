//! Input and option types for the date conversions

use serde::{Deserialize, Serialize};

/// A single input or a homogeneous list of them
///
/// Conversions keep the structure: one input gives one result, a list gives
/// a list of the same length and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Input to `datenum`: date text or `[year, month, day, hour, minute, second, ms]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateSpec {
    Text(String),
    Components(Vec<i64>),
}

/// Input to `datevec`: a Unix timestamp (seconds or milliseconds) or date text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(i64),
    Text(String),
}

/// Per-call options shared by the date conversions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    /// Pattern used to parse or render text; see [`Pattern`](crate::Pattern)
    pub format: Option<String>,
}

impl DateOptions {
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }
}

impl From<&str> for DateSpec {
    fn from(text: &str) -> Self {
        DateSpec::Text(text.to_string())
    }
}

impl From<String> for DateSpec {
    fn from(text: String) -> Self {
        DateSpec::Text(text)
    }
}

impl From<Vec<i64>> for DateSpec {
    fn from(components: Vec<i64>) -> Self {
        DateSpec::Components(components)
    }
}

impl From<i64> for DateInput {
    fn from(ts: i64) -> Self {
        DateInput::Timestamp(ts)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

// Lift single values and lists of convertible values into `OneOrMany`
macro_rules! impl_one_or_many {
    ($target:ty => $($source:ty),*) => {
        $(
            impl From<$source> for OneOrMany<$target> {
                fn from(value: $source) -> Self {
                    OneOrMany::One(value.into())
                }
            }

            impl From<Vec<$source>> for OneOrMany<$target> {
                fn from(values: Vec<$source>) -> Self {
                    OneOrMany::Many(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

impl_one_or_many!(DateSpec => DateSpec, &str, String, Vec<i64>);
impl_one_or_many!(DateInput => DateInput, i64, &str, String);
