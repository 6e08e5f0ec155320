//! Error types for civil time validation and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation or time-string parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date is not a valid Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Time-of-day component out of range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// Time string could not be parsed as HH:MM or HH:MM:SS.
    TimeParse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}:{second:02}")
            }
            Self::TimeParse(s) => write!(f, "cannot parse time string: {s:?}"),
        }
    }
}

impl Error for TimeError {}
