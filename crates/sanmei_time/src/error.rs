//! Error types for calendar and civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and time-zone handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a Gregorian calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second outside the clock range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside the supported range, in minutes.
    InvalidOffset(i32),
    /// Longitude outside [-180, 180] degrees.
    InvalidLongitude(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time {hour:02}:{minute:02}:{second}"),
            Self::InvalidOffset(minutes) => {
                write!(f, "UTC offset of {minutes} minutes is out of range")
            }
            Self::InvalidLongitude(lon) => {
                write!(f, "longitude {lon} is outside [-180, 180]")
            }
        }
    }
}

impl Error for TimeError {}
