//! Local civil date/time and fixed UTC offsets.
//!
//! `CivilTime` is wall-clock time in some zone; it carries no zone itself.
//! Pair it with a [`ZoneOffset`] to obtain an absolute instant (JD UT).

use serde::{Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar, jdn_to_calendar,
    julian_day_number,
};

/// A fixed offset from UTC, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneOffset {
    minutes: i32,
}

impl ZoneOffset {
    /// UTC itself.
    pub const UTC: Self = Self { minutes: 0 };

    /// Largest accepted offset magnitude (18 hours).
    pub const MAX_MINUTES: i32 = 18 * 60;

    /// Offset east of Greenwich in minutes (JST = +540).
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > Self::MAX_MINUTES {
            return Err(TimeError::InvalidOffset(minutes));
        }
        Ok(Self { minutes })
    }

    /// Offset in whole hours.
    pub fn from_hours(hours: i32) -> Result<Self, TimeError> {
        Self::from_minutes(hours.saturating_mul(60))
    }

    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset as a fraction of a day.
    pub fn as_days(self) -> f64 {
        f64::from(self.minutes) / 1440.0
    }

    /// Longitude of the zone's reference meridian (15 degrees per hour).
    pub fn meridian_deg(self) -> f64 {
        f64::from(self.minutes) / 4.0
    }
}

impl std::fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl Serialize for ZoneOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wall-clock calendar date and time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check that the fields name a real Gregorian date and clock time.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month == 0 || self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23
            || self.minute > 59
            || !self.second.is_finite()
            || self.second < 0.0
            || self.second >= 60.0
        {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }

    /// Integer Julian Day Number of the calendar date.
    pub fn day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Seconds elapsed since local midnight.
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Absolute instant (JD UT) of this wall-clock time in `zone`.
    pub fn to_jd_ut(&self, zone: ZoneOffset) -> f64 {
        let day_frac = f64::from(self.day) + self.seconds_of_day() / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac) - zone.as_days()
    }

    /// Wall-clock time in `zone` at the absolute instant `jd_ut`.
    pub fn from_jd_ut(jd_ut: f64, zone: ZoneOffset) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut + zone.as_days());
        let day = day_frac.floor();
        let jdn = julian_day_number(year, month, day as u32);
        Self::from_day_number(jdn, (day_frac - day) * SECONDS_PER_DAY)
    }

    /// Build from a day number and seconds since midnight.
    pub fn from_day_number(jdn: i64, seconds_of_day: f64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        let s = seconds_of_day.clamp(0.0, SECONDS_PER_DAY - 1e-6);
        let hour = (s / 3600.0).floor() as u32;
        let minute = ((s % 3600.0) / 60.0).floor() as u32;
        let second = s % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Shift the wall clock by `delta` seconds, rolling the date as needed.
    pub fn shifted_by_seconds(&self, delta: f64) -> Self {
        let total = self.seconds_of_day() + delta;
        let days = (total / SECONDS_PER_DAY).floor();
        let rem = total - days * SECONDS_PER_DAY;
        Self::from_day_number(self.day_number() + days as i64, rem)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl Serialize for CivilTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
