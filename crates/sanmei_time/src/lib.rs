//! Calendar and civil-time primitives for the sanmei fate-chart engine.
//!
//! This crate provides:
//! - Gregorian calendar <-> Julian Date and integer Julian Day Number
//! - `CivilTime` wall-clock values and fixed `ZoneOffset`s
//! - True-solar-time correction from longitude (and an optional
//!   equation-of-time term)

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_time;

pub use civil::{CivilTime, ZoneOffset};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries, jdn_to_calendar, julian_day_number,
};
pub use solar_time::{
    MINUTES_PER_DEGREE, SolarTimeCorrection, longitude_correction_minutes, true_solar_time,
    validate_longitude,
};
