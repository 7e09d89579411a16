//! True (apparent) solar time from zone time and longitude.
//!
//! Local mean solar time differs from zone time by four minutes for every
//! degree between the observer and the zone's reference meridian. Adding the
//! equation of time turns mean solar time into apparent solar time; callers
//! supply that term in minutes (zero to stay with mean solar time).

use serde::Serialize;

use crate::civil::{CivilTime, ZoneOffset};
use crate::error::TimeError;

/// Clock minutes per degree of longitude (1440 min / 360 deg).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Reject longitudes outside [-180, 180] degrees (and NaN).
pub fn validate_longitude(longitude_deg: f64) -> Result<(), TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidLongitude(longitude_deg));
    }
    Ok(())
}

/// Mean-solar-time correction in minutes for an observer at `longitude_deg`.
///
/// Positive east of the zone meridian: Tokyo (139.7 E, JST) runs ahead.
pub fn longitude_correction_minutes(longitude_deg: f64, zone: ZoneOffset) -> f64 {
    (longitude_deg - zone.meridian_deg()) * MINUTES_PER_DEGREE
}

/// Breakdown of the shift applied to zone time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTimeCorrection {
    /// Longitude term in minutes.
    pub longitude_minutes: f64,
    /// Equation-of-time term in minutes (0 when not applied).
    pub equation_of_time_minutes: f64,
}

impl SolarTimeCorrection {
    pub fn total_minutes(&self) -> f64 {
        self.longitude_minutes + self.equation_of_time_minutes
    }
}

/// Convert zone wall-clock time to true solar time at `longitude_deg`.
pub fn true_solar_time(
    local: &CivilTime,
    zone: ZoneOffset,
    longitude_deg: f64,
    equation_of_time_minutes: f64,
) -> Result<(CivilTime, SolarTimeCorrection), TimeError> {
    local.validate()?;
    validate_longitude(longitude_deg)?;
    let correction = SolarTimeCorrection {
        longitude_minutes: longitude_correction_minutes(longitude_deg, zone),
        equation_of_time_minutes,
    };
    let shifted = local.shifted_by_seconds(correction.total_minutes() * 60.0);
    Ok((shifted, correction))
}
