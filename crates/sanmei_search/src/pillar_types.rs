//! Types for four-pillar resolution.

use std::ops::RangeInclusive;

use sanmei_base::Pillar;
use sanmei_time::{CivilTime, SolarTimeCorrection, ZoneOffset, validate_longitude};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::solar_term_types::{MonthTerm, SolarTermEntry, SolarTermMode};

/// Civil years accepted by the resolver.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// A birth instant as recorded: zone wall-clock time plus place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthMoment {
    /// Local standard time of birth.
    pub local: CivilTime,
    /// UTC offset of `local`.
    pub zone: ZoneOffset,
    /// Birthplace longitude, degrees east positive.
    pub longitude_deg: f64,
}

impl BirthMoment {
    pub fn new(local: CivilTime, zone: ZoneOffset, longitude_deg: f64) -> Self {
        Self {
            local,
            zone,
            longitude_deg,
        }
    }

    /// Range-check the year, then the clock fields and longitude.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !SUPPORTED_YEARS.contains(&self.local.year) {
            return Err(SearchError::InputRange(format!(
                "year {} is outside {}..={}",
                self.local.year,
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }
        self.local.validate()?;
        validate_longitude(self.longitude_deg)?;
        Ok(())
    }

    /// Absolute instant of birth (JD UT).
    pub fn jd_ut(&self) -> f64 {
        self.local.to_jd_ut(self.zone)
    }
}

/// Resolver knobs that do not depend on the term source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Flag births closer than this to a term entry (default 24 h, 0 disables).
    pub boundary_window_hours: f64,
    /// Add the equation of time to the longitude correction (default off).
    pub equation_of_time: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            boundary_window_hours: 24.0,
            equation_of_time: false,
        }
    }
}

impl ResolveConfig {
    /// Largest accepted boundary window (three days).
    pub const MAX_WINDOW_HOURS: f64 = 72.0;

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.boundary_window_hours.is_finite() || self.boundary_window_hours < 0.0 {
            return Err("boundary_window_hours must be non-negative");
        }
        if self.boundary_window_hours > Self::MAX_WINDOW_HOURS {
            return Err("boundary_window_hours must not exceed 72");
        }
        Ok(())
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// All four pillars, year first.
    pub const fn all(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.name(),
            self.month.name(),
            self.day.name(),
            self.hour.name()
        )
    }
}

/// Birth falls close to a month-opening term.
///
/// The year and month pillars may differ from published tables that use
/// the other solar-term mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryWarning {
    pub term: MonthTerm,
    pub entry: SolarTermEntry,
    /// Signed hours from the entry to birth (negative: birth precedes it).
    pub hours_from_entry: f64,
}

/// Full result of [`crate::resolve_pillars`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarResolution {
    pub pillars: FourPillars,
    /// Year whose 立春 opened the sexagenary year of birth.
    pub sexagenary_year: i32,
    /// Birth instant (JD UT).
    pub jd_ut: f64,
    /// Entry of the term that opened the birth month.
    pub month_term: SolarTermEntry,
    /// Entry of the following month term.
    pub next_term: SolarTermEntry,
    /// Wall clock of local apparent (or mean) solar time.
    pub true_solar_time: CivilTime,
    pub solar_time_correction: SolarTimeCorrection,
    /// Julian Day Number of the true-solar-time date.
    pub day_number: i64,
    pub boundary: Option<BoundaryWarning>,
    pub mode: SolarTermMode,
}

impl PillarResolution {
    /// Fractional days since the birth month opened.
    pub fn days_since_month_entry(&self) -> f64 {
        self.jd_ut - self.month_term.jd_ut
    }
}
