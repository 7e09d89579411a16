//! Elapsed-day bases for hidden-stem selection.
//!
//! The hidden stem of a branch depends on how many whole days have passed
//! since some month-opening term. Two conventions are in use:
//!
//! - [`HiddenStemBasis::OwnGoverningMonth`] (default): each branch counts
//!   from the most recent entry of the term opening the month that branch
//!   governs, so the year, month and day branches usually differ.
//! - [`HiddenStemBasis::BirthMonthEntry`]: every position counts from the
//!   entry that opened the birth month.

use sanmei_base::Branch;
use sanmei_time::ZoneOffset;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::pillar_types::PillarResolution;
use crate::solar_term::{SolarTermSource, prev_entry_of};
use crate::solar_term_types::MonthTerm;

/// Tolerance absorbing bisection noise when flooring to whole days.
const WHOLE_DAY_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiddenStemBasis {
    #[default]
    OwnGoverningMonth,
    BirthMonthEntry,
}

impl HiddenStemBasis {
    pub const fn name(self) -> &'static str {
        match self {
            Self::OwnGoverningMonth => "own-governing-month",
            Self::BirthMonthEntry => "birth-month-entry",
        }
    }
}

/// Whole days elapsed for the year, month and day branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedDays {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl ElapsedDays {
    /// Same count at every position.
    pub const fn uniform(days: i64) -> Self {
        Self {
            year: days,
            month: days,
            day: days,
        }
    }
}

/// Whole days between two instants, floored.
pub fn whole_days_between(from_jd: f64, to_jd: f64) -> i64 {
    (to_jd - from_jd + WHOLE_DAY_EPSILON).floor() as i64
}

/// Elapsed days for each chart branch of `resolution` under `basis`.
pub fn elapsed_days(
    source: &dyn SolarTermSource,
    basis: HiddenStemBasis,
    resolution: &PillarResolution,
    zone: ZoneOffset,
) -> Result<ElapsedDays, SearchError> {
    match basis {
        HiddenStemBasis::BirthMonthEntry => Ok(ElapsedDays::uniform(whole_days_between(
            resolution.month_term.jd_ut,
            resolution.jd_ut,
        ))),
        HiddenStemBasis::OwnGoverningMonth => {
            let pillars = resolution.pillars;
            let since = |branch: Branch| -> Result<i64, SearchError> {
                let term = MonthTerm::for_month_branch(branch);
                let entry = prev_entry_of(source, term, resolution.jd_ut, zone)?;
                Ok(whole_days_between(entry.jd_ut, resolution.jd_ut))
            };
            Ok(ElapsedDays {
                year: since(pillars.year.branch())?,
                month: since(pillars.month.branch())?,
                day: since(pillars.day.branch())?,
            })
        }
    }
}
