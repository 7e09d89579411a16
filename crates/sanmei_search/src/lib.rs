//! Solar-term search and four-pillar resolution.
//!
//! This crate provides:
//! - Low-precision apparent solar longitude, ΔT and the equation of time
//! - Solar-term sources: nominal table and astronomical bisection search
//! - Previous/next month-term lookups around an instant
//! - Four-pillar resolution (立春 year switch, 節 month switch, true solar
//!   time for day and hour) with boundary-sensitivity warnings
//! - Elapsed-day bases for hidden-stem selection

pub mod error;
pub mod hidden_basis;
pub mod pillar_types;
pub mod pillars;
pub(crate) mod search_util;
pub mod solar_term;
pub mod solar_term_types;
pub mod sun;

pub use error::SearchError;
pub use hidden_basis::{ElapsedDays, HiddenStemBasis, elapsed_days, whole_days_between};
pub use pillar_types::{
    BirthMoment, BoundaryWarning, FourPillars, PillarResolution, ResolveConfig, SUPPORTED_YEARS,
};
pub use pillars::resolve_pillars;
pub use solar_term::{
    AstronomicalSolarTerms, NominalSolarTerms, SolarTermSource, boundary_for_month,
    month_terms_for_year, next_month_term, prev_entry_of, prev_month_term,
};
pub use solar_term_types::{
    ALL_MONTH_TERMS, MonthTerm, NOMINAL_ENTRY_DAYS, SolarTermConfig, SolarTermEntry,
    SolarTermMode,
};
pub use sun::{
    apparent_solar_longitude_deg, delta_t_seconds, equation_of_time_minutes, jd_tt_to_ut,
    jd_ut_to_tt, normalize_deg, normalize_pm180,
};
