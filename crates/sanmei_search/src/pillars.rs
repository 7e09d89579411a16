//! Four-pillar resolution from a birth moment.
//!
//! Year and month switch at term entries measured on the absolute instant.
//! Day and hour use the true-solar-time wall clock at the birthplace, so a
//! birth shortly after local midnight west of the zone meridian can land on
//! the previous day.

use sanmei_base::{day_pillar, hour_pillar, month_pillar, year_pillar};
use sanmei_time::true_solar_time;

use crate::error::SearchError;
use crate::pillar_types::{
    BirthMoment, BoundaryWarning, FourPillars, PillarResolution, ResolveConfig,
};
use crate::solar_term::{SolarTermSource, next_month_term, prev_month_term};
use crate::solar_term_types::{MonthTerm, SolarTermEntry};
use crate::sun::equation_of_time_minutes;

/// Resolve the four pillars of `birth` against term boundaries from `source`.
pub fn resolve_pillars(
    source: &dyn SolarTermSource,
    birth: &BirthMoment,
    config: &ResolveConfig,
) -> Result<PillarResolution, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    birth.validate()?;

    let zone = birth.zone;
    let jd_ut = birth.jd_ut();

    let lichun = source.entry(birth.local.year, MonthTerm::Lichun, zone)?;
    let sexagenary_year = if jd_ut >= lichun.jd_ut {
        birth.local.year
    } else {
        birth.local.year - 1
    };
    let year = year_pillar(sexagenary_year);

    let month_term = prev_month_term(source, jd_ut, zone)?;
    let next_term = next_month_term(source, jd_ut, zone)?;
    let month = month_pillar(year.stem(), month_term.term.month_ordinal());

    let eot = if config.equation_of_time {
        equation_of_time_minutes(jd_ut)
    } else {
        0.0
    };
    let (tst, correction) = true_solar_time(&birth.local, zone, birth.longitude_deg, eot)?;
    let day_number = tst.day_number();
    let day = day_pillar(day_number);
    let hour = hour_pillar(day.stem(), tst.hour);

    Ok(PillarResolution {
        pillars: FourPillars {
            year,
            month,
            day,
            hour,
        },
        sexagenary_year,
        jd_ut,
        month_term,
        next_term,
        true_solar_time: tst,
        solar_time_correction: correction,
        day_number,
        boundary: boundary_warning(jd_ut, &month_term, &next_term, config.boundary_window_hours),
        mode: source.mode(),
    })
}

/// Warning for the nearer of the two enclosing entries, if inside the window.
fn boundary_warning(
    jd_ut: f64,
    prev: &SolarTermEntry,
    next: &SolarTermEntry,
    window_hours: f64,
) -> Option<BoundaryWarning> {
    if window_hours <= 0.0 {
        return None;
    }
    let after_prev = (jd_ut - prev.jd_ut) * 24.0;
    let before_next = (jd_ut - next.jd_ut) * 24.0;
    let (entry, hours) = if after_prev <= -before_next {
        (prev, after_prev)
    } else {
        (next, before_next)
    };
    (hours.abs() <= window_hours).then_some(BoundaryWarning {
        term: entry.term,
        entry: *entry,
        hours_from_entry: hours,
    })
}
