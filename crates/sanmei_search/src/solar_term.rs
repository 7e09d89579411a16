//! Solar-term sources and boundary lookups.
//!
//! Year and month pillars change at the twelve month-opening terms, not at
//! calendar month boundaries. Two sources are available behind
//! [`SolarTermSource`]:
//!
//! - [`NominalSolarTerms`]: a fixed day per Gregorian month, starting at
//!   local midnight. Drifts by a day or so against the sky.
//! - [`AstronomicalSolarTerms`]: the instant the Sun's apparent longitude
//!   reaches the term longitude, found by bisection with a fixed iteration
//!   cap inside a bracket around the nominal date.
//!
//! Every term falls on day 4..=9 of its Gregorian month in any zone, so the
//! term governing an instant is either the one of the instant's own month
//! or the one of the month before.

use sanmei_time::{CivilTime, ZoneOffset, calendar_to_jd};

use crate::error::SearchError;
use crate::search_util::bisect_zero;
use crate::solar_term_types::{
    ALL_MONTH_TERMS, MonthTerm, SolarTermConfig, SolarTermEntry, SolarTermMode,
};
use crate::sun::{apparent_solar_longitude_deg, jd_tt_to_ut, jd_ut_to_tt, normalize_pm180};

/// A strategy producing term entry instants.
pub trait SolarTermSource: Send + Sync {
    /// Which mode this source implements.
    fn mode(&self) -> SolarTermMode;

    /// Entry of `term` in Gregorian `year`.
    ///
    /// `zone` anchors nominal civil dates; astronomical sources ignore it.
    fn entry(
        &self,
        year: i32,
        term: MonthTerm,
        zone: ZoneOffset,
    ) -> Result<SolarTermEntry, SearchError>;
}

// ---------------------------------------------------------------------------
// Nominal table
// ---------------------------------------------------------------------------

/// Fixed nominal entry days (see [`crate::NOMINAL_ENTRY_DAYS`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct NominalSolarTerms;

impl SolarTermSource for NominalSolarTerms {
    fn mode(&self) -> SolarTermMode {
        SolarTermMode::Nominal
    }

    fn entry(
        &self,
        year: i32,
        term: MonthTerm,
        zone: ZoneOffset,
    ) -> Result<SolarTermEntry, SearchError> {
        let midnight = CivilTime::midnight(year, term.gregorian_month(), term.nominal_day());
        Ok(SolarTermEntry {
            term,
            year,
            jd_ut: midnight.to_jd_ut(zone),
            mode: SolarTermMode::Nominal,
        })
    }
}

// ---------------------------------------------------------------------------
// Astronomical search
// ---------------------------------------------------------------------------

/// Apparent-solar-longitude search.
#[derive(Debug, Clone, Copy)]
pub struct AstronomicalSolarTerms {
    config: SolarTermConfig,
}

impl AstronomicalSolarTerms {
    pub fn new(config: SolarTermConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolarTermConfig {
        &self.config
    }

    /// Entry instant (JD UT) of `term` in `year`.
    fn find_jd_ut(&self, year: i32, term: MonthTerm) -> Result<f64, SearchError> {
        let target = term.solar_longitude_deg();
        let nominal_ut = calendar_to_jd(
            year,
            term.gregorian_month(),
            f64::from(term.nominal_day()) + 0.5,
        );
        let guess_tt = jd_ut_to_tt(nominal_ut);
        let offset_at = |jd_tt: f64| normalize_pm180(apparent_solar_longitude_deg(jd_tt) - target);

        let t_a = guess_tt - self.config.bracket_days;
        let t_b = guess_tt + self.config.bracket_days;
        let jd_tt = bisect_zero(
            t_a,
            offset_at(t_a),
            t_b,
            offset_at(t_b),
            self.config.max_iterations,
            self.config.convergence_days,
            &offset_at,
        )?;
        Ok(jd_tt_to_ut(jd_tt))
    }
}

impl Default for AstronomicalSolarTerms {
    fn default() -> Self {
        Self {
            config: SolarTermConfig::default(),
        }
    }
}

impl SolarTermSource for AstronomicalSolarTerms {
    fn mode(&self) -> SolarTermMode {
        SolarTermMode::Astronomical
    }

    fn entry(
        &self,
        year: i32,
        term: MonthTerm,
        _zone: ZoneOffset,
    ) -> Result<SolarTermEntry, SearchError> {
        Ok(SolarTermEntry {
            term,
            year,
            jd_ut: self.find_jd_ut(year, term)?,
            mode: SolarTermMode::Astronomical,
        })
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

fn term_of_month(month: u32) -> MonthTerm {
    ALL_MONTH_TERMS[(month.clamp(1, 12) - 1) as usize]
}

/// Entry of the term falling in Gregorian `month` (1..=12) of `year`.
pub fn boundary_for_month(
    source: &dyn SolarTermSource,
    year: i32,
    month: u32,
    zone: ZoneOffset,
) -> Result<SolarTermEntry, SearchError> {
    let term = MonthTerm::for_gregorian_month(month)
        .ok_or_else(|| SearchError::InputRange(format!("month {month} is outside 1..=12")))?;
    source.entry(year, term, zone)
}

/// All twelve entries of `year`, in Gregorian order.
pub fn month_terms_for_year(
    source: &dyn SolarTermSource,
    year: i32,
    zone: ZoneOffset,
) -> Result<Vec<SolarTermEntry>, SearchError> {
    ALL_MONTH_TERMS
        .iter()
        .map(|term| source.entry(year, *term, zone))
        .collect()
}

/// Most recent term entry at or before `jd_ut`.
pub fn prev_month_term(
    source: &dyn SolarTermSource,
    jd_ut: f64,
    zone: ZoneOffset,
) -> Result<SolarTermEntry, SearchError> {
    let civil = CivilTime::from_jd_ut(jd_ut, zone);
    let this = source.entry(civil.year, term_of_month(civil.month), zone)?;
    if this.jd_ut <= jd_ut {
        return Ok(this);
    }
    let (year, month) = if civil.month == 1 {
        (civil.year - 1, 12)
    } else {
        (civil.year, civil.month - 1)
    };
    source.entry(year, term_of_month(month), zone)
}

/// First term entry strictly after `jd_ut`.
pub fn next_month_term(
    source: &dyn SolarTermSource,
    jd_ut: f64,
    zone: ZoneOffset,
) -> Result<SolarTermEntry, SearchError> {
    let civil = CivilTime::from_jd_ut(jd_ut, zone);
    let this = source.entry(civil.year, term_of_month(civil.month), zone)?;
    if this.jd_ut > jd_ut {
        return Ok(this);
    }
    let (year, month) = if civil.month == 12 {
        (civil.year + 1, 1)
    } else {
        (civil.year, civil.month + 1)
    };
    source.entry(year, term_of_month(month), zone)
}

/// Most recent entry of one specific `term` at or before `jd_ut`.
pub fn prev_entry_of(
    source: &dyn SolarTermSource,
    term: MonthTerm,
    jd_ut: f64,
    zone: ZoneOffset,
) -> Result<SolarTermEntry, SearchError> {
    let year = CivilTime::from_jd_ut(jd_ut, zone).year;
    let this = source.entry(year, term, zone)?;
    if this.jd_ut <= jd_ut {
        Ok(this)
    } else {
        source.entry(year - 1, term, zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> ZoneOffset {
        ZoneOffset::from_hours(9).unwrap()
    }

    #[test]
    fn nominal_entry_is_local_midnight() {
        let e = NominalSolarTerms
            .entry(1984, MonthTerm::Lidong, jst())
            .unwrap();
        let civil = e.civil(jst());
        assert_eq!((civil.month, civil.day, civil.hour), (11, 8, 0));
        assert_eq!(e.mode, SolarTermMode::Nominal);
    }

    #[test]
    fn astronomical_longitude_matches_target() {
        let src = AstronomicalSolarTerms::default();
        for term in ALL_MONTH_TERMS {
            let e = src.entry(2024, term, jst()).unwrap();
            let lon = apparent_solar_longitude_deg(jd_ut_to_tt(e.jd_ut));
            let diff = normalize_pm180(lon - term.solar_longitude_deg());
            assert!(diff.abs() < 1e-4, "{term}: off by {diff} deg");
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SolarTermConfig {
            max_iterations: 0,
            ..SolarTermConfig::default()
        };
        assert!(matches!(
            AstronomicalSolarTerms::new(config),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn prev_and_next_bracket_the_instant() {
        let jd = CivilTime::new(1984, 12, 2, 12, 0, 0.0).to_jd_ut(jst());
        for source in [
            &NominalSolarTerms as &dyn SolarTermSource,
            &AstronomicalSolarTerms::default(),
        ] {
            let prev = prev_month_term(source, jd, jst()).unwrap();
            let next = next_month_term(source, jd, jst()).unwrap();
            assert_eq!(prev.term, MonthTerm::Lidong);
            assert_eq!(next.term, MonthTerm::Daxue);
            assert!(prev.jd_ut <= jd && jd < next.jd_ut);
        }
    }

    #[test]
    fn early_january_falls_back_to_previous_december() {
        let jd = CivilTime::new(2000, 1, 2, 12, 0, 0.0).to_jd_ut(jst());
        let prev = prev_month_term(&NominalSolarTerms, jd, jst()).unwrap();
        assert_eq!((prev.term, prev.year), (MonthTerm::Daxue, 1999));
        let next = next_month_term(&NominalSolarTerms, jd, jst()).unwrap();
        assert_eq!((next.term, next.year), (MonthTerm::Xiaohan, 2000));
    }

    #[test]
    fn prev_entry_of_reaches_back_a_year() {
        let jd = CivilTime::new(1984, 12, 2, 12, 0, 0.0).to_jd_ut(jst());
        let e = prev_entry_of(&NominalSolarTerms, MonthTerm::Mangzhong, jd, jst()).unwrap();
        assert_eq!(e.year, 1984);
        let e = prev_entry_of(&NominalSolarTerms, MonthTerm::Daxue, jd, jst()).unwrap();
        assert_eq!(e.year, 1983);
    }

    #[test]
    fn boundary_for_month_validates_index() {
        assert!(boundary_for_month(&NominalSolarTerms, 2024, 0, jst()).is_err());
        let e = boundary_for_month(&NominalSolarTerms, 2024, 2, jst()).unwrap();
        assert_eq!(e.term, MonthTerm::Lichun);
    }

    #[test]
    fn year_has_twelve_ordered_entries() {
        let entries = month_terms_for_year(&AstronomicalSolarTerms::default(), 2000, jst()).unwrap();
        assert_eq!(entries.len(), 12);
        for pair in entries.windows(2) {
            assert!(pair[0].jd_ut < pair[1].jd_ut);
        }
    }
}
