//! Golden-value integration tests for solar-term entries.
//!
//! Reference instants are the published entry times of 立春 (to the minute);
//! the low-precision solar theory should land within half an hour.

use sanmei_search::{
    ALL_MONTH_TERMS, AstronomicalSolarTerms, MonthTerm, NominalSolarTerms, SolarTermConfig,
    SolarTermMode, SolarTermSource, month_terms_for_year, next_month_term, prev_month_term,
};
use sanmei_time::{CivilTime, ZoneOffset};

fn jst() -> ZoneOffset {
    ZoneOffset::from_hours(9).unwrap()
}

fn minutes_between(a: f64, b: f64) -> f64 {
    (a - b).abs() * 1440.0
}

// ---------------------------------------------------------------------------
// Astronomical entries
// ---------------------------------------------------------------------------

#[test]
fn lichun_2024() {
    // 2024-02-04 08:27 UT (17:27 JST)
    let expected = CivilTime::new(2024, 2, 4, 8, 27, 0.0).to_jd_ut(ZoneOffset::UTC);
    let e = AstronomicalSolarTerms::default()
        .entry(2024, MonthTerm::Lichun, jst())
        .unwrap();
    let diff = minutes_between(e.jd_ut, expected);
    assert!(diff < 30.0, "立春 2024 off by {diff:.1} min");
    assert_eq!(e.mode, SolarTermMode::Astronomical);
}

#[test]
fn lichun_2000() {
    // 2000-02-04 12:40 UT
    let expected = CivilTime::new(2000, 2, 4, 12, 40, 0.0).to_jd_ut(ZoneOffset::UTC);
    let e = AstronomicalSolarTerms::default()
        .entry(2000, MonthTerm::Lichun, ZoneOffset::UTC)
        .unwrap();
    let diff = minutes_between(e.jd_ut, expected);
    assert!(diff < 30.0, "立春 2000 off by {diff:.1} min");
}

#[test]
fn entries_stay_near_nominal_days() {
    let astro = AstronomicalSolarTerms::default();
    for year in (1900..=2100).step_by(25) {
        for term in ALL_MONTH_TERMS {
            let a = astro.entry(year, term, jst()).unwrap();
            let n = NominalSolarTerms.entry(year, term, jst()).unwrap();
            let days = (a.jd_ut - n.jd_ut).abs();
            assert!(days < 3.0, "{year} {term}: {days:.2} days from nominal");
        }
    }
}

#[test]
fn entries_are_thirty_degree_steps_apart_in_time() {
    let entries = month_terms_for_year(&AstronomicalSolarTerms::default(), 2024, jst()).unwrap();
    for pair in entries.windows(2) {
        let gap = pair[1].jd_ut - pair[0].jd_ut;
        assert!((29.0..32.0).contains(&gap), "{} -> {}: {gap:.2} days", pair[0].term, pair[1].term);
    }
}

#[test]
fn tight_iteration_cap_still_lands_close() {
    let coarse = AstronomicalSolarTerms::new(SolarTermConfig {
        max_iterations: 20,
        ..SolarTermConfig::default()
    })
    .unwrap();
    let fine = AstronomicalSolarTerms::default();
    let a = coarse.entry(2024, MonthTerm::Lichun, jst()).unwrap();
    let b = fine.entry(2024, MonthTerm::Lichun, jst()).unwrap();
    // 12 day bracket / 2^20 is about a second
    assert!(minutes_between(a.jd_ut, b.jd_ut) < 0.1);
}

// ---------------------------------------------------------------------------
// Nominal entries
// ---------------------------------------------------------------------------

#[test]
fn nominal_entry_depends_on_zone() {
    let tokyo = NominalSolarTerms.entry(2024, MonthTerm::Lichun, jst()).unwrap();
    let utc = NominalSolarTerms
        .entry(2024, MonthTerm::Lichun, ZoneOffset::UTC)
        .unwrap();
    assert!((utc.jd_ut - tokyo.jd_ut - 9.0 / 24.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[test]
fn lookups_straddle_lichun_2024() {
    let astro = AstronomicalSolarTerms::default();
    let before = CivilTime::new(2024, 2, 4, 10, 0, 0.0).to_jd_ut(jst());
    let after = CivilTime::new(2024, 2, 4, 20, 0, 0.0).to_jd_ut(jst());

    assert_eq!(prev_month_term(&astro, before, jst()).unwrap().term, MonthTerm::Xiaohan);
    assert_eq!(next_month_term(&astro, before, jst()).unwrap().term, MonthTerm::Lichun);
    assert_eq!(prev_month_term(&astro, after, jst()).unwrap().term, MonthTerm::Lichun);
    assert_eq!(next_month_term(&astro, after, jst()).unwrap().term, MonthTerm::Jingzhe);
}

#[test]
fn lookups_cross_year_end() {
    let astro = AstronomicalSolarTerms::default();
    let jd = CivilTime::new(2023, 12, 31, 12, 0, 0.0).to_jd_ut(jst());
    let prev = prev_month_term(&astro, jd, jst()).unwrap();
    let next = next_month_term(&astro, jd, jst()).unwrap();
    assert_eq!((prev.term, prev.year), (MonthTerm::Daxue, 2023));
    assert_eq!((next.term, next.year), (MonthTerm::Xiaohan, 2024));
}
