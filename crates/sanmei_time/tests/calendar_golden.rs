//! Golden-value integration tests for calendar and solar-time conversions.
//!
//! Day numbers are checked against published Julian Day Numbers; the
//! solar-time cases use whole-degree longitudes so the shifts are exact.

use sanmei_time::{
    CivilTime, ZoneOffset, calendar_to_jd, jd_to_calendar, jdn_to_calendar, julian_day_number,
    true_solar_time,
};

// ---------------------------------------------------------------------------
// Julian Day Numbers
// ---------------------------------------------------------------------------

#[test]
fn reference_day_numbers() {
    let cases = [
        ((1900, 1, 1), 2_415_021_i64),
        ((1949, 10, 1), 2_433_191),
        ((1983, 8, 11), 2_445_558),
        ((1984, 12, 2), 2_446_037),
        ((1990, 3, 2), 2_447_953),
        ((2000, 1, 1), 2_451_545),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(
            julian_day_number(y, m, d),
            expected,
            "JDN of {y:04}-{m:02}-{d:02}"
        );
        assert_eq!(jdn_to_calendar(expected), (y, m, d));
    }
}

#[test]
fn consecutive_days_are_consecutive_numbers() {
    let mut jdn = julian_day_number(1899, 12, 1);
    let mut date = jdn_to_calendar(jdn);
    for _ in 0..(366 * 3) {
        jdn += 1;
        let next = jdn_to_calendar(jdn);
        assert_ne!(next, date);
        assert_eq!(julian_day_number(next.0, next.1, next.2), jdn);
        date = next;
    }
}

#[test]
fn fractional_round_trip_through_calendar() {
    let jd = calendar_to_jd(2024, 2, 4.3125);
    let (y, m, d) = jd_to_calendar(jd);
    assert_eq!((y, m), (2024, 2));
    assert!((d - 4.3125).abs() < 1e-8, "expected 4.3125, got {d}");
}

// ---------------------------------------------------------------------------
// Zone time and true solar time
// ---------------------------------------------------------------------------

#[test]
fn utc_and_jst_name_the_same_instant() {
    let jst = ZoneOffset::from_hours(9).unwrap();
    let local = CivilTime::new(2024, 2, 4, 16, 27, 0.0);
    let utc = CivilTime::new(2024, 2, 4, 7, 27, 0.0);
    assert!((local.to_jd_ut(jst) - utc.to_jd_ut(ZoneOffset::UTC)).abs() < 1e-9);
}

#[test]
fn longitude_shift_is_four_minutes_per_degree() {
    let jst = ZoneOffset::from_hours(9).unwrap();
    let local = CivilTime::new(1983, 8, 11, 12, 0, 0.0);
    let (east, _) = true_solar_time(&local, jst, 140.0, 0.0).unwrap();
    let (west, _) = true_solar_time(&local, jst, 130.0, 0.0).unwrap();
    assert_eq!((east.hour, east.minute), (12, 20));
    assert_eq!((west.hour, west.minute), (11, 40));
}

#[test]
fn negative_offsets_use_western_meridians() {
    let nyc = ZoneOffset::from_hours(-5).unwrap();
    let local = CivilTime::new(2000, 6, 1, 12, 0, 0.0);
    let (tst, corr) = true_solar_time(&local, nyc, -74.0, 0.0).unwrap();
    assert!((corr.longitude_minutes - 4.0).abs() < 1e-9);
    assert_eq!((tst.hour, tst.minute), (12, 4));
}
