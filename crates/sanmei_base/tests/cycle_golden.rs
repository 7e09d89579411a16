//! Golden-value integration tests for sexagenary cycle arithmetic.
//!
//! Day pillars are checked against almanac dates; month and hour pillars
//! against the five-tigers and five-rats tables.

use sanmei_base::{
    Branch, Pillar, Stem, day_pillar, hour_pillar, month_pillar, pillar_to_day_count,
    validate_day_epoch, year_pillar,
};
use sanmei_time::julian_day_number;

fn day_name(y: i32, m: u32, d: u32) -> String {
    day_pillar(julian_day_number(y, m, d)).name()
}

// ---------------------------------------------------------------------------
// Day pillars
// ---------------------------------------------------------------------------

#[test]
fn epoch_self_check_passes() {
    validate_day_epoch().unwrap();
}

#[test]
fn almanac_day_pillars() {
    assert_eq!(day_name(1900, 1, 1), "甲戌");
    assert_eq!(day_name(1949, 10, 1), "甲子");
    assert_eq!(day_name(1983, 8, 11), "辛未");
    assert_eq!(day_name(1984, 12, 2), "庚午");
    assert_eq!(day_name(1990, 3, 2), "丙寅");
    assert_eq!(day_name(2000, 1, 1), "戊午");
    assert_eq!(day_name(2018, 3, 21), "壬子");
}

#[test]
fn day_pillar_advances_one_step_per_day() {
    let start = julian_day_number(1999, 12, 1);
    for k in 0..120 {
        let today = day_pillar(start + k);
        let tomorrow = day_pillar(start + k + 1);
        assert_eq!(today.offset(1), tomorrow);
    }
}

#[test]
fn inverse_lands_in_first_cycle() {
    let p = Pillar::new(Stem::Xin, Branch::Wei).unwrap();
    let d = pillar_to_day_count(p);
    assert!((0..60).contains(&d), "expected 0..60, got {d}");
    assert_eq!(day_pillar(d), p);
}

// ---------------------------------------------------------------------------
// Year, month and hour pillars
// ---------------------------------------------------------------------------

#[test]
fn year_cycle_repeats_every_sixty() {
    for y in 1900..1960 {
        assert_eq!(year_pillar(y), year_pillar(y + 60));
        assert_ne!(year_pillar(y), year_pillar(y + 1));
    }
}

#[test]
fn month_stems_for_a_jia_year() {
    let expected = [
        "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉", "甲戌", "乙亥", "丙子",
        "丁丑",
    ];
    for (ordinal, name) in expected.iter().enumerate() {
        assert_eq!(month_pillar(Stem::Jia, ordinal as u8).name(), *name);
    }
}

#[test]
fn hour_stems_for_a_geng_day() {
    let expected = [
        (0, "丙子"),
        (1, "丁丑"),
        (3, "戊寅"),
        (11, "壬午"),
        (13, "癸未"),
        (21, "丁亥"),
        (23, "戊子"),
    ];
    for (hour, name) in expected {
        assert_eq!(hour_pillar(Stem::Geng, hour).name(), name, "hour {hour}");
    }
}
