//! Property tests over the chart engine.

use chrono::{FixedOffset, NaiveDate};
use proptest::prelude::*;
use sanmei_rs::*;

fn nominal_engine() -> Engine {
    Engine::new(ChartConfig::nominal()).unwrap()
}

fn input(
    year: i32,
    ordinal: u32,
    hour: u32,
    minute: u32,
    offset_hours: i32,
    lon: f64,
) -> BirthInput {
    let local = NaiveDate::from_yo_opt(year, ordinal)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    BirthInput::new(local, offset, lon, None)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn chart_is_deterministic(
        year in 1901i32..2100,
        ordinal in 1u32..=365,
        hour in 0u32..24,
        minute in 0u32..60,
        offset_hours in -12i32..=14,
        lon in -180.0f64..=180.0,
    ) {
        let engine = nominal_engine();
        let birth = input(year, ordinal, hour, minute, offset_hours, lon);
        let a = engine.compute(&birth).unwrap();
        let b = engine.compute(&birth).unwrap();
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn chart_invariants_hold(
        year in 1901i32..2100,
        ordinal in 1u32..=365,
        hour in 0u32..24,
        offset_hours in -12i32..=14,
        lon in -180.0f64..=180.0,
    ) {
        let engine = nominal_engine();
        let c = engine.compute(&input(year, ordinal, hour, 30, offset_hours, lon)).unwrap();

        let t = c.twelve_stars;
        prop_assert_eq!(
            c.total_energy,
            u32::from(t.left_shoulder.score()) + u32::from(t.left_leg.score()) + u32::from(t.right_leg.score())
        );
        prop_assert!((3..=36).contains(&c.total_energy));

        // 4 pillar stems plus 2..=3 distinct hidden stems per branch
        let counted = c.five_elements.counts.total();
        prop_assert!((12..=16).contains(&counted), "counted {}", counted);

        let hidden = c.hidden_stems;
        prop_assert!(sanmei_base::hidden_stems(hidden.year.branch).contains(&hidden.year.stem));
        prop_assert!(sanmei_base::hidden_stems(hidden.month.branch).contains(&hidden.month.stem));
        prop_assert!(sanmei_base::hidden_stems(hidden.day.branch).contains(&hidden.day.stem));

        prop_assert!(c.month_term.jd_ut <= c.next_term.jd_ut);
        prop_assert_eq!(c.four_pillars.month.branch(), c.month_term.term.month_branch());
    }
}
