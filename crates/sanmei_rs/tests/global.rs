//! Global engine lifecycle. Kept to a single test because the engine is
//! process-wide and the steps must run in order.

use chrono::{FixedOffset, NaiveDate};
use sanmei_rs::*;

#[test]
fn global_engine_lifecycle() {
    let local = NaiveDate::from_ymd_opt(1983, 8, 11)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();

    assert!(!is_initialized());
    assert_eq!(
        compute_fate_chart(local, jst, 135.0, None).unwrap_err(),
        ChartError::NotInitialized
    );
    assert_eq!(solar_term_mode().unwrap_err(), ChartError::NotInitialized);

    let mut bad = ChartConfig::default();
    bad.boundary_window_hours = f64::INFINITY;
    assert!(matches!(init(bad), Err(ChartError::InvalidConfig(_))));
    assert!(!is_initialized());

    init(ChartConfig::nominal()).unwrap();
    assert!(is_initialized());
    assert_eq!(init(ChartConfig::default()), Err(ChartError::AlreadyInitialized));
    assert_eq!(solar_term_mode().unwrap(), SolarTermMode::Nominal);

    let chart = compute_fate_chart(local, jst, 135.0, Some(Gender::Female)).unwrap();
    assert_eq!(chart.four_pillars.day.name(), "辛未");
    assert_eq!(chart.total_energy, 27);
    assert_eq!(chart.input.gender, Some(Gender::Female));

    let pillars = four_pillars(local, jst, 135.0).unwrap();
    assert_eq!(pillars.pillars, chart.four_pillars);
}
