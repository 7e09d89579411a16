//! Low-precision solar position, ΔT and the equation of time.
//!
//! Solar longitude follows Meeus, *Astronomical Algorithms*, ch. 25
//! (accuracy about 0.01°, i.e. a quarter of an hour in time). ΔT uses the
//! Espenak–Meeus polynomial fits; the equation of time is Meeus eq. 28.3.

use sanmei_time::{J2000_JD, SECONDS_PER_DAY, jd_to_centuries};

/// Wrap an angle into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Wrap an angle into [-180, 180).
pub fn normalize_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Decimal year of a Julian Date (good to a day, enough for ΔT).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT = TT − UT in seconds (Espenak–Meeus fits).
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2) - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2)
    }
}

/// Convert JD UT to JD TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// Convert JD TT to JD UT (one fixed-point step; ΔT varies slowly).
pub fn jd_tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year(jd_tt)) / SECONDS_PER_DAY
}

/// Geometric mean longitude of the Sun, degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_deg(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly of the Sun, degrees.
fn mean_anomaly_deg(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Eccentricity of Earth's orbit.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Apparent geocentric ecliptic longitude of the Sun at `jd_tt`, in [0, 360).
pub fn apparent_solar_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let l0 = mean_longitude_deg(t);
    let m = mean_anomaly_deg(t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Equation of time (apparent minus mean solar time) in minutes at `jd_ut`.
pub fn equation_of_time_minutes(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
    let l0 = mean_longitude_deg(t).to_radians();
    let m = mean_anomaly_deg(t).to_radians();
    let e = eccentricity(t);
    let eps = (23.439_291_1 - 0.013_004_2 * t).to_radians();
    let y = (eps / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    eq.to_degrees() * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD
        let lon = apparent_solar_longitude_deg(2_448_908.5);
        assert!((lon - 199.908_95).abs() < 1e-3, "got {lon}");
    }

    #[test]
    fn meeus_example_28b() {
        // 1992 October 13.0: E = +13m 42.7s
        let jd_ut = jd_tt_to_ut(2_448_908.5);
        let e = equation_of_time_minutes(jd_ut);
        assert!((e - 13.711).abs() < 0.1, "got {e}");
    }

    #[test]
    fn delta_t_reference_values() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
        assert!((delta_t_seconds(1900.0) - -2.79).abs() < 1e-9);
        let dt_1984 = delta_t_seconds(1984.0);
        assert!((53.0..55.5).contains(&dt_1984), "got {dt_1984}");
    }

    #[test]
    fn tt_ut_round_trip() {
        let jd = 2_451_545.25;
        assert!((jd_tt_to_ut(jd_ut_to_tt(jd)) - jd).abs() < 1e-8);
    }

    #[test]
    fn normalization() {
        assert!((normalize_deg(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_pm180(350.0) - -10.0).abs() < 1e-12);
        assert!((normalize_pm180(180.0) - -180.0).abs() < 1e-12);
    }
}
