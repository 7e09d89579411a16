//! Engine configuration.
//!
//! Every strategy choice is fixed here, once, before the engine is built.
//! Deserializes from TOML or JSON with all fields optional:
//!
//! ```toml
//! solar_terms = "nominal"
//! ten_star_method = "table"
//! hidden_stem_basis = "birth-month-entry"
//! boundary_window_hours = 12.0
//!
//! [search]
//! max_iterations = 40
//! ```

use sanmei_base::TenStarMethod;
use sanmei_search::{HiddenStemBasis, ResolveConfig, SolarTermConfig, SolarTermMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Source of month-term boundaries.
    pub solar_terms: SolarTermMode,
    /// Ten-star lookup strategy.
    pub ten_star_method: TenStarMethod,
    /// Elapsed-day basis for hidden stems.
    pub hidden_stem_basis: HiddenStemBasis,
    /// Boundary-sensitivity window in hours (0 disables the warning).
    pub boundary_window_hours: f64,
    /// Apply the equation of time to true solar time.
    pub equation_of_time: bool,
    /// Astronomical search parameters (ignored in nominal mode).
    pub search: SolarTermConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let resolve = ResolveConfig::default();
        Self {
            solar_terms: SolarTermMode::Astronomical,
            ten_star_method: TenStarMethod::Rule,
            hidden_stem_basis: HiddenStemBasis::OwnGoverningMonth,
            boundary_window_hours: resolve.boundary_window_hours,
            equation_of_time: resolve.equation_of_time,
            search: SolarTermConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Nominal term days instead of the astronomical search.
    pub fn nominal() -> Self {
        Self {
            solar_terms: SolarTermMode::Nominal,
            ..Self::default()
        }
    }

    /// Resolver settings carried by this config.
    pub fn resolve_config(&self) -> ResolveConfig {
        ResolveConfig {
            boundary_window_hours: self.boundary_window_hours,
            equation_of_time: self.equation_of_time,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.resolve_config().validate()?;
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_valid() {
        assert!(ChartConfig::default().validate().is_ok());
        assert!(ChartConfig::nominal().validate().is_ok());
        assert_eq!(ChartConfig::nominal().solar_terms, SolarTermMode::Nominal);
        assert_eq!(ChartConfig::default().solar_terms, SolarTermMode::Astronomical);
        assert_eq!(
            ChartConfig::default().hidden_stem_basis,
            HiddenStemBasis::OwnGoverningMonth
        );
        assert_eq!(
            ChartConfig::nominal().hidden_stem_basis,
            HiddenStemBasis::OwnGoverningMonth
        );
    }

    #[test]
    fn bad_window_rejected() {
        let config = ChartConfig {
            boundary_window_hours: -1.0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_search_rejected() {
        let mut config = ChartConfig::default();
        config.search.bracket_days = 30.0;
        assert_eq!(config.validate(), Err("bracket_days must not exceed 14"));
    }

    #[test]
    fn toml_with_partial_fields() {
        let config: ChartConfig = toml::from_str(
            r#"
            solar_terms = "nominal"
            ten_star_method = "table"
            hidden_stem_basis = "birth-month-entry"

            [search]
            max_iterations = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.solar_terms, SolarTermMode::Nominal);
        assert_eq!(config.ten_star_method, TenStarMethod::Table);
        assert_eq!(config.hidden_stem_basis, HiddenStemBasis::BirthMonthEntry);
        assert_eq!(config.search.max_iterations, 40);
        assert!((config.search.bracket_days - 6.0).abs() < 1e-12);
        assert!((config.boundary_window_hours - 24.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_mode_rejected() {
        let parsed: Result<ChartConfig, _> = toml::from_str(r#"solar_terms = "lunar""#);
        assert!(parsed.is_err());
    }
}
