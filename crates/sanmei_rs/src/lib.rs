//! Fate-chart engine for the sanmei workspace.
//!
//! Wraps pillar resolution, hidden stems, star mapping and the element
//! summary behind one [`Engine`] built from a validated [`ChartConfig`],
//! plus a global engine for one-call use.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::{FixedOffset, NaiveDate};
//! use sanmei_rs::*;
//!
//! init(ChartConfig::default()).expect("engine init");
//!
//! let local = NaiveDate::from_ymd_opt(1984, 12, 2).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let jst = FixedOffset::east_opt(9 * 3600).unwrap();
//! let chart = compute_fate_chart(local, jst, 135.0, None).unwrap();
//! println!("{} total energy {}", chart.four_pillars, chart.total_energy);
//! ```

pub mod chart;
pub mod config;
pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;

pub use chart::{
    BirthInput, ChartInput, ChartWarning, FateChart, Gender, HiddenStems, TenStarChart,
    TwelveStarChart, build_chart, hidden_stem_chart, ten_star_chart, twelve_star_chart,
};
pub use config::ChartConfig;
pub use convenience::{compute_fate_chart, four_pillars, solar_term_mode};
pub use engine::Engine;
pub use error::ChartError;
pub use global::{init, is_initialized};

// Re-export the value types that appear in results.
pub use sanmei_base::{
    Branch, Element, FiveElements, HiddenStemInfo, Pillar, Stem, TenStar, TenStarMethod,
    Tenchusatsu, TwelveStar,
};
pub use sanmei_search::{
    BoundaryWarning, FourPillars, HiddenStemBasis, MonthTerm, PillarResolution, SolarTermConfig,
    SolarTermEntry, SolarTermMode,
};
pub use sanmei_time::{CivilTime, ZoneOffset};
