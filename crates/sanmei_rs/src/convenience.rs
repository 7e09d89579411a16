//! Free functions over the global engine.

use chrono::{FixedOffset, NaiveDateTime};
use sanmei_search::{PillarResolution, SolarTermMode};

use crate::chart::{BirthInput, FateChart, Gender};
use crate::error::ChartError;
use crate::global::engine;

/// Compute a fate chart with the global engine.
pub fn compute_fate_chart(
    local: NaiveDateTime,
    offset: FixedOffset,
    longitude_deg: f64,
    gender: Option<Gender>,
) -> Result<FateChart, ChartError> {
    engine()?.compute(&BirthInput::new(local, offset, longitude_deg, gender))
}

/// Resolve only the four pillars with the global engine.
pub fn four_pillars(
    local: NaiveDateTime,
    offset: FixedOffset,
    longitude_deg: f64,
) -> Result<PillarResolution, ChartError> {
    engine()?.pillars(&BirthInput::new(local, offset, longitude_deg, None))
}

/// Solar-term mode of the global engine.
pub fn solar_term_mode() -> Result<SolarTermMode, ChartError> {
    Ok(engine()?.solar_term_mode())
}
