//! Static sexagenary tables and rules for the sanmei fate-chart engine.
//!
//! This crate provides:
//! - Elements, polarity, the ten stems and twelve branches
//! - Pillars and sexagenary cycle arithmetic (day epoch, five tigers, five rats)
//! - The twenty-eight-yuan hidden-stem schedule and its resolver
//! - Ten major stars (rule and literal-table sources)
//! - Twelve minor stars with energy scores
//! - Five-element tallies and tenchusatsu groups
//!
//! Every table has a `validate_*` self-check meant to run once at startup.

pub mod branch;
pub mod element;
pub mod error;
pub mod five_elements;
pub mod hidden_stem;
pub mod sexagenary;
pub mod stem;
pub mod tenchusatsu;
pub mod ten_star;
pub mod twelve_star;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaseError;
pub use five_elements::{
    ElementShares, ElementTally, FiveElements, chart_stems, count_elements, element_energy,
    five_elements,
};
pub use hidden_stem::{
    HIDDEN_STEM_SCHEDULE, HiddenStemInfo, HiddenStemPeriod, hidden_stem_periods, hidden_stems,
    principal_hidden_stem, resolve_hidden_stem, resolve_hidden_stem_detail, schedule_span,
    validate_schedule, validate_schedule_table,
};
pub use sexagenary::{
    DAY_EPOCH_INDEX, DAY_EPOCH_JDN, DAY_EPOCH_REFERENCES, EpochReference, Pillar, YEAR_EPOCH,
    day_count_on_or_after, day_pillar, five_rats_start, five_tigers_start, hour_pillar,
    hour_slot, month_pillar, pillar_to_day_count, validate_day_epoch, validate_day_epoch_against,
    year_pillar,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_star::{
    ALL_TEN_STARS, RuleTenStars, TEN_STAR_TABLE, TableTenStars, TenStar, TenStarMethod,
    TenStarSource, ten_star, validate_ten_star_source,
};
pub use tenchusatsu::{Tenchusatsu, tenchusatsu};
pub use twelve_star::{
    ALL_TWELVE_STARS, TWELVE_STAR_TABLE, TwelveStar, twelve_star, validate_twelve_star_table,
};

/// Run every static-table self-check in this crate.
///
/// `ten_stars` is the ten-star source that will actually be used, so a
/// substituted table is checked instead of the built-in one.
pub fn validate_tables(ten_stars: &dyn TenStarSource) -> Result<(), BaseError> {
    validate_day_epoch()?;
    validate_schedule()?;
    validate_twelve_star_table(&TWELVE_STAR_TABLE)?;
    validate_ten_star_source(ten_stars)
}
