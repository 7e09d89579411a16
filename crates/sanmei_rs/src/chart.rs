//! Chart input and result types, and assembly of a chart from resolved pillars.

use std::str::FromStr;

use chrono::{Datelike, FixedOffset, NaiveDateTime, Timelike};
use sanmei_base::{
    FiveElements, HiddenStemInfo, Pillar, Stem, TenStar, TenStarMethod, TenStarSource,
    Tenchusatsu, TwelveStar, five_elements, resolve_hidden_stem_detail, tenchusatsu, twelve_star,
};
use sanmei_search::{
    BirthMoment, BoundaryWarning, ElapsedDays, FourPillars, HiddenStemBasis, PillarResolution,
    SolarTermEntry, SolarTermMode,
};
use sanmei_time::{CivilTime, SolarTimeCorrection, ZoneOffset};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Gender as recorded on the birth data. Echoed only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

/// Birth data at the API edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    /// Local standard time of birth.
    pub local: NaiveDateTime,
    /// UTC offset of `local`.
    pub offset: FixedOffset,
    /// Birthplace longitude, degrees east positive.
    pub longitude_deg: f64,
    pub gender: Option<Gender>,
}

impl BirthInput {
    pub fn new(
        local: NaiveDateTime,
        offset: FixedOffset,
        longitude_deg: f64,
        gender: Option<Gender>,
    ) -> Self {
        Self {
            local,
            offset,
            longitude_deg,
            gender,
        }
    }

    /// Convert to the resolver's birth moment.
    ///
    /// Offsets are truncated to whole minutes.
    pub fn to_birth_moment(&self) -> Result<BirthMoment, ChartError> {
        let zone = ZoneOffset::from_minutes(self.offset.local_minus_utc() / 60)?;
        let second = f64::from(self.local.second())
            + f64::from(self.local.nanosecond().min(999_999_999)) / 1e9;
        let local = CivilTime::new(
            self.local.year(),
            self.local.month(),
            self.local.day(),
            self.local.hour(),
            self.local.minute(),
            second,
        );
        Ok(BirthMoment::new(local, zone, self.longitude_deg))
    }
}

/// Birth data as echoed in the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub local: CivilTime,
    pub zone: ZoneOffset,
    pub longitude_deg: f64,
    pub gender: Option<Gender>,
}

/// Active hidden stem of each chart branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStems {
    pub basis: HiddenStemBasis,
    pub year: HiddenStemInfo,
    pub month: HiddenStemInfo,
    pub day: HiddenStemInfo,
}

/// Ten major stars at the five body positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenStarChart {
    pub method: TenStarMethod,
    /// Day stem against the year stem.
    pub head: TenStar,
    /// Day stem against the month branch's hidden stem.
    pub chest: TenStar,
    /// Day stem against the month stem.
    pub belly: TenStar,
    /// Day stem against the year branch's hidden stem.
    pub left_hand: TenStar,
    /// Day stem against the day branch's hidden stem.
    pub right_hand: TenStar,
}

/// Twelve minor stars at the three body positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwelveStarChart {
    /// Day stem against the year branch.
    pub left_shoulder: TwelveStar,
    /// Day stem against the month branch.
    pub left_leg: TwelveStar,
    /// Day stem against the day branch.
    pub right_leg: TwelveStar,
}

impl TwelveStarChart {
    /// Sum of the three scores.
    pub fn total_energy(&self) -> u32 {
        [self.left_shoulder, self.left_leg, self.right_leg]
            .iter()
            .map(|s| u32::from(s.score()))
            .sum()
    }
}

/// Non-fatal conditions attached to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartWarning {
    /// Birth within the boundary window of a month-term entry.
    BoundarySensitive(BoundaryWarning),
}

/// A complete fate chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FateChart {
    pub input: ChartInput,
    pub solar_term_mode: SolarTermMode,
    pub sexagenary_year: i32,
    pub month_term: SolarTermEntry,
    pub next_term: SolarTermEntry,
    pub true_solar_time: CivilTime,
    pub solar_time_correction: SolarTimeCorrection,
    pub four_pillars: FourPillars,
    pub hidden_stems: HiddenStems,
    pub ten_stars: TenStarChart,
    pub twelve_stars: TwelveStarChart,
    pub five_elements: FiveElements,
    pub total_energy: u32,
    pub tenchusatsu: Tenchusatsu,
    pub warnings: Vec<ChartWarning>,
}

impl FateChart {
    pub fn day_stem(&self) -> Stem {
        self.four_pillars.day.stem()
    }

    pub fn is_boundary_sensitive(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ChartWarning::BoundarySensitive(_)))
    }
}

/// Ten-star chart for `pillars` given the resolved hidden stems.
pub fn ten_star_chart(
    source: &dyn TenStarSource,
    pillars: &FourPillars,
    hidden: &HiddenStems,
) -> TenStarChart {
    let day = pillars.day.stem();
    TenStarChart {
        method: source.method(),
        head: source.ten_star(day, pillars.year.stem()),
        chest: source.ten_star(day, hidden.month.stem),
        belly: source.ten_star(day, pillars.month.stem()),
        left_hand: source.ten_star(day, hidden.year.stem),
        right_hand: source.ten_star(day, hidden.day.stem),
    }
}

/// Twelve-star chart for `pillars`.
pub fn twelve_star_chart(pillars: &FourPillars) -> TwelveStarChart {
    let day = pillars.day.stem();
    TwelveStarChart {
        left_shoulder: twelve_star(day, pillars.year.branch()),
        left_leg: twelve_star(day, pillars.month.branch()),
        right_leg: twelve_star(day, pillars.day.branch()),
    }
}

/// Hidden stems of the year, month and day branches.
pub fn hidden_stem_chart(
    pillars: &FourPillars,
    basis: HiddenStemBasis,
    elapsed: ElapsedDays,
) -> HiddenStems {
    HiddenStems {
        basis,
        year: resolve_hidden_stem_detail(pillars.year.branch(), elapsed.year),
        month: resolve_hidden_stem_detail(pillars.month.branch(), elapsed.month),
        day: resolve_hidden_stem_detail(pillars.day.branch(), elapsed.day),
    }
}

/// Assemble a chart from an already resolved birth.
pub fn build_chart(
    input: &BirthInput,
    birth: &BirthMoment,
    resolution: &PillarResolution,
    basis: HiddenStemBasis,
    elapsed: ElapsedDays,
    ten_stars: &dyn TenStarSource,
) -> FateChart {
    let pillars = resolution.pillars;
    let all_pillars: [Pillar; 4] = pillars.all();
    let hidden = hidden_stem_chart(&pillars, basis, elapsed);
    let twelve = twelve_star_chart(&pillars);
    let elements = five_elements(
        &all_pillars.map(Pillar::stem),
        &all_pillars.map(Pillar::branch),
    );

    FateChart {
        input: ChartInput {
            local: birth.local,
            zone: birth.zone,
            longitude_deg: birth.longitude_deg,
            gender: input.gender,
        },
        solar_term_mode: resolution.mode,
        sexagenary_year: resolution.sexagenary_year,
        month_term: resolution.month_term,
        next_term: resolution.next_term,
        true_solar_time: resolution.true_solar_time,
        solar_time_correction: resolution.solar_time_correction,
        four_pillars: pillars,
        hidden_stems: hidden,
        ten_stars: ten_star_chart(ten_stars, &pillars, &hidden),
        twelve_stars: twelve,
        five_elements: elements,
        total_energy: twelve.total_energy(),
        tenchusatsu: tenchusatsu(pillars.day),
        warnings: resolution
            .boundary
            .map(ChartWarning::BoundarySensitive)
            .into_iter()
            .collect(),
    }
}
