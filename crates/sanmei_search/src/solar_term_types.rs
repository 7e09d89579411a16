//! Types for month-opening solar terms (節).

use sanmei_base::Branch;
use sanmei_time::{CivilTime, ZoneOffset};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// The twelve solar terms that open a sexagenary month, in Gregorian order.
///
/// The twelve mid-month terms (中氣) play no part in pillar transitions and
/// are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MonthTerm {
    /// 小寒, opens the 丑 month (January).
    #[serde(rename = "小寒")]
    Xiaohan,
    /// 立春, opens the 寅 month and the sexagenary year (February).
    #[serde(rename = "立春")]
    Lichun,
    /// 啓蟄, opens the 卯 month (March).
    #[serde(rename = "啓蟄")]
    Jingzhe,
    /// 清明, opens the 辰 month (April).
    #[serde(rename = "清明")]
    Qingming,
    /// 立夏, opens the 巳 month (May).
    #[serde(rename = "立夏")]
    Lixia,
    /// 芒種, opens the 午 month (June).
    #[serde(rename = "芒種")]
    Mangzhong,
    /// 小暑, opens the 未 month (July).
    #[serde(rename = "小暑")]
    Xiaoshu,
    /// 立秋, opens the 申 month (August).
    #[serde(rename = "立秋")]
    Liqiu,
    /// 白露, opens the 酉 month (September).
    #[serde(rename = "白露")]
    Bailu,
    /// 寒露, opens the 戌 month (October).
    #[serde(rename = "寒露")]
    Hanlu,
    /// 立冬, opens the 亥 month (November).
    #[serde(rename = "立冬")]
    Lidong,
    /// 大雪, opens the 子 month (December).
    #[serde(rename = "大雪")]
    Daxue,
}

/// All twelve month terms in Gregorian order (小寒 first).
pub const ALL_MONTH_TERMS: [MonthTerm; 12] = [
    MonthTerm::Xiaohan,
    MonthTerm::Lichun,
    MonthTerm::Jingzhe,
    MonthTerm::Qingming,
    MonthTerm::Lixia,
    MonthTerm::Mangzhong,
    MonthTerm::Xiaoshu,
    MonthTerm::Liqiu,
    MonthTerm::Bailu,
    MonthTerm::Hanlu,
    MonthTerm::Lidong,
    MonthTerm::Daxue,
];

const MONTH_TERM_GLYPHS: [&str; 12] = [
    "小寒", "立春", "啓蟄", "清明", "立夏", "芒種", "小暑", "立秋", "白露", "寒露", "立冬", "大雪",
];

/// Nominal entry day of each term, by Gregorian month.
pub const NOMINAL_ENTRY_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 9, 8, 7];

impl MonthTerm {
    /// 0-based Gregorian index (小寒=0 .. 大雪=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Xiaohan => 0,
            Self::Lichun => 1,
            Self::Jingzhe => 2,
            Self::Qingming => 3,
            Self::Lixia => 4,
            Self::Mangzhong => 5,
            Self::Xiaoshu => 6,
            Self::Liqiu => 7,
            Self::Bailu => 8,
            Self::Hanlu => 9,
            Self::Lidong => 10,
            Self::Daxue => 11,
        }
    }

    pub const fn glyph(self) -> &'static str {
        MONTH_TERM_GLYPHS[self.index() as usize]
    }

    /// Gregorian month (1..=12) in which the term falls.
    pub const fn gregorian_month(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Nominal day of month the term begins.
    pub const fn nominal_day(self) -> u32 {
        NOMINAL_ENTRY_DAYS[self.index() as usize]
    }

    /// Apparent solar longitude at entry: 立春 315°, then +30° per term.
    pub const fn solar_longitude_deg(self) -> f64 {
        ((285 + 30 * self.index() as u32) % 360) as f64
    }

    /// Branch of the month this term opens.
    pub const fn month_branch(self) -> Branch {
        Branch::from_index(self.index() as i64 + 1)
    }

    /// Position of the opened month counted from 立春 (寅=0 .. 丑=11).
    pub const fn month_ordinal(self) -> u8 {
        self.month_branch().month_ordinal()
    }

    /// Term opening the month governed by `branch`.
    pub const fn for_month_branch(branch: Branch) -> Self {
        ALL_MONTH_TERMS[((branch.index() + 11) % 12) as usize]
    }

    /// Term falling in Gregorian `month` (1..=12).
    pub fn for_gregorian_month(month: u32) -> Option<Self> {
        (1..=12)
            .contains(&month)
            .then(|| ALL_MONTH_TERMS[(month - 1) as usize])
    }
}

impl std::fmt::Display for MonthTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// How term boundaries are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolarTermMode {
    /// Fixed nominal day per month, starting at local midnight.
    Nominal,
    /// Instant the apparent solar longitude reaches the term longitude.
    #[default]
    Astronomical,
}

impl SolarTermMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Astronomical => "astronomical",
        }
    }
}

/// One term entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEntry {
    pub term: MonthTerm,
    /// Gregorian year the entry falls in.
    pub year: i32,
    /// Entry instant as Julian Date (UT).
    pub jd_ut: f64,
    /// Source that produced this entry.
    pub mode: SolarTermMode,
}

impl SolarTermEntry {
    /// Entry instant as wall-clock time in `zone`.
    pub fn civil(&self, zone: ZoneOffset) -> CivilTime {
        CivilTime::from_jd_ut(self.jd_ut, zone)
    }
}

impl Serialize for SolarTermEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SolarTermEntry", 5)?;
        s.serialize_field("term", &self.term)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("jdUt", &self.jd_ut)?;
        s.serialize_field("utc", &self.civil(ZoneOffset::UTC))?;
        s.serialize_field("mode", &self.mode)?;
        s.end()
    }
}

/// Configuration for the astronomical term search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarTermConfig {
    /// Maximum bisection iterations (default 60).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
    /// Half-width of the search bracket around the nominal date (default 6 days).
    pub bracket_days: f64,
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            max_iterations: 60,
            convergence_days: 1e-6,
            bracket_days: 6.0,
        }
    }
}

impl SolarTermConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if !self.bracket_days.is_finite() || self.bracket_days <= 0.0 {
            return Err("bracket_days must be positive");
        }
        if self.bracket_days > 14.0 {
            return Err("bracket_days must not exceed 14");
        }
        Ok(())
    }
}
