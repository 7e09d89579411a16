//! Ten major stars (十大主星).
//!
//! A star names the relation of some stem to the day stem: the element
//! distance along the generating cycle (0 same, 1 output, 2 wealth,
//! 3 officer, 4 resource) and whether the two polarities match.
//!
//! Two interchangeable sources are provided behind [`TenStarSource`]:
//! [`RuleTenStars`] evaluates the rule and [`TableTenStars`] reads a literal
//! 10×10 table. One of them is chosen at configuration time.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::stem::{ALL_STEMS, Stem};

/// One of the ten major stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenStar {
    /// 貫索星: same element, same polarity.
    #[serde(rename = "貫索星")]
    Kansaku,
    /// 石門星: same element, other polarity.
    #[serde(rename = "石門星")]
    Sekimon,
    /// 鳳閣星: element the day stem generates, same polarity.
    #[serde(rename = "鳳閣星")]
    Hokaku,
    /// 調舒星: element the day stem generates, other polarity.
    #[serde(rename = "調舒星")]
    Chojo,
    /// 禄存星: element the day stem controls, same polarity.
    #[serde(rename = "禄存星")]
    Rokuzon,
    /// 司禄星: element the day stem controls, other polarity.
    #[serde(rename = "司禄星")]
    Shiroku,
    /// 車騎星: element controlling the day stem, same polarity.
    #[serde(rename = "車騎星")]
    Shaki,
    /// 牽牛星: element controlling the day stem, other polarity.
    #[serde(rename = "牽牛星")]
    Kengyu,
    /// 龍高星: element generating the day stem, same polarity.
    #[serde(rename = "龍高星")]
    Ryuko,
    /// 玉堂星: element generating the day stem, other polarity.
    #[serde(rename = "玉堂星")]
    Gyokudo,
}

/// All ten stars, ordered by `distance * 2 + (same polarity ? 0 : 1)`.
pub const ALL_TEN_STARS: [TenStar; 10] = [
    TenStar::Kansaku,
    TenStar::Sekimon,
    TenStar::Hokaku,
    TenStar::Chojo,
    TenStar::Rokuzon,
    TenStar::Shiroku,
    TenStar::Shaki,
    TenStar::Kengyu,
    TenStar::Ryuko,
    TenStar::Gyokudo,
];

const TEN_STAR_GLYPHS: [&str; 10] = [
    "貫索星", "石門星", "鳳閣星", "調舒星", "禄存星", "司禄星", "車騎星", "牽牛星", "龍高星",
    "玉堂星",
];

impl TenStar {
    pub const fn index(self) -> u8 {
        match self {
            Self::Kansaku => 0,
            Self::Sekimon => 1,
            Self::Hokaku => 2,
            Self::Chojo => 3,
            Self::Rokuzon => 4,
            Self::Shiroku => 5,
            Self::Shaki => 6,
            Self::Kengyu => 7,
            Self::Ryuko => 8,
            Self::Gyokudo => 9,
        }
    }

    pub const fn glyph(self) -> &'static str {
        TEN_STAR_GLYPHS[self.index() as usize]
    }

    /// Element distance from the day stem (0..5).
    pub const fn element_distance(self) -> u8 {
        self.index() / 2
    }

    pub const fn same_polarity(self) -> bool {
        self.index() % 2 == 0
    }
}

impl std::fmt::Display for TenStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Ten star of `other` seen from `day`, by the element/polarity rule.
pub const fn ten_star(day: Stem, other: Stem) -> TenStar {
    let distance = day.element().distance_to(other.element());
    let same = day.index() % 2 == other.index() % 2;
    ALL_TEN_STARS[(distance * 2 + if same { 0 } else { 1 }) as usize]
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Which ten-star source is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenStarMethod {
    /// Element-distance and polarity rule.
    #[default]
    Rule,
    /// Literal 10×10 lookup table.
    Table,
}

/// A strategy mapping (day stem, other stem) to a ten star.
pub trait TenStarSource: Send + Sync {
    fn method(&self) -> TenStarMethod;
    fn ten_star(&self, day: Stem, other: Stem) -> TenStar;
}

/// Rule-based source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTenStars;

impl TenStarSource for RuleTenStars {
    fn method(&self) -> TenStarMethod {
        TenStarMethod::Rule
    }

    fn ten_star(&self, day: Stem, other: Stem) -> TenStar {
        ten_star(day, other)
    }
}

use TenStar::{
    Chojo as CJ, Gyokudo as GY, Hokaku as HK, Kansaku as KS, Kengyu as KG, Rokuzon as RZ,
    Ryuko as RY, Sekimon as SM, Shaki as SK, Shiroku as SR,
};

/// Reference table: rows are day stems 甲..癸, columns the other stem 甲..癸.
pub const TEN_STAR_TABLE: [[TenStar; 10]; 10] = [
    [KS, SM, HK, CJ, RZ, SR, SK, KG, RY, GY],
    [SM, KS, CJ, HK, SR, RZ, KG, SK, GY, RY],
    [RY, GY, KS, SM, HK, CJ, RZ, SR, SK, KG],
    [GY, RY, SM, KS, CJ, HK, SR, RZ, KG, SK],
    [SK, KG, RY, GY, KS, SM, HK, CJ, RZ, SR],
    [KG, SK, GY, RY, SM, KS, CJ, HK, SR, RZ],
    [RZ, SR, SK, KG, RY, GY, KS, SM, HK, CJ],
    [SR, RZ, KG, SK, GY, RY, SM, KS, CJ, HK],
    [HK, CJ, RZ, SR, SK, KG, RY, GY, KS, SM],
    [CJ, HK, SR, RZ, KG, SK, GY, RY, SM, KS],
];

/// Table-based source over a 10×10 table.
#[derive(Debug, Clone, Copy)]
pub struct TableTenStars {
    table: &'static [[TenStar; 10]; 10],
}

impl TableTenStars {
    pub const fn new(table: &'static [[TenStar; 10]; 10]) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &'static [[TenStar; 10]; 10] {
        self.table
    }
}

impl Default for TableTenStars {
    fn default() -> Self {
        Self::new(&TEN_STAR_TABLE)
    }
}

impl TenStarSource for TableTenStars {
    fn method(&self) -> TenStarMethod {
        TenStarMethod::Table
    }

    fn ten_star(&self, day: Stem, other: Stem) -> TenStar {
        self.table[day.index() as usize][other.index() as usize]
    }
}

/// Reference (day, other, star) pairs from a worked chart (1984-12-02, day 庚)
/// plus one pair per distance class.
pub const TEN_STAR_REFERENCES: [(Stem, Stem, TenStar); 8] = [
    (Stem::Geng, Stem::Jia, TenStar::Rokuzon),
    (Stem::Geng, Stem::Ren, TenStar::Hokaku),
    (Stem::Geng, Stem::Yi, TenStar::Shiroku),
    (Stem::Geng, Stem::Gui, TenStar::Chojo),
    (Stem::Ren, Stem::Wu, TenStar::Shaki),
    (Stem::Ren, Stem::Yi, TenStar::Chojo),
    (Stem::Xin, Stem::Wu, TenStar::Gyokudo),
    (Stem::Jia, Stem::Yi, TenStar::Sekimon),
];

/// Self-check of a ten-star source: diagonal is 貫索星, every row holds each
/// star once, and the reference pairs match.
pub fn validate_ten_star_source(source: &dyn TenStarSource) -> Result<(), BaseError> {
    let table_name = match source.method() {
        TenStarMethod::Rule => "ten star (rule)",
        TenStarMethod::Table => "ten star (table)",
    };
    for day in ALL_STEMS {
        if source.ten_star(day, day) != TenStar::Kansaku {
            return Err(BaseError::integrity(
                table_name,
                format!("{day} against itself is {}", source.ten_star(day, day)),
            ));
        }
        let mut seen = [false; 10];
        for other in ALL_STEMS {
            seen[source.ten_star(day, other).index() as usize] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(BaseError::integrity(
                table_name,
                format!("row {day} never yields {}", ALL_TEN_STARS[missing]),
            ));
        }
    }
    for (day, other, expected) in TEN_STAR_REFERENCES {
        let got = source.ten_star(day, other);
        if got != expected {
            return Err(BaseError::integrity(
                table_name,
                format!("{day}×{other} is {got}, expected {expected}"),
            ));
        }
    }
    Ok(())
}
