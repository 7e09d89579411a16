//! The ten heavenly stems (十干).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// One of the ten heavenly stems, ordered 甲=0 .. 癸=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All ten stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index`, wrapping modulo 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        STEM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Two consecutive stems per element: 甲乙 wood, 丙丁 fire, ...
    pub const fn element(self) -> Element {
        Element::from_index((self.index() / 2) as i64)
    }

    /// Even stems are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Stem `n` steps further along the cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// Look up by glyph ("甲").
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        STEM_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_STEMS[i])
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Stem {
    type Err = String;

    /// Accepts the glyph or the pinyin name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_glyph(s)
            .or_else(|| {
                STEM_NAMES
                    .iter()
                    .position(|n| n.eq_ignore_ascii_case(s))
                    .map(|i| ALL_STEMS[i])
            })
            .ok_or_else(|| format!("unknown stem '{s}'"))
    }
}
