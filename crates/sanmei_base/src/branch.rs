//! The twelve earthly branches (十二支).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// One of the twelve earthly branches, ordered 子=0 .. 亥=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All twelve branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index`, wrapping modulo 12.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Seasonal element: 寅卯 wood, 巳午 fire, 申酉 metal, 亥子 water,
    /// and the four season-closing branches 辰未戌丑 earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Wei | Self::Xu | Self::Chou => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Even branches are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Branch `n` steps further along the cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// Position of the solar month this branch governs (寅=0 .. 丑=11).
    pub const fn month_ordinal(self) -> u8 {
        ((self.index() as i16 + 10) % 12) as u8
    }

    /// Branch governing the `ordinal`-th solar month after 立春.
    pub const fn from_month_ordinal(ordinal: u8) -> Self {
        Self::from_index(ordinal as i64 + 2)
    }

    /// Two-hour clock bucket: 子 covers 23:00-00:59, 丑 01:00-02:59, ...
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index(((hour as i64 + 1) / 2) % 12)
    }

    /// Look up by glyph ("子").
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        BRANCH_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Branch {
    type Err = String;

    /// Accepts the glyph or the pinyin name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_glyph(s)
            .or_else(|| {
                BRANCH_NAMES
                    .iter()
                    .position(|n| n.eq_ignore_ascii_case(s))
                    .map(|i| ALL_BRANCHES[i])
            })
            .ok_or_else(|| format!("unknown branch '{s}'"))
    }
}
