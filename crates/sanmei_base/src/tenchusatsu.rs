//! Tenchusatsu (天中殺): the two branches a day pillar's decade never reaches.
//!
//! Ten stems meet twelve branches, so each decade (旬) of the cycle leaves
//! two branches uncovered. 甲子..癸酉 misses 戌亥, 甲戌..癸未 misses 申酉, etc.

use serde::Serialize;

use crate::branch::Branch;
use crate::sexagenary::Pillar;

/// The six tenchusatsu groups, named by their void branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tenchusatsu {
    #[serde(rename = "戌亥")]
    XuHai,
    #[serde(rename = "子丑")]
    ZiChou,
    #[serde(rename = "寅卯")]
    YinMao,
    #[serde(rename = "辰巳")]
    ChenSi,
    #[serde(rename = "午未")]
    WuWei,
    #[serde(rename = "申酉")]
    ShenYou,
}

impl Tenchusatsu {
    /// The two void branches.
    pub const fn void_branches(self) -> [Branch; 2] {
        match self {
            Self::XuHai => [Branch::Xu, Branch::Hai],
            Self::ZiChou => [Branch::Zi, Branch::Chou],
            Self::YinMao => [Branch::Yin, Branch::Mao],
            Self::ChenSi => [Branch::Chen, Branch::Si],
            Self::WuWei => [Branch::Wu, Branch::Wei],
            Self::ShenYou => [Branch::Shen, Branch::You],
        }
    }

    /// Glyph name ("戌亥").
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::XuHai => "戌亥",
            Self::ZiChou => "子丑",
            Self::YinMao => "寅卯",
            Self::ChenSi => "辰巳",
            Self::WuWei => "午未",
            Self::ShenYou => "申酉",
        }
    }

    pub fn contains(self, branch: Branch) -> bool {
        self.void_branches().contains(&branch)
    }
}

impl std::fmt::Display for Tenchusatsu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}天中殺", self.glyph())
    }
}

/// Tenchusatsu group of a day pillar.
pub const fn tenchusatsu(day: Pillar) -> Tenchusatsu {
    let first_void = day.decade_start().branch().offset(10);
    match first_void {
        Branch::Xu => Tenchusatsu::XuHai,
        Branch::Shen => Tenchusatsu::ShenYou,
        Branch::Wu => Tenchusatsu::WuWei,
        Branch::Chen => Tenchusatsu::ChenSi,
        Branch::Yin => Tenchusatsu::YinMao,
        _ => Tenchusatsu::ZiChou,
    }
}
