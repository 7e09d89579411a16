//! Twelve minor stars (十二大従星) and their energy scores.
//!
//! Each star is one of the twelve life stages a day stem passes through
//! across the branches. The stem × branch grid is kept as literal reference
//! data and checked by [`validate_twelve_star_table`] before use.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaseError;
use crate::stem::{ALL_STEMS, Stem};

/// One of the twelve minor stars, named by its life stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TwelveStar {
    /// 天報星 (胎)
    Conception,
    /// 天印星 (養)
    Nurture,
    /// 天貴星 (長生)
    Birth,
    /// 天恍星 (沐浴)
    Bathing,
    /// 天南星 (冠帯)
    Crowning,
    /// 天禄星 (建禄)
    Officer,
    /// 天将星 (帝旺)
    Emperor,
    /// 天堂星 (衰)
    Decline,
    /// 天胡星 (病)
    Sickness,
    /// 天極星 (死)
    Death,
    /// 天庫星 (墓)
    Tomb,
    /// 天馳星 (絶)
    Severance,
}

/// All twelve stars in life-stage order (胎 first).
pub const ALL_TWELVE_STARS: [TwelveStar; 12] = [
    TwelveStar::Conception,
    TwelveStar::Nurture,
    TwelveStar::Birth,
    TwelveStar::Bathing,
    TwelveStar::Crowning,
    TwelveStar::Officer,
    TwelveStar::Emperor,
    TwelveStar::Decline,
    TwelveStar::Sickness,
    TwelveStar::Death,
    TwelveStar::Tomb,
    TwelveStar::Severance,
];

const TWELVE_STAR_GLYPHS: [&str; 12] = [
    "天報星", "天印星", "天貴星", "天恍星", "天南星", "天禄星", "天将星", "天堂星", "天胡星",
    "天極星", "天庫星", "天馳星",
];

const LIFE_STAGE_GLYPHS: [&str; 12] = [
    "胎", "養", "長生", "沐浴", "冠帯", "建禄", "帝旺", "衰", "病", "死", "墓", "絶",
];

const TWELVE_STAR_SCORES: [u8; 12] = [3, 6, 9, 7, 10, 11, 12, 8, 4, 2, 5, 1];

impl TwelveStar {
    /// 0-based life-stage index (胎=0 .. 絶=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Conception => 0,
            Self::Nurture => 1,
            Self::Birth => 2,
            Self::Bathing => 3,
            Self::Crowning => 4,
            Self::Officer => 5,
            Self::Emperor => 6,
            Self::Decline => 7,
            Self::Sickness => 8,
            Self::Death => 9,
            Self::Tomb => 10,
            Self::Severance => 11,
        }
    }

    pub const fn glyph(self) -> &'static str {
        TWELVE_STAR_GLYPHS[self.index() as usize]
    }

    /// Life-stage name (胎, 養, 長生, ...).
    pub const fn stage(self) -> &'static str {
        LIFE_STAGE_GLYPHS[self.index() as usize]
    }

    /// Energy score, 1 (天馳星) to 12 (天将星).
    pub const fn score(self) -> u8 {
        TWELVE_STAR_SCORES[self.index() as usize]
    }

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        TWELVE_STAR_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_TWELVE_STARS[i])
    }
}

impl std::fmt::Display for TwelveStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Serialize for TwelveStar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TwelveStar", 3)?;
        s.serialize_field("star", self.glyph())?;
        s.serialize_field("stage", self.stage())?;
        s.serialize_field("score", &self.score())?;
        s.end()
    }
}

use TwelveStar::{
    Bathing as BA, Birth as BI, Conception as CN, Crowning as CR, Death as DT, Decline as DE,
    Emperor as EM, Nurture as NU, Officer as OF, Severance as SE, Sickness as SI, Tomb as TO,
};

/// Rows are day stems 甲..癸, columns branches 子..亥.
pub const TWELVE_STAR_TABLE: [[TwelveStar; 12]; 10] = [
    [BA, CR, OF, EM, DE, SI, DT, TO, SE, CN, NU, BI],
    [SI, DE, EM, OF, CR, BA, BI, NU, CN, SE, TO, DT],
    [CN, NU, BI, BA, CR, OF, EM, DE, SI, DT, TO, SE],
    [SE, TO, DT, SI, DE, EM, OF, CR, BA, BI, NU, CN],
    [CN, NU, BI, BA, CR, OF, EM, DE, SI, DT, TO, SE],
    [SE, TO, DT, SI, DE, EM, OF, CR, BA, BI, NU, CN],
    [DT, TO, SE, CN, NU, BI, BA, CR, OF, EM, DE, SI],
    [BI, NU, CN, SE, TO, DT, SI, DE, EM, OF, CR, BA],
    [EM, DE, SI, DT, TO, SE, CN, NU, BI, BA, CR, OF],
    [OF, CR, BA, BI, NU, CN, SE, TO, DT, SI, DE, EM],
];

/// Twelve star of `branch` seen from `day`.
pub const fn twelve_star(day: Stem, branch: Branch) -> TwelveStar {
    TWELVE_STAR_TABLE[day.index() as usize][branch.index() as usize]
}

/// Independently documented (day stem, branch, star) pairs, drawn from
/// worked charts (1983-08-11, 1984-12-02, 2018-03-21) and almanac tables.
pub const TWELVE_STAR_REFERENCES: [(Stem, Branch, TwelveStar); 12] = [
    (Stem::Geng, Branch::Zi, TwelveStar::Death),
    (Stem::Geng, Branch::Wu, TwelveStar::Bathing),
    (Stem::Geng, Branch::Hai, TwelveStar::Sickness),
    (Stem::Xin, Branch::Hai, TwelveStar::Bathing),
    (Stem::Xin, Branch::Wei, TwelveStar::Decline),
    (Stem::Xin, Branch::Shen, TwelveStar::Emperor),
    (Stem::Ren, Branch::Xu, TwelveStar::Crowning),
    (Stem::Ren, Branch::Mao, TwelveStar::Death),
    (Stem::Jia, Branch::Mao, TwelveStar::Emperor),
    (Stem::Jia, Branch::Hai, TwelveStar::Birth),
    (Stem::Bing, Branch::Wu, TwelveStar::Emperor),
    (Stem::Gui, Branch::Si, TwelveStar::Conception),
];

/// Self-check of a twelve-star table.
///
/// Every row must visit all twelve stages exactly once in cycle order
/// (forward for yang stems, backward for yin stems) and agree with
/// [`TWELVE_STAR_REFERENCES`].
pub fn validate_twelve_star_table(table: &[[TwelveStar; 12]; 10]) -> Result<(), BaseError> {
    for day in ALL_STEMS {
        let row = &table[day.index() as usize];
        let mut seen = [false; 12];
        for star in row {
            seen[star.index() as usize] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(BaseError::integrity(
                "twelve star",
                format!("row {day} never yields {}", ALL_TWELVE_STARS[missing]),
            ));
        }
        let step: i16 = if day.index() % 2 == 0 { 1 } else { -1 };
        for branch in ALL_BRANCHES {
            let here = row[branch.index() as usize].index() as i16;
            let next = row[branch.offset(1).index() as usize].index() as i16;
            if (next - here - step).rem_euclid(12) != 0 {
                return Err(BaseError::integrity(
                    "twelve star",
                    format!("row {day} breaks the stage order at {branch}"),
                ));
            }
        }
    }
    for (day, branch, expected) in TWELVE_STAR_REFERENCES {
        let got = table[day.index() as usize][branch.index() as usize];
        if got != expected {
            return Err(BaseError::integrity(
                "twelve star",
                format!("{day}×{branch} is {got}, expected {expected}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_validates() {
        assert!(validate_twelve_star_table(&TWELVE_STAR_TABLE).is_ok());
    }

    #[test]
    fn scores_are_a_permutation_of_one_to_twelve() {
        let mut scores: Vec<u8> = ALL_TWELVE_STARS.iter().map(|s| s.score()).collect();
        scores.sort_unstable();
        assert_eq!(scores, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn worked_chart_pairs() {
        assert_eq!(twelve_star(Stem::Geng, Branch::Zi).score(), 2);
        assert_eq!(twelve_star(Stem::Geng, Branch::Wu).score(), 7);
        assert_eq!(twelve_star(Stem::Geng, Branch::Hai).score(), 4);
    }

    #[test]
    fn swapped_cells_are_caught() {
        let mut t = TWELVE_STAR_TABLE;
        t[0].swap(6, 8);
        assert!(validate_twelve_star_table(&t).is_err());
    }

    #[test]
    fn shifted_row_is_caught_by_references() {
        let mut t = TWELVE_STAR_TABLE;
        t[6].rotate_left(1);
        let err = validate_twelve_star_table(&t).unwrap_err();
        assert!(err.to_string().contains("庚"), "{err}");
    }

    #[test]
    fn glyph_lookup() {
        assert_eq!(TwelveStar::from_glyph("天将星"), Some(TwelveStar::Emperor));
        assert_eq!(TwelveStar::Emperor.stage(), "帝旺");
        assert_eq!(TwelveStar::from_glyph("x"), None);
    }
}
