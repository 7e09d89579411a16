//! Sexagenary (60-term) cycle arithmetic and the pillar derivation rules.
//!
//! Day pillars advance by one every civil day with no gaps. The day epoch is
//! JDN 2 415 021 (1900-01-01) = 甲戌 (cycle index 10); [`validate_day_epoch`]
//! cross-checks it against independently known dates before any chart is
//! computed. Year pillars count from 1984 = 甲子.

use sanmei_time::julian_day_number;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Julian Day Number of the day epoch (1900-01-01).
pub const DAY_EPOCH_JDN: i64 = 2_415_021;

/// Cycle index of the day epoch (甲戌).
pub const DAY_EPOCH_INDEX: u8 = 10;

/// A sexagenary year whose pillar is 甲子.
pub const YEAR_EPOCH: i32 = 1984;

/// A stem/branch pair. Only the 60 pairs of equal parity exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch; `None` when their parities differ (e.g. 甲丑).
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at cycle position `index`, wrapping modulo 60 (0 = 甲子).
    pub const fn from_index(index: i64) -> Self {
        let i = index.rem_euclid(60);
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Cycle position 0..60, satisfying `index % 10 == stem` and `index % 12 == branch`.
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Display name, stem glyph followed by branch glyph ("甲子").
    pub fn name(self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Pillar `n` steps further along the cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// First cycle position of this pillar's decade (旬), i.e. its 甲 pillar.
    pub const fn decade_start(self) -> Self {
        self.offset(-(self.stem.index() as i64))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 4)?;
        s.serialize_field("stem", &self.stem)?;
        s.serialize_field("branch", &self.branch)?;
        s.serialize_field("name", &self.name())?;
        s.serialize_field("index", &self.index())?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

/// Day pillar of an absolute day count (Julian Day Number). Total over all integers.
pub const fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_index(jdn - DAY_EPOCH_JDN + DAY_EPOCH_INDEX as i64)
}

/// Smallest non-negative day count whose day pillar is `pillar`.
///
/// Every day count congruent to the result modulo 60 maps to `pillar`.
pub const fn pillar_to_day_count(pillar: Pillar) -> i64 {
    (pillar.index() as i64 + DAY_EPOCH_JDN - DAY_EPOCH_INDEX as i64).rem_euclid(60)
}

/// First day count at or after `jdn` whose day pillar is `pillar`.
pub const fn day_count_on_or_after(pillar: Pillar, jdn: i64) -> i64 {
    jdn + (pillar_to_day_count(pillar) - jdn).rem_euclid(60)
}

/// A date whose day pillar is known independently of the epoch constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochReference {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub stem: Stem,
    pub branch: Branch,
}

/// Almanac anchors for the day cycle.
pub const DAY_EPOCH_REFERENCES: [EpochReference; 3] = [
    EpochReference {
        year: 1900,
        month: 1,
        day: 1,
        stem: Stem::Jia,
        branch: Branch::Xu,
    },
    EpochReference {
        year: 1949,
        month: 10,
        day: 1,
        stem: Stem::Jia,
        branch: Branch::Zi,
    },
    EpochReference {
        year: 2000,
        month: 1,
        day: 1,
        stem: Stem::Wu,
        branch: Branch::Wu,
    },
];

/// Check the day epoch against [`DAY_EPOCH_REFERENCES`].
pub fn validate_day_epoch() -> Result<(), BaseError> {
    validate_day_epoch_against(&DAY_EPOCH_REFERENCES)
}

/// Check the day epoch against caller-supplied anchors.
pub fn validate_day_epoch_against(references: &[EpochReference]) -> Result<(), BaseError> {
    if references.len() < 2 {
        return Err(BaseError::integrity(
            "day epoch",
            "at least two reference dates are required",
        ));
    }
    for r in references {
        let got = day_pillar(julian_day_number(r.year, r.month, r.day));
        if got.stem() != r.stem || got.branch() != r.branch {
            return Err(BaseError::integrity(
                "day epoch",
                format!(
                    "{:04}-{:02}-{:02} resolves to {got}, expected {}{}",
                    r.year, r.month, r.day, r.stem, r.branch
                ),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Year, month and hour rules
// ---------------------------------------------------------------------------

/// Year pillar of a sexagenary year (already adjusted for 立春).
pub const fn year_pillar(sexagenary_year: i32) -> Pillar {
    Pillar::from_index(sexagenary_year as i64 - YEAR_EPOCH as i64)
}

/// Five tigers (五虎遁): stem of the 寅 month in a year with `year_stem`.
///
/// 甲己 -> 丙寅, 乙庚 -> 戊寅, 丙辛 -> 庚寅, 丁壬 -> 壬寅, 戊癸 -> 甲寅.
pub const fn five_tigers_start(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) as i64 * 2 + 2)
}

/// Month pillar of the `month_ordinal`-th solar month (寅=0 .. 丑=11).
pub const fn month_pillar(year_stem: Stem, month_ordinal: u8) -> Pillar {
    let ordinal = (month_ordinal % 12) as i64;
    Pillar {
        stem: five_tigers_start(year_stem).offset(ordinal),
        branch: Branch::from_index(ordinal + 2),
    }
}

/// Five rats (五鼠遁): stem of the 子 hour opening a day with `day_stem`.
///
/// 甲己 -> 甲子, 乙庚 -> 丙子, 丙辛 -> 戊子, 丁壬 -> 庚子, 戊癸 -> 壬子.
pub const fn five_rats_start(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) as i64 * 2)
}

/// Two-hour slot of a clock hour: 0 for 00:00-00:59, 1 for 01:00-02:59,
/// ..., 12 for 23:00-23:59 (the next day's 子 hour).
pub const fn hour_slot(hour: u32) -> u8 {
    ((hour % 24 + 1) / 2) as u8
}

/// Hour pillar for a clock hour on a day with `day_stem`.
///
/// The late 子 hour (23:00 onward) continues the sequence, so its stem is
/// the one the following day's five-rats start gives.
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let slot = hour_slot(hour) as i64;
    Pillar {
        stem: five_rats_start(day_stem).offset(slot),
        branch: Branch::from_index(slot),
    }
}
