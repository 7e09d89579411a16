//! Hidden stems (蔵干) and the twenty-eight-yuan (二十八元) schedule.
//!
//! Each branch hosts one to three stems in turn after its governing solar
//! term begins. The schedule lists them as (stem, days) periods; the last
//! period holds the principal stem (本元). Every branch spans 31 days.

use serde::Serialize;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaseError;
use crate::stem::Stem;

/// One period of a branch's hidden-stem schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HiddenStemPeriod {
    pub stem: Stem,
    /// Length of the period in days.
    pub days: u8,
}

const fn p(stem: Stem, days: u8) -> HiddenStemPeriod {
    HiddenStemPeriod { stem, days }
}

/// Twenty-eight-yuan schedule, indexed by branch (子=0 .. 亥=11).
pub const HIDDEN_STEM_SCHEDULE: [&[HiddenStemPeriod]; 12] = [
    &[p(Stem::Ren, 10), p(Stem::Gui, 21)],
    &[p(Stem::Gui, 9), p(Stem::Xin, 3), p(Stem::Ji, 19)],
    &[p(Stem::Wu, 7), p(Stem::Bing, 7), p(Stem::Jia, 17)],
    &[p(Stem::Jia, 10), p(Stem::Yi, 21)],
    &[p(Stem::Yi, 9), p(Stem::Gui, 3), p(Stem::Wu, 19)],
    &[p(Stem::Wu, 5), p(Stem::Geng, 9), p(Stem::Bing, 17)],
    &[p(Stem::Bing, 10), p(Stem::Ji, 9), p(Stem::Ding, 12)],
    &[p(Stem::Ding, 9), p(Stem::Yi, 3), p(Stem::Ji, 19)],
    &[p(Stem::Wu, 7), p(Stem::Ren, 7), p(Stem::Geng, 17)],
    &[p(Stem::Geng, 10), p(Stem::Xin, 21)],
    &[p(Stem::Xin, 9), p(Stem::Ding, 3), p(Stem::Wu, 19)],
    &[p(Stem::Jia, 7), p(Stem::Ren, 24)],
];

/// Schedule of `branch`.
pub fn hidden_stem_periods(branch: Branch) -> &'static [HiddenStemPeriod] {
    HIDDEN_STEM_SCHEDULE[branch.index() as usize]
}

/// Total days covered by the schedule of `branch`.
pub fn schedule_span(branch: Branch) -> u32 {
    hidden_stem_periods(branch)
        .iter()
        .map(|p| u32::from(p.days))
        .sum()
}

/// Principal stem (本元): the last period of the schedule.
pub fn principal_hidden_stem(branch: Branch) -> Stem {
    match hidden_stem_periods(branch).last() {
        Some(period) => period.stem,
        // unreachable once validate_schedule has passed at engine start
        None => Stem::Jia,
    }
}

/// Distinct stems hosted by `branch`, in schedule order.
pub fn hidden_stems(branch: Branch) -> Vec<Stem> {
    let mut stems: Vec<Stem> = Vec::with_capacity(3);
    for period in hidden_stem_periods(branch) {
        if !stems.contains(&period.stem) {
            stems.push(period.stem);
        }
    }
    stems
}

/// Where an elapsed-day count lands in a branch's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStemInfo {
    pub branch: Branch,
    /// Active stem.
    pub stem: Stem,
    /// 0-based period within the schedule.
    pub period_index: u8,
    /// Elapsed days as given by the caller.
    pub elapsed_days: i64,
    /// Elapsed days folded into the branch span.
    pub day_in_span: u32,
}

/// Active hidden stem of `branch` after `elapsed_days` since the governing
/// term entry. Counts past the span wrap around it.
pub fn resolve_hidden_stem(branch: Branch, elapsed_days: i64) -> Stem {
    resolve_hidden_stem_detail(branch, elapsed_days).stem
}

/// Like [`resolve_hidden_stem`] with the period position.
///
/// A count equal to a period's cumulative end already belongs to the next
/// period: with 子 = 壬10 癸21, day 9 is 壬 and day 10 is 癸.
pub fn resolve_hidden_stem_detail(branch: Branch, elapsed_days: i64) -> HiddenStemInfo {
    let periods = hidden_stem_periods(branch);
    let span = i64::from(schedule_span(branch).max(1));
    let day_in_span = elapsed_days.rem_euclid(span) as u32;

    let mut cumulative = 0u32;
    let mut chosen = periods.len().saturating_sub(1);
    for (i, period) in periods.iter().enumerate() {
        cumulative += u32::from(period.days);
        if day_in_span < cumulative {
            chosen = i;
            break;
        }
    }

    HiddenStemInfo {
        branch,
        // empty schedules are rejected by validate_schedule at engine start
        stem: periods.get(chosen).map_or(Stem::Jia, |p| p.stem),
        period_index: chosen as u8,
        elapsed_days,
        day_in_span,
    }
}

/// Self-check of [`HIDDEN_STEM_SCHEDULE`].
pub fn validate_schedule() -> Result<(), BaseError> {
    validate_schedule_table(&HIDDEN_STEM_SCHEDULE)
}

/// Check a hidden-stem schedule indexed by branch.
///
/// Every branch must have 1..=3 periods of positive length summing to 31
/// days, and the principal (last) stem must share the branch's element,
/// with no exceptions: 午 ends in 丁 (fire) and the four earth branches
/// end in 戊 or 己.
pub fn validate_schedule_table(schedule: &[&[HiddenStemPeriod]; 12]) -> Result<(), BaseError> {
    for branch in ALL_BRANCHES {
        let periods = schedule[branch.index() as usize];
        if periods.is_empty() || periods.len() > 3 {
            return Err(BaseError::integrity(
                "hidden stem",
                format!("{branch} has {} periods", periods.len()),
            ));
        }
        if let Some(zero) = periods.iter().find(|p| p.days == 0) {
            return Err(BaseError::integrity(
                "hidden stem",
                format!("{branch} has an empty {} period", zero.stem),
            ));
        }
        let span: u32 = periods.iter().map(|p| u32::from(p.days)).sum();
        if span != 31 {
            return Err(BaseError::integrity(
                "hidden stem",
                format!("{branch} spans {span} days"),
            ));
        }
        let Some(principal) = periods.last().map(|p| p.stem) else {
            continue;
        };
        if principal.element() != branch.element() {
            return Err(BaseError::integrity(
                "hidden stem",
                format!("{branch} principal stem {principal} is not {}", branch.element()),
            ));
        }
    }
    Ok(())
}
