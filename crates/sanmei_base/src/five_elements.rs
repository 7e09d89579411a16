//! Five-element balance of a chart.
//!
//! Two measures are reported side by side:
//! - a plain count of every stem present (pillar stems plus the hidden
//!   stems each branch hosts);
//! - a weighted energy (数理法): each distinct stem scores the sum of its
//!   twelve-star scores against the chart's branches, multiplied by how often
//!   it occurs, and the scores are summed per element.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{ALL_ELEMENTS, Element};
use crate::hidden_stem::hidden_stems;
use crate::stem::{ALL_STEMS, Stem};
use crate::twelve_star::twelve_star;

/// Per-element amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementTally {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementTally {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element, amount: u32) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += amount;
    }

    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|e| self.get(*e)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Largest element; ties go to the earlier element in generating order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.get(e) > self.get(best) {
                best = e;
            }
        }
        best
    }

    /// Smallest element; ties go to the earlier element in generating order.
    pub fn weakest(&self) -> Element {
        let mut worst = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.get(e) < self.get(worst) {
                worst = e;
            }
        }
        worst
    }

    /// Share of each element in percent (all zero for an empty tally).
    pub fn shares(&self) -> ElementShares {
        let total = f64::from(self.total());
        let pct = |e: Element| {
            if total > 0.0 {
                f64::from(self.get(e)) * 100.0 / total
            } else {
                0.0
            }
        };
        ElementShares {
            wood: pct(Element::Wood),
            fire: pct(Element::Fire),
            earth: pct(Element::Earth),
            metal: pct(Element::Metal),
            water: pct(Element::Water),
        }
    }

    /// 100 for a perfectly even spread, falling by 2 per point of standard
    /// deviation of the percentage shares, floored at 0.
    pub fn balance_score(&self) -> f64 {
        let shares = self.shares();
        let values = [
            shares.wood,
            shares.fire,
            shares.earth,
            shares.metal,
            shares.water,
        ];
        let mean = values.iter().sum::<f64>() / 5.0;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 5.0;
        (100.0 - variance.sqrt() * 2.0).max(0.0)
    }
}

/// Per-element percentage shares.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElementShares {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

/// Summary attached to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveElements {
    /// Occurrences of each element among all stems present.
    pub counts: ElementTally,
    /// Weighted energy per element.
    pub energy: ElementTally,
    /// Percentage shares of `counts`.
    pub shares: ElementShares,
    pub dominant: Element,
    pub weakest: Element,
    /// Evenness of `counts`, 0..=100.
    pub balance_score: f64,
}

/// Pillar stems followed by the hidden stems of every branch.
pub fn chart_stems(pillar_stems: &[Stem], branches: &[Branch]) -> Vec<Stem> {
    let mut stems = pillar_stems.to_vec();
    for branch in branches {
        stems.extend(hidden_stems(*branch));
    }
    stems
}

/// Count elements over `stems`.
pub fn count_elements(stems: &[Stem]) -> ElementTally {
    let mut tally = ElementTally::default();
    for stem in stems {
        tally.add(stem.element(), 1);
    }
    tally
}

/// Weighted element energy of `stems` against `branches`.
pub fn element_energy(stems: &[Stem], branches: &[Branch]) -> ElementTally {
    let mut tally = ElementTally::default();
    for stem in ALL_STEMS {
        let occurrences = stems.iter().filter(|s| **s == stem).count() as u32;
        if occurrences == 0 {
            continue;
        }
        let base: u32 = branches
            .iter()
            .map(|b| u32::from(twelve_star(stem, *b).score()))
            .sum();
        tally.add(stem.element(), base * occurrences);
    }
    tally
}

/// Five-element summary of a chart given its pillar stems and branches.
pub fn five_elements(pillar_stems: &[Stem], branches: &[Branch]) -> FiveElements {
    let stems = chart_stems(pillar_stems, branches);
    let counts = count_elements(&stems);
    FiveElements {
        counts,
        energy: element_energy(&stems, branches),
        shares: counts.shares(),
        dominant: counts.dominant(),
        weakest: counts.weakest(),
        balance_score: counts.balance_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1984-12-02: 甲子 / 乙亥 / 庚午 / 壬午
    fn sample() -> FiveElements {
        five_elements(
            &[Stem::Jia, Stem::Yi, Stem::Geng, Stem::Ren],
            &[Branch::Zi, Branch::Hai, Branch::Wu, Branch::Wu],
        )
    }

    #[test]
    fn counts_include_hidden_stems() {
        let fe = sample();
        assert_eq!(fe.counts.wood, 3);
        assert_eq!(fe.counts.fire, 4);
        assert_eq!(fe.counts.earth, 2);
        assert_eq!(fe.counts.metal, 1);
        assert_eq!(fe.counts.water, 4);
        assert_eq!(fe.counts.total(), 14);
    }

    #[test]
    fn repeated_branch_counted_per_pillar() {
        let three = five_elements(
            &[Stem::Jia, Stem::Yi, Stem::Geng],
            &[Branch::Zi, Branch::Hai, Branch::Wu],
        );
        let four = sample();
        assert_eq!(four.counts.total() - three.counts.total(), 4);
        assert_eq!(four.counts.fire - three.counts.fire, 2);
    }

    #[test]
    fn weighted_energy() {
        let fe = sample();
        assert_eq!(fe.energy.wood, 64);
        assert_eq!(fe.energy.fire, 108);
        assert_eq!(fe.energy.earth, 52);
        assert_eq!(fe.energy.metal, 20);
        assert_eq!(fe.energy.water, 112);
        assert_eq!(fe.energy.total(), 356);
    }

    #[test]
    fn dominant_and_weakest_break_ties_in_cycle_order() {
        let fe = sample();
        // fire and water both 4
        assert_eq!(fe.dominant, Element::Fire);
        assert_eq!(fe.weakest, Element::Metal);
    }

    #[test]
    fn shares_sum_to_hundred() {
        let s = sample().shares;
        let sum = s.wood + s.fire + s.earth + s.metal + s.water;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((s.fire - 400.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn balance_score_extremes() {
        let mut even = ElementTally::default();
        for e in ALL_ELEMENTS {
            even.add(e, 2);
        }
        assert!((even.balance_score() - 100.0).abs() < 1e-9);

        let mut lopsided = ElementTally::default();
        lopsided.add(Element::Fire, 9);
        assert!((lopsided.balance_score() - 20.0).abs() < 1e-9);

        assert!(ElementTally::default().shares().wood.abs() < 1e-12);
    }
}
