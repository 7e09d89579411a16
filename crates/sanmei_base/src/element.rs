//! The five elements and yin/yang polarity.
//!
//! Elements are ordered along the generating cycle
//! wood -> fire -> earth -> metal -> water -> wood, so the distance
//! `(to - from) mod 5` classifies any pair: 0 same, 1 generated by `from`,
//! 2 controlled by `from`, 3 controls `from`, 4 generates `from`.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

/// All five elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at `index`, wrapping modulo 5.
    pub const fn from_index(index: i64) -> Self {
        ALL_ELEMENTS[index.rem_euclid(5) as usize]
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Element this one generates (wood feeds fire).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }

    /// Element this one controls (wood parts earth).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() as i64 + 2)
    }

    /// Generating-cycle distance from `self` to `other`, in 0..5.
    pub const fn distance_to(self, other: Self) -> u8 {
        ((other.index() as i16 - self.index() as i16 + 5) % 5) as u8
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "陽")]
    Yang,
    #[serde(rename = "陰")]
    Yin,
}

impl Polarity {
    /// Polarity of the `index`-th member of an alternating cycle (even = yang).
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as i64), *e);
        }
        assert_eq!(Element::from_index(-1), Element::Water);
    }

    #[test]
    fn generating_and_controlling_cycles() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn distance_classifies_relations() {
        assert_eq!(Element::Metal.distance_to(Element::Metal), 0);
        assert_eq!(Element::Metal.distance_to(Element::Water), 1);
        assert_eq!(Element::Metal.distance_to(Element::Wood), 2);
        assert_eq!(Element::Metal.distance_to(Element::Fire), 3);
        assert_eq!(Element::Metal.distance_to(Element::Earth), 4);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Polarity::of_index(0), Polarity::Yang);
        assert_eq!(Polarity::of_index(7), Polarity::Yin);
    }
}
