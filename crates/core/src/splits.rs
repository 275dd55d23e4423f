//! Split detection.
//!
//! A split is what is left after the first ball of a rack when the head pin is
//! down and the standing pins are not all touching one another. Detection is
//! purely geometric (a fixed adjacency table); naming comes from a curated
//! catalog. Combinations that are geometrically splits but have no catalog
//! entry (a 2-8 sleeper, say) produce no advisory.
//!
//! This module is advisory only. Nothing in scoring depends on it.

use serde::{Deserialize, Serialize};

use crate::types::{PinSet, SplitDifficulty, HEAD_PIN, PIN_COUNT};

/// Pins physically touching each pin in a standard rack, indexed by pin - 1.
pub const PIN_ADJACENCY: [&[u8]; PIN_COUNT as usize] = [
    &[2, 3],             // 1
    &[1, 3, 4, 5],       // 2
    &[1, 2, 5, 6],       // 3
    &[2, 5, 7, 8],       // 4
    &[2, 3, 4, 6, 8, 9], // 5
    &[3, 5, 9, 10],      // 6
    &[4, 8],             // 7
    &[4, 5, 7, 9],       // 8
    &[5, 6, 8, 10],      // 9
    &[6, 9],             // 10
];

/// Static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitEntry {
    pub name: &'static str,
    /// Standing pins, ascending.
    pub pins: &'static [u8],
    pub difficulty: SplitDifficulty,
    /// Approximate historical conversion rate, in percent.
    pub conversion_rate: f32,
    pub description: &'static str,
}

/// Split advisory handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitInfo {
    pub name: String,
    pub pins: Vec<u8>,
    pub difficulty: SplitDifficulty,
    pub conversion_rate: f32,
    pub description: String,
}

impl From<&SplitEntry> for SplitInfo {
    fn from(entry: &SplitEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            pins: entry.pins.to_vec(),
            difficulty: entry.difficulty,
            conversion_rate: entry.conversion_rate,
            description: entry.description.to_string(),
        }
    }
}

const SPLIT_CATALOG: &[SplitEntry] = &[
    SplitEntry {
        name: "7-10 split",
        pins: &[7, 10],
        difficulty: SplitDifficulty::Extreme,
        conversion_rate: 0.7,
        description: "Bedposts. Pick the corner pin you shoot best and take the single.",
    },
    SplitEntry {
        name: "Big Four",
        pins: &[4, 6, 7, 10],
        difficulty: SplitDifficulty::Extreme,
        conversion_rate: 0.5,
        description: "Two pins on each side. Drive the 4 into the 7 and hope for a slide across.",
    },
    SplitEntry {
        name: "Greek Church",
        pins: &[4, 6, 7, 8, 10],
        difficulty: SplitDifficulty::Extreme,
        conversion_rate: 0.3,
        description: "Aim for the three-pin side and count what you can.",
    },
    SplitEntry {
        name: "Greek Church",
        pins: &[4, 6, 7, 9, 10],
        difficulty: SplitDifficulty::Extreme,
        conversion_rate: 0.3,
        description: "Aim for the three-pin side and count what you can.",
    },
    SplitEntry {
        name: "4-6 split",
        pins: &[4, 6],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 7.0,
        description: "Needs a thin hit on one pin to slide it across. Most bowlers take one.",
    },
    SplitEntry {
        name: "7-9 split",
        pins: &[7, 9],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 8.0,
        description: "Hit the 9 thin on the right side to send it into the 7.",
    },
    SplitEntry {
        name: "8-10 split",
        pins: &[8, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 8.0,
        description: "Hit the 8 thin on the left side to send it into the 10.",
    },
    SplitEntry {
        name: "4-7-10 split",
        pins: &[4, 7, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 1.5,
        description: "Take the 4-7 with a solid hit; the 10 is a bonus.",
    },
    SplitEntry {
        name: "6-7-10 split",
        pins: &[6, 7, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 1.5,
        description: "Take the 6-10 with a solid hit; the 7 is a bonus.",
    },
    SplitEntry {
        name: "Lily",
        pins: &[5, 7, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 1.0,
        description: "Play the 5 into one corner and count two.",
    },
    SplitEntry {
        name: "Christmas Tree",
        pins: &[2, 7, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 2.5,
        description: "Convert the 2-7 and leave the 10 unless the ball deflects across.",
    },
    SplitEntry {
        name: "Christmas Tree",
        pins: &[3, 7, 10],
        difficulty: SplitDifficulty::VeryHard,
        conversion_rate: 2.5,
        description: "Convert the 3-10 and leave the 7 unless the ball deflects across.",
    },
    SplitEntry {
        name: "4-10 split",
        pins: &[4, 10],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 8.0,
        description: "Too far apart to reach with the ball alone. Take the 4.",
    },
    SplitEntry {
        name: "6-7 split",
        pins: &[6, 7],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 7.0,
        description: "Too far apart to reach with the ball alone. Take the 6.",
    },
    SplitEntry {
        name: "2-10 split",
        pins: &[2, 10],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 12.0,
        description: "Hit the 2 on its left to drive it across toward the 10.",
    },
    SplitEntry {
        name: "3-7 split",
        pins: &[3, 7],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 12.0,
        description: "Hit the 3 on its right to drive it across toward the 7.",
    },
    SplitEntry {
        name: "4-9 split",
        pins: &[4, 9],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 18.0,
        description: "Both pins fit between the ball's edges if you come in from the right.",
    },
    SplitEntry {
        name: "6-8 split",
        pins: &[6, 8],
        difficulty: SplitDifficulty::Hard,
        conversion_rate: 18.0,
        description: "Both pins fit between the ball's edges if you come in from the left.",
    },
    SplitEntry {
        name: "5-7 split",
        pins: &[5, 7],
        difficulty: SplitDifficulty::Moderate,
        conversion_rate: 40.0,
        description: "Hit the 5 on its right side and send it into the 7.",
    },
    SplitEntry {
        name: "Woolworth",
        pins: &[5, 10],
        difficulty: SplitDifficulty::Moderate,
        conversion_rate: 40.0,
        description: "Hit the 5 on its left side and send it into the 10.",
    },
    SplitEntry {
        name: "Baby split",
        pins: &[2, 7],
        difficulty: SplitDifficulty::Moderate,
        conversion_rate: 65.0,
        description: "The ball fits between both pins. Aim between them.",
    },
    SplitEntry {
        name: "Baby split",
        pins: &[3, 10],
        difficulty: SplitDifficulty::Moderate,
        conversion_rate: 65.0,
        description: "The ball fits between both pins. Aim between them.",
    },
];

/// Every named split, hardest first.
pub fn split_catalog() -> &'static [SplitEntry] {
    SPLIT_CATALOG
}

fn adjacent(a: u8, b: u8) -> bool {
    PIN_ADJACENCY
        .get(usize::from(a).wrapping_sub(1))
        .is_some_and(|neighbours| neighbours.contains(&b))
}

/// Geometric split test on the standing pins: head pin down, at least two
/// pins up, and some pair of them not touching.
pub fn is_split(standing: PinSet) -> bool {
    if standing.contains(HEAD_PIN) || standing.len() < 2 {
        return false;
    }
    let pins = standing.to_vec();
    pins.iter()
        .enumerate()
        .any(|(i, &a)| pins[i + 1..].iter().any(|&b| !adjacent(a, b)))
}

/// Catalog entry for an exact standing-pin combination.
pub fn lookup_split(standing: PinSet) -> Option<&'static SplitEntry> {
    SPLIT_CATALOG
        .iter()
        .find(|entry| PinSet::from_pins(entry.pins.iter().copied()) == standing)
}

/// Classify what a first ball left standing.
///
/// `knocked_down` is the set of pins the ball took. Returns the catalog entry
/// when the leave is a split the catalog names, otherwise `None`.
pub fn analyze_split_from_pins(knocked_down: PinSet) -> Option<SplitInfo> {
    let standing = knocked_down.complement();
    if !is_split(standing) {
        return None;
    }
    lookup_split(standing).map(SplitInfo::from)
}
