//! Shared types for the pinfall workspace.
//!
//! Everything here is plain data with no scoring logic, so it can be used by the
//! core engine, the terminal front-end, and the hand-off record alike.
//!
//! # Rack layout
//!
//! Pins are numbered the standard way, head pin in front:
//!
//! ```text
//!  7   8   9   10
//!    4   5   6
//!      2   3
//!        1
//! ```
//!
//! # Examples
//!
//! ```
//! use pinfall_types::{PinSet, PIN_COUNT};
//!
//! let mut knocked = PinSet::from_pins([1, 2, 3]);
//! assert_eq!(knocked.len(), 3);
//!
//! // What is left standing for the next ball.
//! let standing = knocked.complement();
//! assert_eq!(standing.to_vec(), vec![4, 5, 6, 7, 8, 9, 10]);
//!
//! assert_eq!(knocked.len() + standing.len(), PIN_COUNT);
//!
//! // Toggling selects or deselects a single pin.
//! assert!(knocked.toggle(5));
//! assert!(!knocked.toggle(5));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Frames in a game.
pub const FRAME_COUNT: u8 = 10;

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// The frame with bonus balls and no lookahead.
pub const TENTH_FRAME: u8 = 10;

/// Pin #1.
pub const HEAD_PIN: u8 = 1;

/// Score of twelve strikes in a row.
pub const PERFECT_SCORE: u16 = 300;

/// Rack rows from the back row to the head pin, as drawn on a scorecard.
pub const PIN_ROWS: [&[u8]; 4] = [&[7, 8, 9, 10], &[4, 5, 6], &[2, 3], &[1]];

const RACK_MASK: u16 = (1 << PIN_COUNT) - 1;

#[inline]
fn pin_bit(pin: u8) -> Option<u16> {
    if (1..=PIN_COUNT).contains(&pin) {
        Some(1 << (pin - 1))
    } else {
        None
    }
}

/// A set of pin numbers (1-10), stored as a 10-bit mask.
///
/// Out-of-range pin numbers are never members; inserting one is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<u8>")]
pub struct PinSet(u16);

impl PinSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All ten pins.
    pub const fn full_rack() -> Self {
        Self(RACK_MASK)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & RACK_MASK)
    }

    pub fn from_pins<I: IntoIterator<Item = u8>>(pins: I) -> Self {
        pins.into_iter().collect()
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, pin: u8) -> bool {
        pin_bit(pin).is_some_and(|b| self.0 & b != 0)
    }

    /// Add a pin. Returns `false` if it was already present or out of range.
    pub fn insert(&mut self, pin: u8) -> bool {
        match pin_bit(pin) {
            Some(b) if self.0 & b == 0 => {
                self.0 |= b;
                true
            }
            _ => false,
        }
    }

    /// Remove a pin. Returns `false` if it was not present.
    pub fn remove(&mut self, pin: u8) -> bool {
        match pin_bit(pin) {
            Some(b) if self.0 & b != 0 => {
                self.0 &= !b;
                true
            }
            _ => false,
        }
    }

    /// Flip membership of a pin. Returns whether the pin is now present.
    pub fn toggle(&mut self, pin: u8) -> bool {
        if self.contains(pin) {
            self.remove(pin);
            false
        } else {
            self.insert(pin)
        }
    }

    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Pins of the full rack that are not in this set.
    pub const fn complement(self) -> Self {
        Self(!self.0 & RACK_MASK)
    }

    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Pin numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=PIN_COUNT).filter(move |&p| self.contains(p))
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl FromIterator<u8> for PinSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = PinSet::empty();
        for pin in iter {
            set.insert(pin);
        }
        set
    }
}

impl From<Vec<u8>> for PinSet {
    fn from(value: Vec<u8>) -> Self {
        value.into_iter().collect()
    }
}

impl From<PinSet> for Vec<u8> {
    fn from(value: PinSet) -> Self {
        value.to_vec()
    }
}

impl fmt::Display for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, pin) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pin}")?;
        }
        Ok(())
    }
}

/// Where the next throw will be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThrowPosition {
    /// 1-10
    pub frame: u8,
    /// 1-3 (3 only in the tenth frame)
    pub throw: u8,
}

impl ThrowPosition {
    pub const fn new(frame: u8, throw: u8) -> Self {
        Self { frame, throw }
    }

    pub const fn start() -> Self {
        Self::new(1, 1)
    }
}

/// Qualitative difficulty of converting a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitDifficulty {
    Moderate,
    Hard,
    VeryHard,
    Extreme,
}

impl SplitDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitDifficulty::Moderate => "moderate",
            SplitDifficulty::Hard => "hard",
            SplitDifficulty::VeryHard => "very hard",
            SplitDifficulty::Extreme => "extreme",
        }
    }
}

/// Discrete notification produced by the throw state machine.
///
/// At most one is pending at a time; front-ends consume it after each confirmed
/// throw and use `FrameChanged` to dismiss advice bound to the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FrameChanged { from: u8, to: u8 },
    GameCompleted { total_score: u16 },
}

/// Input-level actions a front-end can apply to a scoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    /// Select or deselect one pin (1-10) for the pending throw
    TogglePin(u8),
    /// Select every pin still available (strike / spare shortcut)
    SelectAll,
    ClearSelection,
    /// Record the current selection as the throw
    Confirm,
    /// Move editing to the previous frame
    PrevFrame,
    /// Move editing to the next frame
    NextFrame,
    /// Discard the game and start over
    Reset,
}
