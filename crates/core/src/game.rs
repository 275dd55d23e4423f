//! Frame and game records.
//!
//! A [`Game`] is always ten frames numbered 1-10; [`create_empty_game`] is the
//! only way to obtain one. Throws are appended or overwritten by the engine
//! (the session state machine and count entry), and the derived fields are
//! filled in by the score calculator.

use arrayvec::ArrayVec;

use crate::scoring::{self, GameStatistics};
use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME};

/// One of the ten frames of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    frame_number: u8,
    throws: ArrayVec<u8, 3>,
    /// Running total through this frame; `None` until scored.
    cumulative_score: Option<u16>,
    is_complete: bool,
}

impl Frame {
    fn empty(frame_number: u8) -> Self {
        Self {
            frame_number,
            throws: ArrayVec::new(),
            cumulative_score: None,
            is_complete: false,
        }
    }

    pub fn frame_number(&self) -> u8 {
        self.frame_number
    }

    /// Pin counts in delivery order.
    pub fn throws(&self) -> &[u8] {
        &self.throws
    }

    /// Pin count of a throw by 0-based index.
    pub fn throw(&self, index: usize) -> Option<u8> {
        self.throws.get(index).copied()
    }

    pub fn cumulative_score(&self) -> Option<u16> {
        self.cumulative_score
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_tenth(&self) -> bool {
        self.frame_number == TENTH_FRAME
    }

    pub fn has_throws(&self) -> bool {
        !self.throws.is_empty()
    }

    /// First ball took the whole rack.
    pub fn is_strike(&self) -> bool {
        self.throws.first() == Some(&PIN_COUNT)
    }

    /// First two balls took the whole rack, the first did not.
    pub fn is_spare(&self) -> bool {
        match self.throws.as_slice() {
            [first, second, ..] => {
                *first < PIN_COUNT && u16::from(*first) + u16::from(*second) == u16::from(PIN_COUNT)
            }
            _ => false,
        }
    }

    pub fn pin_total(&self) -> u16 {
        self.throws.iter().map(|&t| u16::from(t)).sum()
    }

    /// Record a pin count at a 0-based throw index, overwriting an existing
    /// throw or appending the next one.
    ///
    /// Returns `false` (and records nothing) if the index would leave a gap or
    /// exceeds three throws.
    pub(crate) fn set_throw(&mut self, index: usize, count: u8) -> bool {
        if index < self.throws.len() {
            self.throws[index] = count;
            true
        } else if index == self.throws.len() {
            self.throws.try_push(count).is_ok()
        } else {
            false
        }
    }

    pub(crate) fn truncate_throws(&mut self, len: usize) {
        self.throws.truncate(len);
    }

    pub(crate) fn set_derived(&mut self, cumulative_score: Option<u16>, is_complete: bool) {
        self.cumulative_score = cumulative_score;
        self.is_complete = is_complete;
    }
}

/// Ten frames plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [Frame; FRAME_COUNT as usize],
}

/// A fresh game: frames 1-10, no throws, unscored.
pub fn create_empty_game() -> Game {
    Game {
        frames: std::array::from_fn(|i| Frame::empty(i as u8 + 1)),
    }
}

impl Game {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by number (1-10).
    pub fn frame(&self, frame_number: u8) -> Option<&Frame> {
        self.frames.get(usize::from(frame_number).checked_sub(1)?)
    }

    pub(crate) fn frame_mut(&mut self, frame_number: u8) -> Option<&mut Frame> {
        self.frames.get_mut(usize::from(frame_number).checked_sub(1)?)
    }

    /// Cumulative score of the tenth frame (0 when unscored).
    pub fn total_score(&self) -> u16 {
        self.frames[self.frames.len() - 1]
            .cumulative_score
            .unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        scoring::is_game_complete(&self.frames)
    }

    /// Recompute every cumulative score and completion flag in place.
    pub fn rescore(&mut self) {
        scoring::score_frames(&mut self.frames);
    }

    pub fn statistics(&self) -> GameStatistics {
        scoring::get_game_statistics(&self.frames)
    }

    /// First frame still accepting throws, or the tenth once all are done.
    pub fn open_frame(&self) -> u8 {
        self.frames
            .iter()
            .find(|f| !scoring::is_frame_complete(f.throws(), f.frame_number()))
            .map_or(TENTH_FRAME, Frame::frame_number)
    }
}

impl Default for Game {
    fn default() -> Self {
        create_empty_game()
    }
}
