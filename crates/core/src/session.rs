//! Pin-by-pin scoring session.
//!
//! A [`Session`] owns one game being entered, the exact set of pins knocked
//! down on every recorded throw, the current frame/throw position, and the
//! transient pin selection for the next throw. It is a single-writer value:
//! front-ends hold it and call into it, and every operation runs to completion
//! synchronously.
//!
//! The per-throw pin sets are what make pin-by-pin entry possible. A count of
//! 7 on the first ball says nothing about *which* three pins are left for the
//! second; the stored set does.
//!
//! # Example
//!
//! ```
//! use pinfall_core::session::Session;
//! use pinfall_core::types::{GameEvent, PinSet};
//!
//! let mut session = Session::new();
//!
//! // First ball leaves the 7-10.
//! let outcome = session
//!     .confirm_throw(PinSet::from_pins([1, 2, 3, 4, 5, 6, 8, 9]))
//!     .unwrap();
//! assert_eq!(outcome.split.unwrap().name, "7-10 split");
//! assert_eq!(session.available_pins(1, 2), PinSet::from_pins([7, 10]));
//!
//! // Second ball picks up the 7; the frame closes with 9.
//! let outcome = session.confirm_throw(PinSet::from_pins([7])).unwrap();
//! assert_eq!(outcome.event, Some(GameEvent::FrameChanged { from: 1, to: 2 }));
//! assert_eq!(session.game().frame(1).unwrap().cumulative_score(), Some(9));
//! ```

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tracing::{debug, info, trace, warn};

use crate::error::SessionError;
use crate::game::{create_empty_game, Game};
use crate::notation::frame_marks;
use crate::record::GameRecord;
use crate::scoring::is_frame_complete;
use crate::snapshot::{FrameSnapshot, SessionSnapshot};
use crate::splits::{analyze_split_from_pins, SplitInfo};
use crate::types::{
    GameEvent, PinSet, ScoreAction, ThrowPosition, FRAME_COUNT, PIN_COUNT, TENTH_FRAME,
};

/// Result of a confirmed throw.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowOutcome {
    /// Where the throw was recorded.
    pub recorded: ThrowPosition,
    pub pins_down: u8,
    /// Split advisory for a first ball, if the leave is a named split.
    pub split: Option<SplitInfo>,
    /// Frame change or game completion caused by this throw.
    pub event: Option<GameEvent>,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    /// Pins knocked down, keyed by (frame, throw), both 1-based.
    pin_sets: BTreeMap<(u8, u8), PinSet>,
    position: ThrowPosition,
    selection: PinSet,
    done: bool,
    split: Option<SplitInfo>,
    pending_event: Option<GameEvent>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: create_empty_game(),
            pin_sets: BTreeMap::new(),
            position: ThrowPosition::start(),
            selection: PinSet::empty(),
            done: false,
            split: None,
            pending_event: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn position(&self) -> ThrowPosition {
        self.position
    }

    pub fn selection(&self) -> PinSet {
        self.selection
    }

    /// The tenth frame has been completed and no throw is pending.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Split advisory for the current frame's first ball.
    pub fn split_advisory(&self) -> Option<&SplitInfo> {
        self.split.as_ref()
    }

    /// Pins recorded as knocked down on a throw.
    pub fn knocked_down(&self, frame: u8, throw: u8) -> Option<PinSet> {
        self.pin_sets.get(&(frame, throw)).copied()
    }

    /// Consume the pending notification, if any.
    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.pending_event.take()
    }

    fn recorded_pins(&self, frame: u8, throw: u8) -> PinSet {
        self.knocked_down(frame, throw).unwrap_or_default()
    }

    /// Pins standing (and therefore selectable) for a throw.
    ///
    /// The first ball of every frame faces a full rack. Frames 1-9 offer the
    /// remainder on the second ball (nothing after a strike). The tenth frame
    /// resets the rack after a strike or spare.
    pub fn available_pins(&self, frame: u8, throw: u8) -> PinSet {
        let full = PinSet::full_rack();
        let first = self.recorded_pins(frame, 1);

        match (frame, throw) {
            (f, _) if f == 0 || f > FRAME_COUNT => PinSet::empty(),
            (_, 1) => full,
            (f, 2) if f < TENTH_FRAME => full.difference(first),
            (_, 2) => {
                if first.len() == PIN_COUNT {
                    full
                } else {
                    full.difference(first)
                }
            }
            (TENTH_FRAME, 3) => {
                let second = self.recorded_pins(frame, 2);
                if first.len() == PIN_COUNT {
                    if second.len() == PIN_COUNT {
                        full
                    } else {
                        full.difference(second)
                    }
                } else if first.union(second).len() == PIN_COUNT {
                    full
                } else {
                    PinSet::empty()
                }
            }
            _ => PinSet::empty(),
        }
    }

    /// Pins standing for the pending throw.
    pub fn standing_pins(&self) -> PinSet {
        if self.done {
            return PinSet::empty();
        }
        self.available_pins(self.position.frame, self.position.throw)
    }

    /// Whether a throw exists to be recorded, given what the frame holds.
    fn is_throw_offered(&self, frame: u8, throw: u8) -> bool {
        let Some(f) = self.game.frame(frame) else {
            return false;
        };
        let throws = f.throws();
        match throw {
            1 => true,
            2 if frame < TENTH_FRAME => matches!(throws.first(), Some(&first) if first < PIN_COUNT),
            2 => !throws.is_empty(),
            3 if frame == TENTH_FRAME => match throws {
                [first, second, ..] => {
                    *first == PIN_COUNT
                        || u16::from(*first) + u16::from(*second) == u16::from(PIN_COUNT)
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Select or deselect a pin for the pending throw.
    ///
    /// Deselecting always succeeds. Selecting a pin that is not standing, or
    /// any pin once the game is done, is refused and leaves the selection as
    /// it was.
    pub fn toggle_pin(&mut self, pin: u8) -> bool {
        if self.selection.contains(pin) {
            self.selection.remove(pin);
            return true;
        }
        if self.done || !self.standing_pins().contains(pin) {
            trace!(pin, frame = self.position.frame, throw = self.position.throw, "pin not selectable");
            return false;
        }
        self.selection.insert(pin)
    }

    /// Select every standing pin (strike or spare shortcut).
    pub fn select_all_available(&mut self) -> bool {
        let standing = self.standing_pins();
        if standing.is_empty() {
            return false;
        }
        self.selection = standing;
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = PinSet::empty();
    }

    /// Confirm the current selection as the pending throw.
    pub fn confirm_selection(&mut self) -> Result<ThrowOutcome, SessionError> {
        self.confirm_throw(self.selection)
    }

    /// Record `pins` as knocked down on the pending throw and advance.
    ///
    /// Overwrites the throw if it was already recorded. Overwriting the first
    /// ball of frames 1-9 discards the second ball, since the pins it faced
    /// are no longer known. In the tenth frame, later balls are kept only
    /// while their pins still fit the rack the edit leaves.
    pub fn confirm_throw(&mut self, pins: PinSet) -> Result<ThrowOutcome, SessionError> {
        if self.done {
            return Err(SessionError::GameComplete);
        }
        let ThrowPosition { frame, throw } = self.position;
        if !self.is_throw_offered(frame, throw) {
            return Err(SessionError::ThrowNotOffered { frame, throw });
        }
        if !pins.is_subset(self.available_pins(frame, throw)) {
            return Err(SessionError::PinsNotAvailable { frame, throw, pins });
        }

        let index = usize::from(throw - 1);
        let game_frame = self
            .game
            .frame_mut(frame)
            .ok_or(SessionError::FrameOutOfRange(frame))?;
        let overwriting = game_frame.throws().len() > index;
        game_frame.set_throw(index, pins.len());
        self.pin_sets.insert((frame, throw), pins);

        if overwriting {
            if frame < TENTH_FRAME {
                if throw == 1 {
                    self.drop_throws_from(frame, 2);
                }
            } else {
                self.revalidate_tenth_after(throw);
            }
        }

        self.game.rescore();
        debug!(
            frame,
            throw,
            pins_down = pins.len(),
            overwriting,
            total = self.game.total_score(),
            "throw confirmed"
        );

        let split = if throw == 1 {
            analyze_split_from_pins(pins)
        } else {
            None
        };
        if throw == 1 {
            self.split = split.clone();
        }

        let event = self.advance();
        self.selection = PinSet::empty();

        Ok(ThrowOutcome {
            recorded: ThrowPosition::new(frame, throw),
            pins_down: pins.len(),
            split,
            event,
        })
    }

    /// Remove a frame's throws from `throw` onward, counts and pin sets both.
    fn drop_throws_from(&mut self, frame: u8, throw: u8) {
        if let Some(f) = self.game.frame_mut(frame) {
            if f.throws().len() >= usize::from(throw) {
                debug!(frame, throw, "discarding throws invalidated by edit");
            }
            f.truncate_throws(usize::from(throw - 1));
        }
        for t in throw..=3 {
            self.pin_sets.remove(&(frame, t));
        }
    }

    /// After overwriting a tenth-frame ball, keep later balls only while each
    /// is still offered and its pins are still standing.
    fn revalidate_tenth_after(&mut self, edited: u8) {
        for later in edited + 1..=3 {
            let recorded = self
                .game
                .frame(TENTH_FRAME)
                .is_some_and(|f| f.throws().len() >= usize::from(later));
            if !recorded {
                break;
            }
            let still_valid = self.is_throw_offered(TENTH_FRAME, later)
                && self
                    .knocked_down(TENTH_FRAME, later)
                    .is_some_and(|p| p.is_subset(self.available_pins(TENTH_FRAME, later)));
            if !still_valid {
                self.drop_throws_from(TENTH_FRAME, later);
                break;
            }
        }
    }

    /// Move to the next position after a confirmed throw.
    fn advance(&mut self) -> Option<GameEvent> {
        let ThrowPosition { frame, throw } = self.position;
        let complete = self
            .game
            .frame(frame)
            .is_some_and(|f| is_frame_complete(f.throws(), frame));

        if frame < TENTH_FRAME && complete && self.game.is_complete() {
            // An edit that closes an earlier frame of a finished card.
            return Some(self.finish());
        }

        if frame < TENTH_FRAME {
            if complete {
                self.position = ThrowPosition::new(frame + 1, 1);
                self.split = None;
                let event = GameEvent::FrameChanged {
                    from: frame,
                    to: frame + 1,
                };
                self.pending_event = Some(event);
                return Some(event);
            }
            self.position = ThrowPosition::new(frame, 2);
            return None;
        }

        if complete {
            return Some(self.finish());
        }

        let next = self
            .game
            .frame(frame)
            .map_or(1, |f| f.throws().len() as u8 + 1)
            .min(3);
        self.position = ThrowPosition::new(frame, next.max(throw + 1).min(3));
        None
    }

    fn finish(&mut self) -> GameEvent {
        self.done = true;
        self.split = None;
        let total_score = self.game.total_score();
        info!(total_score, "game complete");
        let event = GameEvent::GameCompleted { total_score };
        self.pending_event = Some(event);
        event
    }

    /// Reposition to a frame for editing or continuation.
    ///
    /// An unfinished frame resumes at its next ball; a finished one reopens at
    /// its first ball. Frames past the first unfinished one cannot be reached.
    pub fn select_frame_for_editing(&mut self, frame_number: u8) -> Result<(), SessionError> {
        let frame = self
            .game
            .frame(frame_number)
            .ok_or(SessionError::FrameOutOfRange(frame_number))?;
        let open = self.game.open_frame();
        if frame_number > open {
            return Err(SessionError::FrameNotReached {
                frame: frame_number,
                open,
            });
        }

        let throws = frame.throws();
        let throw = if frame_number < TENTH_FRAME {
            match throws {
                [first] if *first < PIN_COUNT => 2,
                _ => 1,
            }
        } else {
            match throws {
                [_] => 2,
                [first, second]
                    if *first == PIN_COUNT
                        || u16::from(*first) + u16::from(*second) == u16::from(PIN_COUNT) =>
                {
                    3
                }
                _ => 1,
            }
        };

        let from = self.position.frame;
        self.position = ThrowPosition::new(frame_number, throw);
        self.selection = PinSet::empty();
        self.done = false;
        if from != frame_number {
            self.split = None;
            self.pending_event = Some(GameEvent::FrameChanged {
                from,
                to: frame_number,
            });
        }
        debug!(frame = frame_number, throw, "frame selected for editing");
        Ok(())
    }

    /// Discard the game and start again at frame 1, throw 1.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }

    /// Apply a front-end action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: ScoreAction) -> bool {
        match action {
            ScoreAction::TogglePin(pin) => self.toggle_pin(pin),
            ScoreAction::SelectAll => self.select_all_available(),
            ScoreAction::ClearSelection => {
                let had = !self.selection.is_empty();
                self.clear_selection();
                had
            }
            ScoreAction::Confirm => match self.confirm_selection() {
                Ok(_) => true,
                Err(err) => {
                    warn!(%err, "confirm rejected");
                    false
                }
            },
            ScoreAction::PrevFrame => {
                let target = self.position.frame.saturating_sub(1);
                target >= 1 && self.select_frame_for_editing(target).is_ok()
            }
            ScoreAction::NextFrame => {
                let target = self.position.frame + 1;
                target <= FRAME_COUNT && self.select_frame_for_editing(target).is_ok()
            }
            ScoreAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Hand-off record stamped with the current time; `None` until the game
    /// is complete.
    pub fn to_record(&self) -> Option<GameRecord> {
        self.to_record_at(OffsetDateTime::now_utc())
    }

    pub fn to_record_at(&self, created_at: OffsetDateTime) -> Option<GameRecord> {
        GameRecord::from_game(&self.game, created_at)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        for (slot, frame) in out.frames.iter_mut().zip(self.game.frames()) {
            *slot = FrameSnapshot {
                frame_number: frame.frame_number(),
                marks: frame_marks(frame),
                cumulative_score: frame.cumulative_score().filter(|_| frame.has_throws()),
                is_complete: frame.is_complete(),
            };
        }
        out.position = self.position;
        out.selection = self.selection;
        out.standing = self.standing_pins();
        out.done = self.done;
        out.total_score = self.game.total_score();
        out.split = self.split.clone();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn pins(list: &[u8]) -> PinSet {
        PinSet::from_pins(list.iter().copied())
    }

    fn strike(session: &mut Session) -> ThrowOutcome {
        session.confirm_throw(PinSet::full_rack()).unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.position(), ThrowPosition::new(1, 1));
        assert!(session.selection().is_empty());
        assert!(!session.is_done());
        assert_eq!(session.standing_pins(), PinSet::full_rack());
        assert_eq!(session.game().total_score(), 0);
    }

    #[test]
    fn test_available_pins_after_first_ball() {
        test_support::init_logging();
        let mut session = Session::new();
        session.confirm_throw(pins(&[10])).unwrap();
        session.confirm_throw(pins(&[1, 2])).unwrap();
        // Frames 1 and 2 are open; frame 3's first ball takes 1-2-3.
        session.confirm_throw(pins(&[4, 5, 6])).unwrap();
        session.confirm_throw(pins(&[1])).unwrap();
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();

        assert_eq!(session.position(), ThrowPosition::new(3, 2));
        assert_eq!(session.available_pins(3, 2), pins(&[4, 5, 6, 7, 8, 9, 10]));
    }

    #[test]
    fn test_strike_moves_to_next_frame() {
        let mut session = Session::new();
        let outcome = strike(&mut session);
        assert_eq!(outcome.pins_down, 10);
        assert_eq!(outcome.event, Some(GameEvent::FrameChanged { from: 1, to: 2 }));
        assert_eq!(session.position(), ThrowPosition::new(2, 1));
        assert!(session.game().frame(1).unwrap().is_complete());
        assert_eq!(session.available_pins(1, 2), PinSet::empty());
        assert_eq!(session.take_event(), Some(GameEvent::FrameChanged { from: 1, to: 2 }));
        assert_eq!(session.take_event(), None);
    }

    #[test]
    fn test_open_frame_stays_for_second_ball() {
        let mut session = Session::new();
        let outcome = session.confirm_throw(pins(&[1, 2, 3, 5, 6])).unwrap();
        assert_eq!(outcome.event, None);
        assert_eq!(session.position(), ThrowPosition::new(1, 2));
        assert_eq!(session.take_event(), None);
    }

    #[test]
    fn test_toggle_refuses_unavailable_pins() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();

        assert!(!session.toggle_pin(1));
        assert!(!session.toggle_pin(0));
        assert!(!session.toggle_pin(11));
        assert!(session.selection().is_empty());

        assert!(session.toggle_pin(4));
        assert!(session.toggle_pin(7));
        assert_eq!(session.selection(), pins(&[4, 7]));

        // Deselect.
        assert!(session.toggle_pin(4));
        assert_eq!(session.selection(), pins(&[7]));
    }

    #[test]
    fn test_selection_never_exceeds_standing() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 7])).unwrap();
        for pin in 1..=10 {
            session.toggle_pin(pin);
        }
        assert_eq!(session.selection(), pins(&[8, 9, 10]));
    }

    #[test]
    fn test_select_all_then_confirm_is_spare() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 4, 7])).unwrap();
        assert!(session.select_all_available());
        session.confirm_selection().unwrap();

        let frame = session.game().frame(1).unwrap();
        assert_eq!(frame.throws(), &[4, 6]);
        assert!(frame.is_spare());
        assert_eq!(session.position(), ThrowPosition::new(2, 1));
    }

    #[test]
    fn test_confirm_rejects_pins_already_down() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        let err = session.confirm_throw(pins(&[3, 4])).unwrap_err();
        assert_eq!(
            err,
            SessionError::PinsNotAvailable {
                frame: 1,
                throw: 2,
                pins: pins(&[3, 4])
            }
        );
        assert_eq!(session.game().frame(1).unwrap().throws(), &[3]);
    }

    #[test]
    fn test_spare_bonus_updates_after_next_ball() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 7])).unwrap();
        session.confirm_throw(pins(&[8, 9, 10])).unwrap();
        assert_eq!(session.game().frame(1).unwrap().cumulative_score(), Some(10));

        session.confirm_throw(pins(&[1, 2, 3, 4])).unwrap();
        assert_eq!(session.game().frame(1).unwrap().cumulative_score(), Some(14));
    }

    #[test]
    fn test_split_reported_after_first_ball() {
        let mut session = Session::new();
        let outcome = session
            .confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 8, 9]))
            .unwrap();
        let split = outcome.split.unwrap();
        assert_eq!(split.name, "7-10 split");
        assert_eq!(session.split_advisory().map(|s| s.name.as_str()), Some("7-10 split"));

        // Still shown while the frame is open, dismissed once it closes.
        session.confirm_throw(pins(&[7])).unwrap();
        assert!(session.split_advisory().is_none());
    }

    #[test]
    fn test_perfect_game_via_session() {
        let mut session = Session::new();
        for _ in 0..12 {
            strike(&mut session);
        }
        assert!(session.is_done());
        assert_eq!(session.game().total_score(), 300);
        assert_eq!(
            session.take_event(),
            Some(GameEvent::GameCompleted { total_score: 300 })
        );
        assert_eq!(
            session.confirm_throw(PinSet::empty()).unwrap_err(),
            SessionError::GameComplete
        );
        assert!(!session.toggle_pin(1));
        assert!(session.standing_pins().is_empty());
    }

    #[test]
    fn test_tenth_frame_rack_resets() {
        let mut session = Session::new();
        for _ in 0..9 {
            session.confirm_throw(PinSet::empty()).unwrap();
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        assert_eq!(session.position(), ThrowPosition::new(10, 1));

        strike(&mut session);
        assert_eq!(session.position(), ThrowPosition::new(10, 2));
        assert_eq!(session.available_pins(10, 2), PinSet::full_rack());

        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        assert_eq!(session.position(), ThrowPosition::new(10, 3));
        assert_eq!(session.available_pins(10, 3), pins(&[4, 5, 6, 7, 8, 9, 10]));

        session.confirm_throw(pins(&[4, 5])).unwrap();
        assert!(session.is_done());
        assert_eq!(session.game().total_score(), 15);
    }

    #[test]
    fn test_tenth_frame_spare_then_fill_ball() {
        let mut session = Session::new();
        for _ in 0..18 {
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        assert_eq!(session.available_pins(10, 2), pins(&[4, 5, 6, 7, 8, 9, 10]));
        session.select_all_available();
        session.confirm_selection().unwrap();
        assert_eq!(session.position(), ThrowPosition::new(10, 3));
        assert_eq!(session.available_pins(10, 3), PinSet::full_rack());
        strike(&mut session);
        assert!(session.is_done());
        assert_eq!(session.game().total_score(), 20);
    }

    #[test]
    fn test_tenth_frame_open_has_no_third_ball() {
        let mut session = Session::new();
        for _ in 0..18 {
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        session.confirm_throw(pins(&[1, 2])).unwrap();
        session.confirm_throw(pins(&[3])).unwrap();
        assert!(session.is_done());
        assert_eq!(session.available_pins(10, 3), PinSet::empty());
        assert_eq!(session.game().total_score(), 3);
    }

    #[test]
    fn test_editing_first_ball_to_strike_clears_second() {
        test_support::init_logging();
        let mut session = Session::new();
        for _ in 0..4 {
            strike(&mut session);
        }
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        session.confirm_throw(pins(&[4, 5])).unwrap();
        assert_eq!(session.knocked_down(5, 2), Some(pins(&[4, 5])));

        session.select_frame_for_editing(5).unwrap();
        assert_eq!(session.position(), ThrowPosition::new(5, 1));
        strike(&mut session);

        assert_eq!(session.knocked_down(5, 2), None);
        assert_eq!(session.game().frame(5).unwrap().throws(), &[10]);
        assert_eq!(session.position(), ThrowPosition::new(6, 1));
    }

    #[test]
    fn test_editing_first_ball_always_discards_second() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        session.confirm_throw(pins(&[4, 5])).unwrap();

        session.select_frame_for_editing(1).unwrap();
        session.confirm_throw(pins(&[1, 2, 3, 4])).unwrap();

        assert_eq!(session.game().frame(1).unwrap().throws(), &[4]);
        assert_eq!(session.knocked_down(1, 2), None);
        assert_eq!(session.position(), ThrowPosition::new(1, 2));
        assert_eq!(session.available_pins(1, 2), pins(&[5, 6, 7, 8, 9, 10]));
    }

    #[test]
    fn test_editing_second_ball_keeps_first() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        session.confirm_throw(pins(&[4, 5])).unwrap();
        session.select_frame_for_editing(1).unwrap();
        // Complete frames reopen at their first ball; step to the second.
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        session.confirm_throw(pins(&[4, 5, 6, 7, 8, 9, 10])).unwrap();
        assert!(session.game().frame(1).unwrap().is_spare());
    }

    #[test]
    fn test_editing_tenth_keeps_balls_that_still_fit() {
        let mut session = Session::new();
        for _ in 0..18 {
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        strike(&mut session);
        session.confirm_throw(pins(&[7, 8, 9, 10])).unwrap();
        session.confirm_throw(pins(&[1, 2])).unwrap();
        assert!(session.is_done());
        session.take_event();

        session.select_frame_for_editing(10).unwrap();
        assert!(!session.is_done());
        assert_eq!(session.position(), ThrowPosition::new(10, 1));

        // First ball now leaves 7-8-9-10: the old second ball converts the
        // spare and the fill ball faces a fresh rack, so both stay.
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6])).unwrap();
        let tenth = session.game().frame(10).unwrap();
        assert_eq!(tenth.throws(), &[6, 4, 2]);
        assert_eq!(session.knocked_down(10, 3), Some(pins(&[1, 2])));
        assert!(session.is_done());
        assert_eq!(
            session.take_event(),
            Some(GameEvent::GameCompleted { total_score: 12 })
        );
    }

    #[test]
    fn test_editing_tenth_drops_balls_that_no_longer_fit() {
        let mut session = Session::new();
        for _ in 0..18 {
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        session.confirm_throw(pins(&[4, 5, 6, 7, 8, 9, 10])).unwrap();
        strike(&mut session);

        session.select_frame_for_editing(10).unwrap();
        // Same count, different pins: second ball no longer fits.
        session.confirm_throw(pins(&[8, 9, 10])).unwrap();
        assert_eq!(session.game().frame(10).unwrap().throws(), &[3]);
        assert_eq!(session.knocked_down(10, 2), None);
        assert_eq!(session.knocked_down(10, 3), None);
        assert_eq!(session.position(), ThrowPosition::new(10, 2));

        // Re-enter the spare and the fill ball.
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 7])).unwrap();
        strike(&mut session);
        assert!(session.is_done());
        assert_eq!(session.game().total_score(), 20);
    }

    #[test]
    fn test_editing_finished_game_completes_it_again() {
        let mut session = Session::new();
        for _ in 0..12 {
            strike(&mut session);
        }
        session.take_event();

        session.select_frame_for_editing(5).unwrap();
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 7, 8, 9])).unwrap();
        assert!(!session.is_done());
        let outcome = session.confirm_throw(pins(&[10])).unwrap();

        assert_eq!(outcome.event, Some(GameEvent::GameCompleted { total_score: 279 }));
        assert!(session.is_done());
        assert!(session.standing_pins().is_empty());
        assert_eq!(
            session.take_event(),
            Some(GameEvent::GameCompleted { total_score: 279 })
        );
        let record = session.to_record_at(OffsetDateTime::UNIX_EPOCH).unwrap();
        assert_eq!(record.total_score, 279);
        assert_eq!(record.spares, 1);
        assert_eq!(record.strikes, 11);
    }

    #[test]
    fn test_editing_frame_nine_leaves_tenth_rack_alone() {
        let mut session = Session::new();
        for _ in 0..16 {
            session.confirm_throw(PinSet::empty()).unwrap();
        }
        strike(&mut session);
        session.confirm_throw(pins(&[1, 2, 3])).unwrap();
        assert_eq!(session.position(), ThrowPosition::new(10, 2));
        assert_eq!(session.game().frame(9).unwrap().cumulative_score(), Some(13));
        assert_eq!(session.game().frame(10).unwrap().cumulative_score(), Some(16));
        let rack_before = session.available_pins(10, 2);

        // Strike in frame 9 becomes an open 2-1.
        session.select_frame_for_editing(9).unwrap();
        assert_eq!(session.position(), ThrowPosition::new(9, 1));
        session.confirm_throw(pins(&[1, 2])).unwrap();
        session.confirm_throw(pins(&[3])).unwrap();

        assert_eq!(session.knocked_down(10, 1), Some(pins(&[1, 2, 3])));
        assert_eq!(session.available_pins(10, 2), rack_before);
        assert_eq!(rack_before, pins(&[4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(session.game().frame(9).unwrap().cumulative_score(), Some(3));
        assert_eq!(session.game().frame(10).unwrap().cumulative_score(), Some(6));
        assert!(!session.is_done());
    }

    #[test]
    fn test_select_frame_resume_points() {
        let mut session = Session::new();
        session.confirm_throw(pins(&[1])).unwrap();
        assert!(session.select_frame_for_editing(1).is_ok());
        assert_eq!(session.position(), ThrowPosition::new(1, 2));

        assert_eq!(
            session.select_frame_for_editing(2),
            Err(SessionError::FrameNotReached { frame: 2, open: 1 })
        );
        assert_eq!(
            session.select_frame_for_editing(11),
            Err(SessionError::FrameOutOfRange(11))
        );
        assert_eq!(
            session.select_frame_for_editing(0),
            Err(SessionError::FrameOutOfRange(0))
        );
    }

    #[test]
    fn test_select_frame_clears_selection_and_emits_event() {
        let mut session = Session::new();
        strike(&mut session);
        session.take_event();
        session.toggle_pin(3);

        session.select_frame_for_editing(1).unwrap();
        assert!(session.selection().is_empty());
        assert_eq!(session.take_event(), Some(GameEvent::FrameChanged { from: 2, to: 1 }));
    }

    #[test]
    fn test_reset() {
        let mut session = Session::new();
        strike(&mut session);
        session.toggle_pin(2);
        session.reset();

        assert_eq!(session.position(), ThrowPosition::start());
        assert!(session.selection().is_empty());
        assert_eq!(session.knocked_down(1, 1), None);
        assert!(!session.game().frame(1).unwrap().has_throws());
        assert_eq!(session.take_event(), None);
    }

    #[test]
    fn test_apply_action() {
        let mut session = Session::new();
        assert!(session.apply_action(ScoreAction::TogglePin(1)));
        assert!(session.apply_action(ScoreAction::ClearSelection));
        assert!(!session.apply_action(ScoreAction::ClearSelection));
        assert!(session.apply_action(ScoreAction::SelectAll));
        assert!(session.apply_action(ScoreAction::Confirm));
        assert_eq!(session.position(), ThrowPosition::new(2, 1));

        assert!(session.apply_action(ScoreAction::PrevFrame));
        assert_eq!(session.position().frame, 1);
        assert!(!session.apply_action(ScoreAction::PrevFrame));
        assert!(session.apply_action(ScoreAction::NextFrame));
        assert!(!session.apply_action(ScoreAction::NextFrame));

        assert!(session.apply_action(ScoreAction::Reset));
        assert_eq!(session.position(), ThrowPosition::start());
    }

    #[test]
    fn test_record_only_when_complete() {
        let mut session = Session::new();
        assert!(session.to_record().is_none());
        for _ in 0..12 {
            strike(&mut session);
        }
        let record = session.to_record_at(OffsetDateTime::UNIX_EPOCH).unwrap();
        assert_eq!(record.total_score, 300);
        assert_eq!(record.strikes, 12);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = Session::new();
        strike(&mut session);
        session.confirm_throw(pins(&[1, 2, 3, 4, 5, 6, 8, 9])).unwrap();
        session.toggle_pin(7);

        let snap = session.snapshot();
        assert_eq!(snap.frames[0].marks.as_slice(), &['X']);
        assert_eq!(snap.frames[0].cumulative_score, Some(18));
        assert_eq!(snap.frames[1].marks.as_slice(), &['8']);
        assert_eq!(snap.frames[2].cumulative_score, None);
        assert_eq!(snap.position, ThrowPosition::new(2, 2));
        assert_eq!(snap.selection, pins(&[7]));
        assert_eq!(snap.standing, pins(&[7, 10]));
        assert_eq!(snap.split.as_ref().map(|s| s.name.as_str()), Some("7-10 split"));
    }
}
