//! Score calculator - ten-pin rules
//!
//! Scoring is a full recomputation over all ten frames. A strike looks ahead at
//! most two frames and a spare one frame, so every lookup is a bounded index
//! (`frames.get(i + 1)`, `frames.get(i + 2)`). Balls not yet bowled count as 0;
//! the totals fill in as later throws are recorded.
//!
//! Nothing here validates pin counts. Callers only pass frames built by
//! [`create_empty_game`] and mutated by this crate.

use crate::error::ScoreError;
use crate::game::{create_empty_game, Frame, Game};
use crate::types::{PIN_COUNT, TENTH_FRAME};

/// Strike / spare / open counts for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStatistics {
    pub strikes: u8,
    pub spares: u8,
    pub opens: u8,
}

const RACK: u16 = PIN_COUNT as u16;

fn pins(throw: Option<u8>) -> u16 {
    u16::from(throw.unwrap_or(0))
}

fn first_throw(frame: Option<&Frame>) -> Option<u8> {
    frame.and_then(|f| f.throw(0))
}

/// Whether a frame accepts no further throws.
///
/// Frames 1-9 end on a strike or after two balls. The tenth needs a third
/// ball whenever its first two produce a strike or a spare.
pub fn is_frame_complete(throws: &[u8], frame_number: u8) -> bool {
    if frame_number < TENTH_FRAME {
        return throws.first() == Some(&PIN_COUNT) || throws.len() >= 2;
    }
    match throws {
        [] | [_] => false,
        [first, second] => {
            !(*first == PIN_COUNT || u16::from(*first) + u16::from(*second) == RACK)
        }
        _ => true,
    }
}

/// Every frame is complete.
pub fn is_game_complete(frames: &[Frame]) -> bool {
    frames
        .iter()
        .all(|f| is_frame_complete(f.throws(), f.frame_number()))
}

/// Largest pin count the next ball of a frame may knock down (0 once the
/// frame is complete).
pub fn max_pins_for_throw(throws: &[u8], frame_number: u8) -> u8 {
    if is_frame_complete(throws, frame_number) {
        return 0;
    }
    match throws {
        [] => PIN_COUNT,
        [first] if frame_number < TENTH_FRAME => PIN_COUNT.saturating_sub(*first),
        [first] => {
            if *first == PIN_COUNT {
                PIN_COUNT
            } else {
                PIN_COUNT.saturating_sub(*first)
            }
        }
        // Only the tenth frame reaches here: strike or spare in its first two.
        [first, second] => {
            if *first == PIN_COUNT && *second < PIN_COUNT {
                PIN_COUNT - second
            } else {
                PIN_COUNT
            }
        }
        _ => 0,
    }
}

/// Bonus for a strike in frame `i`: the next two balls bowled.
fn strike_bonus(frames: &[Frame], i: usize) -> u16 {
    let Some(next) = frames.get(i + 1) else {
        return 0;
    };
    match next.throw(0) {
        // Back-to-back strikes reach into the frame after. The tenth frame
        // carries its own second ball, so it never chains further.
        Some(PIN_COUNT) if !next.is_tenth() => RACK + pins(first_throw(frames.get(i + 2))),
        first => pins(first) + pins(next.throw(1)),
    }
}

fn frame_score(frames: &[Frame], i: usize) -> u16 {
    let frame = &frames[i];
    if frame.is_tenth() {
        return frame.pin_total();
    }
    if frame.is_strike() {
        RACK + strike_bonus(frames, i)
    } else if frame.throws().len() == 2 && frame.pin_total() == RACK {
        RACK + pins(first_throw(frames.get(i + 1)))
    } else {
        frame.pin_total()
    }
}

/// Fill in cumulative scores and completion flags in place.
pub(crate) fn score_frames(frames: &mut [Frame]) {
    let mut running: u16 = 0;
    for i in 0..frames.len() {
        running = running.saturating_add(frame_score(frames, i));
        let complete = is_frame_complete(frames[i].throws(), frames[i].frame_number());
        frames[i].set_derived(Some(running), complete);
    }
}

/// Score a game: returns a copy of `frames` with every cumulative score and
/// completion flag populated. The input is left untouched.
pub fn calculate_game_score(frames: &[Frame]) -> Vec<Frame> {
    let mut scored = frames.to_vec();
    score_frames(&mut scored);
    scored
}

/// Count strikes, spares, and open frames.
///
/// In the tenth frame every fresh rack can produce a mark: a strike on the
/// first ball, a strike on the second after a first-ball strike, or a strike on
/// the third after the rack was cleared. Spares count on the second ball after
/// a non-strike, or on the third after a strike and a non-strike second.
pub fn get_game_statistics(frames: &[Frame]) -> GameStatistics {
    let mut stats = GameStatistics::default();

    for frame in frames {
        let throws = frame.throws();
        if !frame.is_tenth() {
            if frame.is_strike() {
                stats.strikes += 1;
            } else if throws.len() == 2 {
                if frame.pin_total() == RACK {
                    stats.spares += 1;
                } else {
                    stats.opens += 1;
                }
            }
            continue;
        }

        let first = frame.throw(0);
        let second = frame.throw(1);
        let third = frame.throw(2);

        let first_strike = first == Some(PIN_COUNT);
        if first_strike {
            stats.strikes += 1;
        }

        let mut mark_in_first_two = first_strike;
        let mut third_on_fresh_rack = false;
        if let Some(second) = second {
            if first_strike {
                if second == PIN_COUNT {
                    stats.strikes += 1;
                    third_on_fresh_rack = true;
                }
            } else if pins(first) + u16::from(second) == RACK {
                stats.spares += 1;
                mark_in_first_two = true;
                third_on_fresh_rack = true;
            }
        }

        if let (Some(second), Some(third)) = (second, third) {
            if third_on_fresh_rack {
                if third == PIN_COUNT {
                    stats.strikes += 1;
                }
            } else if first_strike && u16::from(second) + u16::from(third) == RACK {
                stats.spares += 1;
            }
        }

        if !mark_in_first_two && is_frame_complete(throws, frame.frame_number()) {
            stats.opens += 1;
        }
    }

    stats
}

/// Build a scored game from a flat list of pin counts, frame by frame.
///
/// This is the count-only entry path: no pin identities are known.
pub fn frames_from_rolls(rolls: &[u8]) -> Result<Game, ScoreError> {
    let mut game = create_empty_game();
    let mut frame_number = 1u8;

    for (index, &count) in rolls.iter().enumerate() {
        if count > PIN_COUNT {
            return Err(ScoreError::InvalidPinCount { index, pins: count });
        }
        let Some(frame) = game.frame_mut(frame_number) else {
            return Err(ScoreError::TooManyRolls { index });
        };

        let max = max_pins_for_throw(frame.throws(), frame_number);
        if count > max {
            return Err(ScoreError::TooManyPins {
                index,
                frame: frame_number,
                pins: count,
                max,
            });
        }

        let next_index = frame.throws().len();
        frame.set_throw(next_index, count);
        if is_frame_complete(frame.throws(), frame_number) {
            frame_number += 1;
        }
    }

    game.rescore();
    Ok(game)
}
