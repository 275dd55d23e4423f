//! Scorecard notation: `X` strike, `/` spare, `-` miss, digits otherwise.

use std::fmt::Write as _;

use arrayvec::ArrayVec;

use crate::game::{Frame, Game};
use crate::types::PIN_COUNT;

fn count_mark(pins: u8) -> char {
    match pins {
        0 => '-',
        // Counts are 0-9 here; 10 is always written as a strike or spare.
        n => char::from_digit(u32::from(n), 10).unwrap_or('?'),
    }
}

/// Marks for each recorded throw of a frame.
///
/// Tenth-frame throws are marked against the rack they were bowled at, so
/// `[10, 4, 6]` reads `X 4 /`.
pub fn frame_marks(frame: &Frame) -> ArrayVec<char, 3> {
    let mut marks = ArrayVec::new();
    // Pins already down on the rack currently set; `None` means a fresh rack.
    let mut on_rack: Option<u8> = None;

    for &pins in frame.throws() {
        let mark = match on_rack {
            None if pins == PIN_COUNT => 'X',
            None => {
                on_rack = Some(pins);
                count_mark(pins)
            }
            Some(down) => {
                on_rack = None;
                if u16::from(down) + u16::from(pins) == u16::from(PIN_COUNT) {
                    '/'
                } else {
                    count_mark(pins)
                }
            }
        };
        // ArrayVec capacity equals the maximum throws per frame.
        let _ = marks.try_push(mark);
    }

    marks
}

/// Plain-text scorecard: a marks row and a running-total row.
///
/// Running totals are shown only for frames with at least one throw.
pub fn format_scorecard(game: &Game) -> String {
    let mut header = String::new();
    let mut marks_row = String::new();
    let mut totals_row = String::new();

    for frame in game.frames() {
        let width = if frame.is_tenth() { 7 } else { 5 };
        let marks: String = frame_marks(frame)
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let total = frame
            .cumulative_score()
            .filter(|_| frame.has_throws())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let _ = write!(header, "|{:^width$}", frame.frame_number());
        let _ = write!(marks_row, "|{marks:^width$}");
        let _ = write!(totals_row, "|{total:^width$}");
    }

    format!("{header}|\n{marks_row}|\n{totals_row}|\n")
}
