//! Key mapping from terminal events to scoring actions.
//!
//! The number row follows the pin numbers, with `0` standing in for the 10
//! pin.

use crate::types::ScoreAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to scoring actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ScoreAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Pins
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| ScoreAction::TogglePin(d as u8)),
        KeyCode::Char('0') => Some(ScoreAction::TogglePin(10)),

        // Selection
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('/') => {
            Some(ScoreAction::SelectAll)
        }
        KeyCode::Backspace | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(ScoreAction::ClearSelection)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(ScoreAction::Confirm),

        // Frame navigation
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(ScoreAction::PrevFrame),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(ScoreAction::NextFrame),

        // Reset
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScoreAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
