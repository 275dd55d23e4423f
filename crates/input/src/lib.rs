//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ScoreAction`]. Nothing here
//! knows about sessions; the front-end applies the actions.

pub mod map;

pub use pinfall_types as types;

pub use map::{handle_key_event, should_quit};
