//! Bowling scoring engine - pure, deterministic, and testable
//!
//! This crate holds the rules of ten-pin scoring and the state machine for
//! entering a game pin by pin. It has no dependencies on terminals, storage,
//! or networking.
//!
//! # Module Structure
//!
//! - [`game`]: frames and the ten-frame game
//! - [`scoring`]: cumulative scores, completion rules, statistics
//! - [`session`]: pin-by-pin entry, editing, and position tracking
//! - [`splits`]: split detection and the named-split catalog
//! - [`notation`]: `X` / `/` / `-` marks and a plain-text scorecard
//! - [`record`]: the serializable record of a finished game
//! - [`snapshot`]: a render-ready copy of session state
//!
//! # Scoring rules
//!
//! - **Strike**: 10 plus the next two balls bowled
//! - **Spare**: 10 plus the next ball bowled
//! - **Open**: pins knocked down
//! - **Tenth frame**: the sum of its own balls, up to three
//!
//! # Example
//!
//! ```
//! use pinfall_core::scoring::frames_from_rolls;
//!
//! let game = frames_from_rolls(&[10; 12]).unwrap();
//! assert!(game.is_complete());
//! assert_eq!(game.total_score(), 300);
//! ```

pub mod error;
pub mod game;
pub mod notation;
pub mod record;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod splits;

#[cfg(test)]
pub(crate) mod test_support;

pub use pinfall_types as types;

pub use error::{ScoreError, SessionError};
pub use game::{create_empty_game, Frame, Game};
pub use notation::{format_scorecard, frame_marks};
pub use record::{FrameRecord, GameRecord};
pub use scoring::{
    calculate_game_score, frames_from_rolls, get_game_statistics, is_frame_complete,
    is_game_complete, max_pins_for_throw, GameStatistics,
};
pub use session::{Session, ThrowOutcome};
pub use snapshot::{FrameSnapshot, SessionSnapshot};
pub use splits::{analyze_split_from_pins, is_split, lookup_split, split_catalog, SplitInfo};
