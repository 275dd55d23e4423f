use thiserror::Error;

use crate::types::PinSet;

/// Misuse of a scoring session.
///
/// Legal bowling situations never produce one of these; they signal that a
/// front-end asked for something the current position cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game is complete; select a frame to edit it")]
    GameComplete,
    #[error("frame {0} is out of range (1-10)")]
    FrameOutOfRange(u8),
    #[error("frame {frame} cannot be edited before frame {open} is finished")]
    FrameNotReached { frame: u8, open: u8 },
    #[error("throw {throw} of frame {frame} is not offered")]
    ThrowNotOffered { frame: u8, throw: u8 },
    #[error("pins [{pins}] are not standing for frame {frame} throw {throw}")]
    PinsNotAvailable { frame: u8, throw: u8, pins: PinSet },
}

/// Rejected count-only entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("roll {index}: {pins} is not a valid pin count")]
    InvalidPinCount { index: usize, pins: u8 },
    #[error("roll {index}: {pins} pins exceeds the {max} left standing in frame {frame}")]
    TooManyPins {
        index: usize,
        frame: u8,
        pins: u8,
        max: u8,
    },
    #[error("roll {index}: the game is already complete")]
    TooManyRolls { index: usize },
}
