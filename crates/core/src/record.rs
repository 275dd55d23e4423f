//! Hand-off record for the persistence layer.
//!
//! Field names are camelCase on the wire:
//! `{ frames: [{ frameNumber, throws, cumulativeScore, isComplete }], totalScore,
//! strikes, spares, opens, createdAt }`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::game::{Frame, Game};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub frame_number: u8,
    pub throws: Vec<u8>,
    pub cumulative_score: Option<u16>,
    pub is_complete: bool,
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_number: frame.frame_number(),
            throws: frame.throws().to_vec(),
            cumulative_score: frame.cumulative_score(),
            is_complete: frame.is_complete(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub frames: Vec<FrameRecord>,
    pub total_score: u16,
    pub strikes: u8,
    pub spares: u8,
    pub opens: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GameRecord {
    /// Record for a finished game. Incomplete games yield `None`; there is
    /// no partial save.
    pub fn from_game(game: &Game, created_at: OffsetDateTime) -> Option<Self> {
        if !game.is_complete() {
            return None;
        }
        let mut scored = game.clone();
        scored.rescore();
        let stats = scored.statistics();
        Some(Self {
            frames: scored.frames().iter().map(FrameRecord::from).collect(),
            total_score: scored.total_score(),
            strikes: stats.strikes,
            spares: stats.spares,
            opens: stats.opens,
            created_at,
        })
    }
}
