use arrayvec::ArrayVec;

use crate::splits::SplitInfo;
use crate::types::{PinSet, ThrowPosition, FRAME_COUNT};

/// One scorecard box as the view draws it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSnapshot {
    pub frame_number: u8,
    pub marks: ArrayVec<char, 3>,
    /// Running total, present once the frame has a throw.
    pub cumulative_score: Option<u16>,
    pub is_complete: bool,
}

/// Everything a front-end needs to draw a session, with no reference back
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT as usize],
    pub position: ThrowPosition,
    pub selection: PinSet,
    pub standing: PinSet,
    pub done: bool,
    pub total_score: u16,
    pub split: Option<SplitInfo>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        for (i, frame) in self.frames.iter_mut().enumerate() {
            *frame = FrameSnapshot {
                frame_number: i as u8 + 1,
                ..FrameSnapshot::default()
            };
        }
        self.position = ThrowPosition::start();
        self.selection = PinSet::empty();
        self.standing = PinSet::full_rack();
        self.done = false;
        self.total_score = 0;
        self.split = None;
    }

    /// A throw can still be entered.
    pub fn accepting_throws(&self) -> bool {
        !self.done
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            frames: std::array::from_fn(|_| FrameSnapshot::default()),
            position: ThrowPosition::start(),
            selection: PinSet::empty(),
            standing: PinSet::full_rack(),
            done: false,
            total_score: 0,
            split: None,
        };
        s.clear();
        s
    }
}
