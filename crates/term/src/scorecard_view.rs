//! ScorecardView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FrameSnapshot, SessionSnapshot, SplitInfo};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{FRAME_COUNT, PIN_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::new(210, 210, 210), BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), BG).dim();
const CURRENT: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 60, 100)).bold();
const PIN_UP: CellStyle = CellStyle::new(Rgb::new(245, 245, 245), BG).bold();
const PIN_DOWN: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
const PIN_SELECTED: CellStyle = CellStyle::new(Rgb::new(255, 210, 60), Rgb::new(70, 55, 10)).bold();
const SPLIT: CellStyle = CellStyle::new(Rgb::new(240, 120, 90), BG).bold();

/// Columns between neighbouring pins in a row.
const PIN_PITCH: u16 = 4;
const TRIANGLE_W: u16 = 3 * PIN_PITCH + 2;

/// Terminal renderer for a scoring session.
pub struct ScorecardView {
    /// Inner width of frames 1-9.
    box_w: u16,
    /// Inner width of the tenth frame.
    tenth_w: u16,
}

impl Default for ScorecardView {
    fn default() -> Self {
        Self {
            box_w: 5,
            tenth_w: 7,
        }
    }
}

/// Widest frame box; keeps the card well inside `u16` columns.
const MAX_BOX_W: u16 = 20;

const CARD_TOP: u16 = 1;
const TRIANGLE_TOP: u16 = 8;
const STATUS_TOP: u16 = 13;
const LAYOUT_H: u16 = 17;

impl ScorecardView {
    pub fn new(box_w: u16, tenth_w: u16) -> Self {
        Self {
            box_w: box_w.clamp(5, MAX_BOX_W),
            tenth_w: tenth_w.clamp(5, MAX_BOX_W),
        }
    }

    /// Total width of the scorecard including borders.
    pub fn card_width(&self) -> u16 {
        1 + (FRAME_COUNT as u16 - 1) * (self.box_w + 1) + self.tenth_w + 1
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport. Reuse the framebuffer across draws to avoid reallocating.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let card_w = self.card_width();
        let x0 = viewport.width.saturating_sub(card_w) / 2;
        let y0 = viewport.height.saturating_sub(LAYOUT_H) / 2;

        fb.put_str(x0, y0, "PINFALL", LABEL);
        let total_label_x = x0 + card_w.saturating_sub(11);
        let after = fb.put_str(total_label_x, y0, "TOTAL ", LABEL);
        fb.put_u32(after, y0, u32::from(snap.total_score), LABEL);

        self.draw_card(fb, snap, x0, y0 + CARD_TOP);
        self.draw_triangle(fb, snap, x0 + card_w.saturating_sub(TRIANGLE_W) / 2, y0 + TRIANGLE_TOP);
        self.draw_status(fb, snap, x0, y0 + STATUS_TOP);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn inner_width(&self, index: usize) -> u16 {
        if index + 1 == FRAME_COUNT as usize {
            self.tenth_w
        } else {
            self.box_w
        }
    }

    /// Left border column of frame `index`, relative to the card.
    fn box_left(&self, index: usize) -> u16 {
        index as u16 * (self.box_w + 1)
    }

    fn draw_card(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let card_w = self.card_width();
        let last = card_w - 1;

        // Horizontal rules: top, under the frame numbers, bottom.
        for (dy, [left, mid, right]) in [(0, ['┌', '┬', '┐']), (2, ['├', '┼', '┤']), (5, ['└', '┴', '┘'])] {
            for dx in 0..card_w {
                let ch = if dx == 0 {
                    left
                } else if dx == last {
                    right
                } else if self.is_divider(dx) {
                    mid
                } else {
                    '─'
                };
                fb.put_char(x + dx, y + dy, ch, BORDER);
            }
        }
        for dy in [1, 3, 4] {
            for dx in 0..card_w {
                if dx == 0 || dx == last || self.is_divider(dx) {
                    fb.put_char(x + dx, y + dy, '│', BORDER);
                }
            }
        }

        for (i, frame) in snap.frames.iter().enumerate() {
            let inner_x = x + self.box_left(i) + 1;
            let w = self.inner_width(i);
            let is_current = snap.accepting_throws() && usize::from(snap.position.frame) == i + 1;

            let header = if is_current { CURRENT } else { HINT };
            if is_current {
                fb.fill_rect(inner_x, y + 1, w, 1, ' ', CURRENT);
            }
            let num = u32::from(frame.frame_number);
            fb.put_u32(inner_x + centered(w, digit_count(num)), y + 1, num, header);

            self.draw_marks(fb, frame, inner_x, y + 3, w);
            if let Some(total) = frame.cumulative_score {
                let total = u32::from(total);
                fb.put_u32(inner_x + centered(w, digit_count(total)), y + 4, total, TEXT);
            }
        }
    }

    fn is_divider(&self, dx: u16) -> bool {
        (1..FRAME_COUNT as usize).any(|i| self.box_left(i) == dx)
    }

    fn draw_marks(&self, fb: &mut FrameBuffer, frame: &FrameSnapshot, x: u16, y: u16, w: u16) {
        let n = frame.marks.len() as u16;
        if n == 0 {
            return;
        }
        let start = x + centered(w, 2 * n - 1);
        for (i, &mark) in frame.marks.iter().enumerate() {
            let style = if mark == 'X' || mark == '/' { LABEL } else { TEXT };
            fb.put_char(start + 2 * i as u16, y, mark, style);
        }
    }

    /// Back row first, head pin last, as the bowler sees the deck.
    fn draw_triangle(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        for (row, pins) in PIN_ROWS.iter().enumerate() {
            let indent = row as u16 * (PIN_PITCH / 2);
            for (slot, &pin) in pins.iter().enumerate() {
                let style = if snap.selection.contains(pin) {
                    PIN_SELECTED
                } else if snap.standing.contains(pin) {
                    PIN_UP
                } else {
                    PIN_DOWN
                };
                let px = x + indent + slot as u16 * PIN_PITCH;
                fb.put_u32(px, y + row as u16, u32::from(pin), style);
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        if !snap.accepting_throws() {
            let after = fb.put_str(x, y, "GAME COMPLETE  final ", LABEL);
            fb.put_u32(after, y, u32::from(snap.total_score), LABEL);
        } else {
            let mut cx = fb.put_str(x, y, "Frame ", LABEL);
            cx = fb.put_u32(cx, y, u32::from(snap.position.frame), LABEL);
            cx = fb.put_str(cx, y, "  Ball ", LABEL);
            cx = fb.put_u32(cx, y, u32::from(snap.position.throw), LABEL);
            cx = fb.put_str(cx, y, "  Selected ", TEXT);
            cx = fb.put_u32(cx, y, u32::from(snap.selection.len()), TEXT);
            cx = fb.put_str(cx, y, " of ", TEXT);
            fb.put_u32(cx, y, u32::from(snap.standing.len()), TEXT);
        }

        if let Some(split) = &snap.split {
            self.draw_split(fb, split, x, y + 1);
        }

        fb.put_str(
            x,
            y + 3,
            "1-9,0 pins  x all  c clear  enter confirm  \u{2190}/\u{2192} frame  r reset  q quit",
            HINT,
        );
    }

    fn draw_split(&self, fb: &mut FrameBuffer, split: &SplitInfo, x: u16, y: u16) {
        let mut cx = fb.put_str(x, y, &split.name, SPLIT);
        cx = fb.put_str(cx, y, "  ", TEXT);
        cx = fb.put_str(cx, y, split.difficulty.as_str(), TEXT);
        cx = fb.put_str(cx, y, "  ~", TEXT);
        cx = fb.put_u32(cx, y, split.conversion_rate.round() as u32, TEXT);
        fb.put_str(cx, y, "% converted", TEXT);
        fb.put_str(x, y + 1, &split.description, HINT);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Offset that centers `len` columns in `width`, biased left.
fn centered(width: u16, len: u16) -> u16 {
    width.saturating_sub(len) / 2
}
