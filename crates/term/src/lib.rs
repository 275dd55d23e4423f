//! Terminal scorecard renderer.
//!
//! The view draws a [`core::SessionSnapshot`] into a framebuffer of styled
//! cells with no I/O; the renderer flushes that framebuffer to a terminal,
//! redrawing only the cells that changed.

pub mod fb;
pub mod renderer;
pub mod scorecard_view;

pub use pinfall_core as core;
pub use pinfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scorecard_view::{ScorecardView, Viewport};
