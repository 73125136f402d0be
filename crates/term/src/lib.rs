//! Terminal rendering for gameplay.
//!
//! A small game-oriented layer: [`GameView`] draws a snapshot into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes frames
//! to the terminal through crossterm, redrawing only what changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
