//! Terminal rendering for the isometric playfield.
//!
//! The pipeline is framebuffer-based: the game view projects simulation
//! state into styled character cells, and the renderer diffs consecutive
//! frames against a real terminal. Block graphics are drawn on a half-block
//! pixel grid (two vertical pixels per terminal row via `▀`), which gives
//! the isometric diamonds a workable aspect ratio.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Make the view a pure reader of engine state, testable without a tty
//! - Flush once per frame with coalesced diff runs

pub mod fb;
pub mod game_view;
pub mod iso;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
