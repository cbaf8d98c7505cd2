//! Core game simulation - pure, deterministic, and testable
//!
//! This crate contains all game rules and state. It has **zero dependencies**
//! on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the identical piece sequence
//! - **Testable**: every rule is exercisable without a terminal
//! - **Portable**: runs anywhere the renderer or a headless driver calls it
//!
//! # Module Structure
//!
//! - [`board`]: 10x24 grid with collision queries and line clearing
//! - [`piece`]: tetromino shape table, translation and rotation
//! - [`engine`]: the tick-driven state machine tying everything together
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear reward table
//!
//! # Game Rules
//!
//! This is a deliberately classic rule set:
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw over
//!   the seven kinds (no bag)
//! - **In-place rotation**: a rotation either fits where the piece stands or
//!   fails outright; there is no wall-kick offset search
//! - **Gravity tick**: one row per tick; a blocked piece locks immediately
//! - **Scoring**: classic per-lock line-clear table, no drop bonuses
//!
//! # Example
//!
//! ```
//! use isotris_core::GameEngine;
//!
//! let mut engine = GameEngine::new(12345);
//! engine.start();
//!
//! engine.shift(1);
//! engine.rotate();
//! engine.tick();
//!
//! assert!(!engine.is_game_over());
//! assert_eq!(engine.score(), 0);
//! ```
//!
//! # Driving the engine
//!
//! Call [`GameEngine::tick`] on a fixed cadence (200ms in the shipped
//! runner) and forward player commands between ticks. Every command
//! completes synchronously; there is no internal blocking or timing.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use isotris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::GameEngine;
pub use piece::{shape, Piece};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::line_clear_score;
