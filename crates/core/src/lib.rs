//! Core game logic - pure, deterministic, and testable
//!
//! Everything a falling-block session needs lives here: the board, the piece
//! catalog, piece sources, scoring, the speed ramp and the [`Engine`] that
//! drives them. Nothing in this crate touches the terminal or the clock; hosts
//! pass elapsed time and intents into [`Engine::tick`].
//!
//! # Module Structure
//!
//! - [`board`]: locked cells, free-cell test and line clearing
//! - [`pieces`]: the seven shapes and their rotation states
//! - [`piece`]: a placed piece and the placement validity rule
//! - [`rng`]: piece sources (seeded random, fixed sequence)
//! - [`scoring`]: line-clear points and the time-based speed ramp
//! - [`config`]: tuning parameters and their validation
//! - [`engine`]: the session state machine
//! - [`snapshot`]: read-only render state
//!
//! # Rules
//!
//! - Pieces spawn with their anchor at (board width / 2, row 0), mostly above
//!   the visible board.
//! - Rotation is a single state step at the same anchor. No wall kicks.
//! - Soft drop moves one row and never locks; only gravity locks a piece.
//! - Every cleared row scores the same, regardless of how many clear at once.
//! - Every 5 seconds of play the fall interval shrinks by 5ms, down to 150ms.
//! - A locked cell on row 0 ends the session.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Engine, EngineConfig, FixedSequence};
//! use tui_blockfall_types::{Intent, ShapeId};
//!
//! let mut engine =
//!     Engine::with_source(EngineConfig::default(), FixedSequence::repeat(ShapeId::O)).unwrap();
//!
//! engine.tick(16, &[Intent::MoveLeft, Intent::SoftDrop]);
//!
//! let active = engine.active().unwrap();
//! assert_eq!((active.x, active.y), (4, 1));
//! assert_eq!(engine.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, LockEvent, Phase};
pub use piece::{is_valid, Piece};
pub use pieces::{get_shape, rotation_count};
pub use rng::{FixedSequence, PieceSource, RandomPieces, SimpleRng};
pub use scoring::{line_clear_points, SpeedRamp};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
