//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s and buffers them
//! until the host's next engine tick.

pub mod map;
pub mod queue;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit, KeyCommand};
pub use queue::{IntentQueue, INTENT_QUEUE_CAPACITY};
