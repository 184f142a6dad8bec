//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::Intent`]s for one or two
//! players, and tracks held keys so that terminals without key-release events
//! still release intents (via a timeout).

pub mod handler;
pub mod map;

pub use twin_tetris_types as types;

pub use handler::{IntentChange, IntentChanges, IntentHandler};
pub use map::{is_back, map_key, should_quit, KeyLayout, Player};
