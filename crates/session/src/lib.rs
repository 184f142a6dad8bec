//! Session layer: game modes, screens and the state stack.
//!
//! Everything between the engine and the terminal lives here. A [`Game`]
//! owns one engine per player and routes key events to them; [`Screen`]s
//! (menu, running game) sit on an explicitly owned [`StateStack`]; lock
//! events from every engine are gathered into an [`EventLog`] for the driver.

pub mod events;
pub mod mode;
pub mod screen;
pub mod stack;

pub use twin_tetris_core as core;
pub use twin_tetris_input as input;
pub use twin_tetris_types as types;

pub use events::{EventLog, Notice};
pub use mode::{Game, GameMode, PLAYER_TWO_SEED_OFFSET};
pub use screen::{Screen, Transition};
pub use stack::StateStack;
