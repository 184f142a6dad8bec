//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule. It has no dependency on the terminal,
//! the keyboard or the clock, so the same engine runs headless in tests,
//! behind the terminal renderer, or twice side by side in two-player mode.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 4x4 piece matrices and 90° matrix rotation
//! - [`rng`]: seedable LCG and piece generation policies (uniform, 7-bag, scripted)
//! - [`grid`]: the fixed-size field of locked cells and line clearing
//! - [`collision`]: pure legality predicates (floor, walls, locked cells)
//! - [`engine`]: per-step update protocol, intents, locking and game over
//! - [`scoring`]: placeholder points per line clear
//! - [`snapshot`]: read-only engine copies for renderers
//! - [`config`]: engine configuration and construction errors
//!
//! # Game Rules
//!
//! - **No wall kicks**: a rotation is the plain matrix transform or nothing; a
//!   rejected rotation stays pending and is retried every update
//! - **Gravity by step count**: one row every 20 updates, every 3 while soft
//!   dropping, every update while hard dropping
//! - **Instant lock**: a piece that cannot move down locks on the gravity step
//! - **Game over**: the piece spawned after a lock (and its line clear)
//!   overlaps the field
//!
//! # Example
//!
//! ```
//! use twin_tetris_core::Engine;
//! use twin_tetris_types::{Intent, Offset};
//!
//! let mut engine = Engine::new(20, 10).unwrap();
//! engine.set_intent(Intent::MoveLeft, true);
//! engine.update();
//! assert_eq!(engine.offset(), Offset::new(0, 2));
//!
//! engine.set_intent(Intent::MoveLeft, false);
//! for _ in 0..19 {
//!     engine.update();
//! }
//! assert_eq!(engine.offset(), Offset::new(1, 2));
//! ```

pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use twin_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::{exceeds_bottom, exceeds_sides, is_legal, overlaps_locked};
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, Intents, LockEvent};
pub use grid::Grid;
pub use pieces::{canonical_shape, rotate_left, rotate_right, Piece, Shape};
pub use rng::{
    BagSource, PieceGenerator, PieceSource, Randomizer, SequenceSource, SimpleRng, UniformSource,
};
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, EngineSnapshot, NextSnapshot};
