//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw engine snapshots into a
//! framebuffer of styled chars, and the renderer flushes only what changed
//! since the previous frame.
//!
//! Goals:
//! - Keep `core` free of any rendering concern
//! - Draw one or two boards side by side from read-only snapshots
//! - 2 chars wide per cell to keep blocks roughly square

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use twin_tetris_core as core;
pub use twin_tetris_types as types;

pub use board_view::{BoardView, MenuView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
