//! Twin Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benches can write `twin_tetris::{core,input,session,term,types}`.

pub use twin_tetris_core as core;
pub use twin_tetris_input as input;
pub use twin_tetris_session as session;
pub use twin_tetris_term as term;
pub use twin_tetris_types as types;
