//! Scoring module - placeholder line-clear counter
//!
//! Classic points per lock with no level multiplier. Clears of more than four
//! rows only happen on contrived boards; each extra group of four is worth
//! another tetris.

use crate::types::LINE_SCORES;

const TETRIS_LINES: usize = 4;

/// Points awarded for clearing `lines` rows in a single lock
pub fn line_clear_score(lines: usize) -> u32 {
    if lines <= TETRIS_LINES {
        return LINE_SCORES[lines];
    }
    let tetrises = (lines / TETRIS_LINES) as u32;
    let rest = lines % TETRIS_LINES;
    LINE_SCORES[TETRIS_LINES]
        .saturating_mul(tetrises)
        .saturating_add(LINE_SCORES[rest])
}
