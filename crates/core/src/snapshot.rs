use crate::pieces::Shape;
use crate::types::{Cell, Offset, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub offset: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

/// Read-only copy of everything a renderer needs from an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Locked cells, row-major
    pub cells: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub running: bool,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl EngineSnapshot {
    /// Locked cell at `(row, col)`, `None` when empty or out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Whether the active piece covers `(row, col)`
    pub fn active_covers(&self, row: i32, col: i32) -> bool {
        let r = row - self.active.offset.row;
        let c = col - self.active.offset.col;
        if r < 0 || c < 0 {
            return false;
        }
        self.active
            .shape
            .get(r as usize)
            .and_then(|line| line.get(c as usize))
            .copied()
            .unwrap_or(false)
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }
}
