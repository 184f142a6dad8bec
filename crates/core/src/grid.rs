//! Grid module - the playing field of locked cells
//!
//! The grid is `rows x cols` cells, each either empty or holding a locked tile.
//! Uses a flat row-major vector; the dimensions are fixed at construction and
//! only cell occupancy changes afterwards (locking and line clearing).
//! Coordinates: `(row, col)` where row 0 is the top and col 0 is the left edge.

use crate::config::{validate_dimensions, ConfigError};
use crate::pieces::{occupied_cells, Shape};
use crate::types::{Cell, Offset, Tile};

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds a locked tile
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Check if a row holds no tiles
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_none()))
            .unwrap_or(false)
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Indices of every full row, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.rows).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove a row and insert an empty row at the top
    ///
    /// Rows above `row` shift down by one; rows below it are untouched.
    pub fn remove_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }

        let width = self.cols;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows in one pass and return their indices (top to bottom)
    ///
    /// Full rows are collected against the pre-clear grid first, then removed in
    /// increasing order. Removing a row only shifts rows above it, so the
    /// remaining (larger) indices stay valid.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let full = self.full_rows();
        for &row in &full {
            self.remove_row(row);
        }
        full
    }

    /// Write a matrix's occupied cells into the grid at `offset`
    ///
    /// Cells that fall outside the grid are skipped. Returns the number of
    /// cells written.
    pub fn lock(&mut self, shape: &Shape, offset: Offset, tile: Tile) -> usize {
        let mut written = 0;
        for (r, c) in occupied_cells(shape) {
            if self.set(offset.row + r as i32, offset.col + c as i32, Some(tile)) {
                written += 1;
            }
        }
        written
    }

    /// Number of locked cells on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
