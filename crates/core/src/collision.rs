//! Collision rules - pure legality predicates
//!
//! Each predicate tests a candidate matrix at the current offset shifted by a
//! delta. None of them mutate anything; the engine alone decides what to do
//! with the answers. A move or rotation is legal iff all three are false.

use crate::grid::Grid;
use crate::pieces::{occupied_cells, Shape};
use crate::types::Offset;

/// Grid positions of a matrix's occupied cells at `offset`
fn placed_cells(shape: &Shape, offset: Offset) -> impl Iterator<Item = (i32, i32)> {
    occupied_cells(shape)
        .into_iter()
        .map(move |(r, c)| (offset.row + r as i32, offset.col + c as i32))
}

/// Any occupied cell would sit at or below the floor
///
/// Rows above the top of the grid are never checked; pieces spawn partly
/// above the visible field.
pub fn exceeds_bottom(grid: &Grid, shape: &Shape, offset: Offset, row_delta: i32) -> bool {
    placed_cells(shape, offset.shifted(row_delta, 0)).any(|(row, _)| row >= grid.rows() as i32)
}

/// Any occupied cell would fall outside `[0, cols - 1]`
pub fn exceeds_sides(grid: &Grid, shape: &Shape, offset: Offset, col_delta: i32) -> bool {
    placed_cells(shape, offset.shifted(0, col_delta))
        .any(|(_, col)| col < 0 || col >= grid.cols() as i32)
}

/// Any occupied cell would land on a locked tile
///
/// Positions outside the grid never overlap; the bounds predicates cover them.
pub fn overlaps_locked(grid: &Grid, shape: &Shape, offset: Offset, delta: (i32, i32)) -> bool {
    placed_cells(shape, offset.shifted(delta.0, delta.1))
        .any(|(row, col)| grid.is_occupied(row, col))
}

/// The candidate stays inside the walls and floor and overlaps nothing
pub fn is_legal(grid: &Grid, shape: &Shape, offset: Offset, delta: (i32, i32)) -> bool {
    !exceeds_bottom(grid, shape, offset, delta.0)
        && !exceeds_sides(grid, shape, offset, delta.1)
        && !overlaps_locked(grid, shape, offset, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::canonical_shape;
    use crate::types::PieceKind;

    fn empty_grid() -> Grid {
        Grid::new(20, 10).unwrap()
    }

    #[test]
    fn test_exceeds_bottom_at_floor() {
        let grid = empty_grid();
        // O occupies matrix rows 1 and 2; at offset row 17 its lowest cell is row 19.
        let o = canonical_shape(PieceKind::O);
        assert!(!exceeds_bottom(&grid, o, Offset::new(17, 3), 0));
        assert!(exceeds_bottom(&grid, o, Offset::new(17, 3), 1));
    }

    #[test]
    fn test_exceeds_bottom_ignores_rows_above_top() {
        let grid = empty_grid();
        let o = canonical_shape(PieceKind::O);
        assert!(!exceeds_bottom(&grid, o, Offset::new(-3, 3), 0));
    }

    #[test]
    fn test_exceeds_sides() {
        let grid = empty_grid();
        // I spans matrix columns 0..=3.
        let i = canonical_shape(PieceKind::I);
        assert!(!exceeds_sides(&grid, i, Offset::new(0, 0), 0));
        assert!(exceeds_sides(&grid, i, Offset::new(0, 0), -1));
        assert!(!exceeds_sides(&grid, i, Offset::new(0, 6), 0));
        assert!(exceeds_sides(&grid, i, Offset::new(0, 6), 1));
    }

    #[test]
    fn test_empty_columns_of_the_matrix_may_hang_outside() {
        let grid = empty_grid();
        // O leaves matrix column 0 empty, so offset column -1 is still inside.
        let o = canonical_shape(PieceKind::O);
        assert!(!exceeds_sides(&grid, o, Offset::new(0, -1), 0));
        assert!(exceeds_sides(&grid, o, Offset::new(0, -1), -1));
    }

    #[test]
    fn test_overlaps_locked() {
        let mut grid = empty_grid();
        let o = canonical_shape(PieceKind::O);
        grid.set(5, 4, Some(PieceKind::T.tile()));

        assert!(!overlaps_locked(&grid, o, Offset::new(0, 3), (0, 0)));
        // Cell (1,1) of the matrix lands on (5,4) at offset (4,3).
        assert!(overlaps_locked(&grid, o, Offset::new(3, 3), (1, 0)));
        assert!(!overlaps_locked(&grid, o, Offset::new(3, 3), (1, 2)));
    }

    #[test]
    fn test_overlaps_locked_is_false_on_empty_grid() {
        let grid = empty_grid();
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            for row in -2..20 {
                for col in -2..10 {
                    assert!(!overlaps_locked(&grid, shape, Offset::new(row, col), (0, 0)));
                }
            }
        }
    }

    #[test]
    fn test_is_legal_combines_all_three() {
        let mut grid = empty_grid();
        let t = canonical_shape(PieceKind::T);
        assert!(is_legal(&grid, t, Offset::new(0, 3), (0, 0)));
        assert!(!is_legal(&grid, t, Offset::new(17, 3), (1, 0)));
        assert!(!is_legal(&grid, t, Offset::new(0, 6), (0, 1)));

        grid.set(3, 5, Some(PieceKind::I.tile()));
        assert!(!is_legal(&grid, t, Offset::new(0, 3), (1, 0)));
    }
}
