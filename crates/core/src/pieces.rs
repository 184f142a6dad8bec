//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every piece lives in a 4x4 occupancy matrix. The catalog holds the canonical
//! (spawn) matrix of each kind as constant data; a [`Piece`] in play owns its own
//! copy and replaces it wholesale when it rotates.
//!
//! Rotation is a plain 90° transform of the whole matrix about its center (no
//! wall kicks), so four turns in the same direction always return the starting matrix.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Tile, PIECE_SIZE};

/// 4x4 occupancy matrix, indexed `[row][col]`
pub type Shape = [[bool; PIECE_SIZE]; PIECE_SIZE];

/// Occupied `(row, col)` positions inside a matrix (at most 16)
pub type ShapeCells = ArrayVec<(usize, usize), { PIECE_SIZE * PIECE_SIZE }>;

const fn shape_from(cells: [(usize, usize); 4]) -> Shape {
    let mut shape = [[false; PIECE_SIZE]; PIECE_SIZE];
    let mut i = 0;
    while i < cells.len() {
        shape[cells[i].0][cells[i].1] = true;
        i += 1;
    }
    shape
}

const I_SHAPE: Shape = shape_from([(1, 0), (1, 1), (1, 2), (1, 3)]);
const J_SHAPE: Shape = shape_from([(0, 2), (1, 2), (2, 1), (2, 2)]);
const L_SHAPE: Shape = shape_from([(0, 1), (1, 1), (2, 1), (2, 2)]);
const O_SHAPE: Shape = shape_from([(1, 1), (1, 2), (2, 1), (2, 2)]);
const S_SHAPE: Shape = shape_from([(1, 2), (1, 3), (2, 1), (2, 2)]);
const Z_SHAPE: Shape = shape_from([(1, 0), (1, 1), (2, 1), (2, 2)]);
const T_SHAPE: Shape = shape_from([(1, 2), (2, 1), (2, 2), (2, 3)]);

/// Canonical spawn matrix for a piece kind
pub fn canonical_shape(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::I => &I_SHAPE,
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
        PieceKind::O => &O_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::T => &T_SHAPE,
    }
}

/// Rotate a matrix 90° counter-clockwise
pub fn rotate_left(shape: &Shape) -> Shape {
    let n = PIECE_SIZE;
    let mut out = [[false; PIECE_SIZE]; PIECE_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = shape[j][n - 1 - i];
        }
    }
    out
}

/// Rotate a matrix 90° clockwise
pub fn rotate_right(shape: &Shape) -> Shape {
    let n = PIECE_SIZE;
    let mut out = [[false; PIECE_SIZE]; PIECE_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = shape[n - 1 - j][i];
        }
    }
    out
}

/// Occupied cells of a matrix in row-major order
pub fn occupied_cells(shape: &Shape) -> ShapeCells {
    let mut cells = ShapeCells::new();
    for (r, row) in shape.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// A piece in play: its kind and its current matrix
///
/// Position is tracked by the owning engine, not by the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
}

impl Piece {
    /// Create a piece holding its own copy of the kind's canonical matrix
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: *canonical_shape(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Tile burned into the grid when this piece locks
    pub fn tile(&self) -> Tile {
        self.kind.tile()
    }

    pub fn cells(&self) -> ShapeCells {
        occupied_cells(&self.shape)
    }

    /// Candidate matrix after a counter-clockwise turn (the piece is unchanged)
    pub fn rotated_left(&self) -> Shape {
        rotate_left(&self.shape)
    }

    /// Candidate matrix after a clockwise turn (the piece is unchanged)
    pub fn rotated_right(&self) -> Shape {
        rotate_right(&self.shape)
    }

    /// Replace the current matrix with an accepted candidate
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}
