//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! Canonical playfield dimensions:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Piece matrix**: every piece lives in a 4x4 bounding matrix
//! - **Spawn offset**: row 0, horizontally centered (`(cols - 4) / 2`)
//!
//! # Gravity Cadence
//!
//! Gravity is measured in update calls, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_THRESHOLD` | 20 | Updates per gravity step |
//! | `SOFT_DROP_TICK_THRESHOLD` | 3 | Updates per gravity step while soft dropping |
//! | `HARD_DROP_TICK_THRESHOLD` | 1 | Updates per gravity step while hard dropping |
//! | `TICK_MS` | 16 | Driver step interval (~60 updates per second) |
//!
//! # Examples
//!
//! ```
//! use twin_tetris_types::{Intent, Offset, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let intent = Intent::from_str("rotateLeft").unwrap();
//! assert_eq!(intent, Intent::RotateLeft);
//!
//! let spawn = Offset::spawn(DEFAULT_COLS);
//! assert_eq!(spawn, Offset::new(0, 3));
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Canonical number of grid rows
pub const DEFAULT_ROWS: usize = 20;

/// Canonical number of grid columns
pub const DEFAULT_COLS: usize = 10;

/// Side length of the square matrix every piece occupies
pub const PIECE_SIZE: usize = 4;

/// Largest accepted grid side; keeps terminal coordinates within `u16`
pub const MAX_GRID_SIZE: usize = 1024;

/// Fixed driver step in milliseconds (16ms ≈ 60 updates per second)
pub const TICK_MS: u32 = 16;

/// Updates between gravity steps with no drop intent held
pub const DEFAULT_TICK_THRESHOLD: u32 = 20;

/// Updates between gravity steps while soft drop is held
pub const SOFT_DROP_TICK_THRESHOLD: u32 = 3;

/// Updates between gravity steps while hard drop is held
pub const HARD_DROP_TICK_THRESHOLD: u32 = 1;

/// Line clear points by number of rows cleared in a single lock
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a distinct shape and display color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// Every kind, in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }

    /// Display color of tiles produced by this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 240, 240),
            PieceKind::J => Rgb::new(0, 0, 240),
            PieceKind::L => Rgb::new(240, 160, 0),
            PieceKind::O => Rgb::new(240, 240, 0),
            PieceKind::S => Rgb::new(0, 240, 0),
            PieceKind::Z => Rgb::new(240, 0, 0),
            PieceKind::T => Rgb::new(160, 0, 240),
        }
    }

    /// The tile this kind burns into the grid when it locks
    pub fn tile(&self) -> Tile {
        Tile::new(self.color())
    }
}

/// A colored unit cell
///
/// Tiles are immutable once created; the color is a display attribute and
/// plays no part in game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    color: Rgb,
}

impl Tile {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Locked cell
pub type Cell = Option<Tile>;

/// Placement of a piece matrix's top-left corner on the grid
///
/// Rows grow downward, columns grow rightward. Signed so that a candidate
/// placement left of column 0 can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Offset {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Spawn placement for a grid with `cols` columns: top row, centered
    pub fn spawn(cols: usize) -> Self {
        let col = cols.saturating_sub(PIECE_SIZE) / 2;
        Self::new(0, col as i32)
    }

    /// This offset shifted by `(row_delta, col_delta)`
    pub fn shifted(&self, row_delta: i32, col_delta: i32) -> Self {
        Self::new(self.row + row_delta, self.col + col_delta)
    }
}

/// Named intents a controller can set or clear on an engine
///
/// Move and rotate intents are flags consumed by the engine's update.
/// Drop intents change the gravity cadence while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece 90° counter-clockwise
    RotateLeft,
    /// Rotate the active piece 90° clockwise
    RotateRight,
    /// Lower the gravity threshold to the soft drop cadence
    SoftDrop,
    /// Lower the gravity threshold to the hard drop cadence
    HardDrop,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("harddrop"), Some(Intent::HardDrop));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "rotateleft" => Some(Intent::RotateLeft),
            "rotateright" => Some(Intent::RotateRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::RotateLeft => "rotateLeft",
            Intent::RotateRight => "rotateRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
        }
    }

    /// Whether the intent is held (level-triggered) rather than consumed
    pub fn is_held(&self) -> bool {
        !matches!(self, Intent::RotateLeft | Intent::RotateRight)
    }
}
