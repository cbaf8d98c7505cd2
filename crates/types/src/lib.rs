//! Shared types and constants for the isotris workspace.
//!
//! Pure data structures with no external dependencies, usable from the
//! simulation core, the renderer, and the input layer alike.
//!
//! # Board Dimensions
//!
//! The playfield is 10 columns by 24 rows. The top 4 rows are hidden spawn
//! headroom; only the bottom 20 rows are drawn.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 24 rows (indexed 0-23), rows 0-3 hidden
//! - **Spawn anchor**: (3, 0), inside the hidden rows for every shape
//!
//! # Cells and Colors
//!
//! A board cell is a `u8` color index. 0 means empty; 1..=7 are palette ids,
//! one per tetromino kind in enum order (I=1 .. L=7). The palette RGB values
//! live in the terminal rendering crate.
//!
//! # Examples
//!
//! ```
//! use isotris_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 24);
//!
//! // Each kind maps to a distinct nonzero color index.
//! assert_eq!(PieceKind::I.color_index(), 1);
//! assert_eq!(PieceKind::L.color_index(), 7);
//!
//! // Rotation advances clockwise and cycles.
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Total board height in cells (24 rows, hidden headroom included)
pub const BOARD_HEIGHT: u8 = 24;

/// Hidden rows above the visible playfield, used as spawn headroom
pub const HIDDEN_ROWS: u8 = 4;

/// Visible playfield height (20 rows)
pub const VISIBLE_ROWS: u8 = BOARD_HEIGHT - HIDDEN_ROWS;

/// Gravity tick interval in milliseconds
pub const TICK_MS: u64 = 200;

/// Side length of the next-piece preview bounding box (4x4 cells)
pub const PREVIEW_BOX: u8 = 4;

/// Spawn anchor column (shape-independent, top-center)
pub const SPAWN_COL: i8 = 3;

/// Spawn anchor row (inside the hidden headroom)
pub const SPAWN_ROW: i8 = 0;

/// Number of distinct cell values (0 = empty plus 7 piece colors)
pub const PALETTE_SIZE: u8 = 8;

/// Points awarded for clearing N rows with a single lock.
///
/// Indexed by rows cleared (0-4). Multi-line clears are rewarded
/// super-linearly: a quadruple is worth far more than four singles.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// Enum order defines the color index: I=1, O=2, T=3, S=4, Z=5, J=6, L=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds in enum order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Nonzero cell color index for this kind (1..=7).
    ///
    /// # Examples
    ///
    /// ```
    /// use isotris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_index(), 1);
    /// assert_eq!(PieceKind::T.color_index(), 3);
    /// ```
    pub fn color_index(self) -> u8 {
        self as u8 + 1
    }

    /// Kind for an index in `0..7`, `None` otherwise.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Discrete rotation states, advancing clockwise.
///
/// The cycle goes: North → East → South → West → North.
/// Shapes with rotational symmetry simply repeat offsets across states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°).
    ///
    /// # Examples
    ///
    /// ```
    /// use isotris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Engine lifecycle phase.
///
/// `start` is the only way into `Playing`; game over is a one-way
/// transition out of it, undone only by the next `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-start; only `start` is accepted.
    Ready,
    /// Piece falling; all commands accepted.
    Playing,
    /// Terminal until `start`.
    GameOver,
}

/// Player commands dispatched by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece one row immediately
    SoftDrop,
    /// Start a new game (Ready or GameOver only)
    Start,
}
