//! Piece module - tetromino shapes and the falling piece
//!
//! The seven shapes and their four rotation states live in one `const`
//! lookup table of cell offsets; there is no per-shape logic anywhere else.
//!
//! Rotation is strictly in place: the next state either fits where the
//! piece stands or the rotation fails. No wall-kick offsets are tried.

use crate::board::Board;
use crate::types::{PieceKind, Rotation, SPAWN_COL, SPAWN_ROW};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Shape table indexed by kind (enum order) and rotation (N, E, S, W).
///
/// Offsets stay inside a 4x4 box so the same data drives the next-piece
/// preview. The O shape repeats one state; everything else has four.
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Cell offsets for a kind and rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind as usize][rotation as usize]
}

/// The falling tetromino: kind, rotation state, and anchor position.
///
/// Every mutation is validated against the board before it commits; a
/// rejected mutation leaves the piece exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// New piece of `kind` at the fixed spawn anchor, default rotation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }

    /// Cell color index for this piece's kind.
    pub fn color(&self) -> u8 {
        self.kind.color_index()
    }

    /// Absolute board cells occupied by the piece.
    pub fn cells(&self) -> [(i8, i8); 4] {
        shape(self.kind, self.rotation).map(|(dc, dr)| (self.col + dc, self.row + dr))
    }

    /// Whether every cell of the candidate placement is open on the board
    fn fits(kind: PieceKind, rotation: Rotation, col: i8, row: i8, board: &Board) -> bool {
        shape(kind, rotation)
            .iter()
            .all(|&(dc, dr)| board.is_open(i32::from(col + dc), i32::from(row + dr)))
    }

    /// Translate by (d_col, d_row) if the destination is fully open.
    ///
    /// Returns true on commit; a blocked move leaves the piece unchanged.
    pub fn try_move(&mut self, d_col: i8, d_row: i8, board: &Board) -> bool {
        let (col, row) = (self.col + d_col, self.row + d_row);
        if !Self::fits(self.kind, self.rotation, col, row, board) {
            return false;
        }
        self.col = col;
        self.row = row;
        true
    }

    /// Advance to the next clockwise rotation state if it fits in place.
    ///
    /// Returns true on commit; a blocked rotation leaves the state unchanged.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotation = self.rotation.rotate_cw();
        if !Self::fits(self.kind, rotation, self.col, self.row, board) {
            return false;
        }
        self.rotation = rotation;
        true
    }
}
