//! Board module - the settled-cell grid
//!
//! A 10x24 grid of `u8` color indices (0 = empty) in a flat array for cache
//! locality and zero allocation. Coordinates: (col, row) with col 0..9 left
//! to right and row 0..23 top to bottom; rows 0..3 are hidden spawn headroom.
//!
//! All read queries are total over any `i32` input so callers can probe
//! candidate piece positions without bounds checks of their own.

use arrayvec::ArrayVec;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The settled-cell grid - 10 columns x 24 rows of color indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of color indices, row-major order (row * WIDTH + col)
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i32 || row < 0 || row >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Board width in cells
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Board height in cells, hidden rows included
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Color index at (col, row), 0 for empty.
    ///
    /// Out-of-range positions read as 0 so the renderer and speculative
    /// collision probes never need their own bounds checks.
    pub fn cell(&self, col: i32, row: i32) -> u8 {
        Self::index(col, row).map_or(0, |i| self.cells[i])
    }

    /// Write a color index at (col, row). Returns false if out of range.
    pub fn set(&mut self, col: i32, row: i32, value: u8) -> bool {
        match Self::index(col, row) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Whether (col, row) blocks a falling piece.
    ///
    /// True iff col is within horizontal bounds, row >= 0, and either the
    /// row is past the bottom (the floor) or the cell holds a settled block.
    /// Positions above the top row never block; positions outside the side
    /// walls are neither occupied nor open.
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i32 || row < 0 {
            return false;
        }
        if row >= BOARD_HEIGHT as i32 {
            return true;
        }
        self.cell(col, row) != 0
    }

    /// Whether a piece cell may stand at (col, row).
    ///
    /// The single validity rule for every translation and rotation: inside
    /// the side walls and not occupied. Headroom above row 0 is open.
    pub fn is_open(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_WIDTH as i32 && !self.is_occupied(col, row)
    }

    /// Write `color` into each of the given cells.
    ///
    /// Callers must have validated the cells as in-bounds and empty via
    /// `is_open`; a violation is a caller bug upstream, not a runtime error.
    pub fn settle(&mut self, cells: &[(i8, i8)], color: u8) {
        for &(col, row) in cells {
            let (col, row) = (i32::from(col), i32::from(row));
            debug_assert!(
                Self::index(col, row).is_some_and(|i| self.cells[i] == 0),
                "settle on non-empty or out-of-range cell ({col}, {row})"
            );
            self.set(col, row, color);
        }
    }

    /// Check if a row has no empty cells
    fn is_row_full(&self, row: usize) -> bool {
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Remove every full row, compacting rows above downward and inserting
    /// empty rows at the top.
    ///
    /// Returns the cleared row indices, bottom to top. At most 4 rows can be
    /// completed by a single locked piece, so the result is bounded.
    /// Uses a two-pointer scan with `copy_within`, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Rows that opened up at the top become empty.
        self.cells[..write_row * width].fill(0);

        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// The raw cell array, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
