//! Engine module - the tick-driven game state machine
//!
//! Owns the board, the falling piece, the preview piece, the score, and the
//! lifecycle phase. Commands either succeed, are silently rejected, or drive
//! a state transition (lock, game over); there are no recoverable errors.
//!
//! The engine does no timing of its own. The runner fires [`GameEngine::tick`]
//! on a fixed cadence and forwards player commands between ticks; because
//! both arrive on one thread, reads between dispatches are consistent by
//! construction.

use log::{debug, info};

use crate::board::Board;
use crate::piece::{shape, Piece};
use crate::rng::PieceRng;
use crate::scoring::line_clear_score;
use crate::types::{Phase, PieceKind, Rotation, PREVIEW_BOX};

/// The game simulation: board, falling piece, preview, score, and phase.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    /// The falling piece. Absent in `Ready` and after a blocked spawn.
    current: Option<Piece>,
    /// Generated one lock ahead of play, promoted to `current` on lock.
    preview: Piece,
    rng: PieceRng,
    score: u32,
    phase: Phase,
}

impl GameEngine {
    /// Create an engine in `Ready` with the given RNG seed.
    ///
    /// The same seed reproduces the identical piece sequence.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let preview = Piece::spawn(rng.next_kind());
        Self {
            board: Board::new(),
            current: None,
            preview,
            rng,
            score: 0,
            phase: Phase::Ready,
        }
    }

    /// Begin a new game.
    ///
    /// The only transition into `Playing`. Resets the score, empties the
    /// board, and spawns a fresh falling piece and a fresh preview. Ignored
    /// while a game is already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Playing {
            return;
        }
        self.board.clear();
        self.score = 0;
        self.current = Some(Piece::spawn(self.rng.next_kind()));
        self.preview = Piece::spawn(self.rng.next_kind());
        self.phase = Phase::Playing;
        info!("game started");
    }

    /// Move the falling piece one column left (-1) or right (+1).
    ///
    /// A blocked move is silently rejected; returns whether it committed.
    pub fn shift(&mut self, dir: i8) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.try_move(dir.signum(), 0, &self.board),
            None => false,
        }
    }

    /// Rotate the falling piece clockwise, in place.
    ///
    /// A blocked rotation is silently rejected; returns whether it committed.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.try_rotate(&self.board),
            None => false,
        }
    }

    /// Player-accelerated descent: one immediate gravity step.
    pub fn soft_drop(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.gravity_step();
    }

    /// The gravity heartbeat, driven on a fixed external cadence.
    ///
    /// Moves the piece down one row, or locks it when blocked: the piece
    /// settles into the board, full rows clear and score, the preview is
    /// promoted, and a blocked spawn ends the game.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.gravity_step();
    }

    fn gravity_step(&mut self) {
        let Some(mut piece) = self.current else {
            return;
        };

        if piece.try_move(0, 1, &self.board) {
            self.current = Some(piece);
            return;
        }

        // Blocked by the floor or settled cells: lock in place.
        self.board.settle(&piece.cells(), piece.color());
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            let points = line_clear_score(cleared.len());
            self.score = self.score.saturating_add(points);
            debug!(
                "locked {:?}, cleared {} row(s) for {points}, score {}",
                piece.kind,
                cleared.len(),
                self.score
            );
        } else {
            debug!("locked {:?} at ({}, {})", piece.kind, piece.col, piece.row);
        }

        // Promote the preview and draw its replacement. A spawn that
        // already overlaps settled cells is unplayable; the engine ends
        // the game rather than force-locking it.
        let next = self.preview;
        self.preview = Piece::spawn(self.rng.next_kind());
        let blocked = next
            .cells()
            .iter()
            .any(|&(col, row)| self.board.is_occupied(i32::from(col), i32::from(row)));
        if blocked {
            self.current = None;
            self.phase = Phase::GameOver;
            info!("game over, final score {}", self.score);
        } else {
            self.current = Some(next);
        }
    }

    /// Color index at (col, row): settled cells with the falling piece
    /// overlaid, 0 for empty or out-of-range positions.
    pub fn cell_value(&self, col: i32, row: i32) -> u8 {
        let settled = self.board.cell(col, row);
        if settled != 0 {
            return settled;
        }
        if let Some(piece) = self.current {
            let hit = piece
                .cells()
                .iter()
                .any(|&(c, r)| i32::from(c) == col && i32::from(r) == row);
            if hit {
                return piece.color();
            }
        }
        0
    }

    /// Color index at a relative position within the preview's 4x4
    /// bounding box, 0 if empty or outside that box.
    pub fn next_piece_cell_value(&self, col: i32, row: i32) -> u8 {
        if !(0..i32::from(PREVIEW_BOX)).contains(&col) || !(0..i32::from(PREVIEW_BOX)).contains(&row)
        {
            return 0;
        }
        let hit = shape(self.preview.kind, Rotation::North)
            .iter()
            .any(|&(dc, dr)| i32::from(dc) == col && i32::from(dr) == row);
        if hit {
            self.preview.color()
        } else {
            0
        }
    }

    /// Current score. Non-decreasing until the next `start`.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game has ended. Reset only by `start`.
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The falling piece, if one is in play.
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// Kind of the previewed next piece.
    pub fn preview_kind(&self) -> PieceKind {
        self.preview.kind
    }

    /// The settled-cell grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup in tests and benches.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_ready_accepting_only_start() {
        let mut engine = GameEngine::new(1);
        assert_eq!(engine.phase(), Phase::Ready);
        assert!(engine.current().is_none());

        // Commands other than start are no-ops in Ready.
        assert!(!engine.shift(-1));
        assert!(!engine.rotate());
        engine.soft_drop();
        engine.tick();
        assert_eq!(engine.phase(), Phase::Ready);

        engine.start();
        assert_eq!(engine.phase(), Phase::Playing);
        assert!(engine.current().is_some());
    }

    #[test]
    fn start_is_ignored_mid_game() {
        let mut engine = GameEngine::new(1);
        engine.start();
        engine.tick();
        let piece = engine.current().unwrap();
        engine.start();
        assert_eq!(engine.current(), Some(piece));
    }

    #[test]
    fn tick_moves_piece_down_one_row() {
        let mut engine = GameEngine::new(1);
        engine.start();
        let row = engine.current().unwrap().row;
        engine.tick();
        assert_eq!(engine.current().unwrap().row, row + 1);
    }

    #[test]
    fn soft_drop_matches_gravity_step() {
        let mut a = GameEngine::new(42);
        let mut b = GameEngine::new(42);
        a.start();
        b.start();
        a.tick();
        b.soft_drop();
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn blocked_tick_locks_and_promotes_preview() {
        let mut engine = GameEngine::new(7);
        engine.start();
        let promoted = engine.preview_kind();

        let mut locked = false;
        for _ in 0..30 {
            let before = engine.current().unwrap();
            engine.tick();
            if engine.current().map(|p| p.kind) != Some(before.kind)
                || engine.current().map_or(true, |p| p.row < before.row)
            {
                locked = true;
                break;
            }
        }
        assert!(locked, "piece never locked within board height");
        assert_eq!(engine.current().unwrap().kind, promoted);
    }

    #[test]
    fn lock_on_full_row_scores_single() {
        let mut engine = GameEngine::new(3);
        engine.start();
        // Complete the bottom row so the first lock clears exactly it.
        for col in 0..10 {
            engine.board_mut().set(col, 23, 1);
        }
        while engine.score() == 0 && !engine.is_game_over() {
            engine.tick();
        }
        assert_eq!(engine.score(), 40);
    }

    #[test]
    fn stacking_without_input_reaches_game_over() {
        let mut engine = GameEngine::new(5);
        engine.start();
        for _ in 0..10_000 {
            engine.tick();
            if engine.is_game_over() {
                break;
            }
        }
        assert!(engine.is_game_over());
        assert!(engine.current().is_none());

        // Terminal until start.
        let score = engine.score();
        engine.tick();
        engine.soft_drop();
        assert!(!engine.shift(1));
        assert!(!engine.rotate());
        assert_eq!(engine.score(), score);
        assert!(engine.is_game_over());

        engine.start();
        assert!(!engine.is_game_over());
        assert_eq!(engine.score(), 0);
        assert!(engine.board().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn queries_are_pure() {
        let mut engine = GameEngine::new(9);
        engine.start();
        engine.tick();
        let before = engine.clone();
        for row in -2..26 {
            for col in -2..12 {
                engine.cell_value(col, row);
            }
        }
        for row in 0..4 {
            for col in 0..4 {
                engine.next_piece_cell_value(col, row);
            }
        }
        let _ = (engine.score(), engine.is_game_over(), engine.phase());
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.current(), before.current());
        assert_eq!(engine.score(), before.score());
    }

    #[test]
    fn cell_value_overlays_falling_piece() {
        let mut engine = GameEngine::new(11);
        engine.start();
        let piece = engine.current().unwrap();
        for (col, row) in piece.cells() {
            assert_eq!(
                engine.cell_value(i32::from(col), i32::from(row)),
                piece.color()
            );
        }
        assert_eq!(engine.cell_value(-1, 0), 0);
        assert_eq!(engine.cell_value(0, 100), 0);
    }

    #[test]
    fn preview_box_has_exactly_four_colored_cells() {
        let engine = GameEngine::new(13);
        let color = engine.preview_kind().color_index();
        let mut filled = 0;
        for row in 0..4 {
            for col in 0..4 {
                let v = engine.next_piece_cell_value(col, row);
                if v != 0 {
                    assert_eq!(v, color);
                    filled += 1;
                }
            }
        }
        assert_eq!(filled, 4);
        assert_eq!(engine.next_piece_cell_value(4, 0), 0);
        assert_eq!(engine.next_piece_cell_value(0, -1), 0);
    }
}
