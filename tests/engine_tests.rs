//! End-to-end engine scenarios through the public facade.

use isotris::core::GameEngine;
use isotris::types::{Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Assert the falling piece overlaps nothing and stays inside the walls.
fn assert_piece_invariant(engine: &GameEngine) {
    if let Some(piece) = engine.current() {
        for (col, row) in piece.cells() {
            assert!((0..BOARD_WIDTH as i8).contains(&col), "col {col} out of bounds");
            assert!(row < BOARD_HEIGHT as i8, "row {row} past the floor");
            assert_eq!(
                engine.board().cell(i32::from(col), i32::from(row)),
                0,
                "piece overlaps settled cell at ({col}, {row})"
            );
        }
    }
}

#[test]
fn piece_never_overlaps_or_escapes_during_play() {
    let mut engine = GameEngine::new(2024);
    engine.start();

    for step in 0u32..3000 {
        match step % 5 {
            0 => {
                engine.shift(-1);
            }
            1 => {
                engine.rotate();
            }
            2 => {
                engine.shift(1);
            }
            3 => engine.soft_drop(),
            _ => engine.tick(),
        }
        assert_piece_invariant(&engine);
        if engine.is_game_over() {
            engine.start();
        }
    }
}

#[test]
fn score_is_monotone_and_only_rises_on_clears() {
    let mut engine = GameEngine::new(321);
    engine.start();

    for step in 0u32..5000 {
        let before = engine.score();
        match step % 3 {
            0 => {
                engine.shift(if step % 6 == 0 { -1 } else { 1 });
            }
            1 => {
                engine.rotate();
            }
            _ => engine.tick(),
        }
        let after = engine.score();
        assert!(after >= before, "score decreased mid-game");
        if after > before {
            // Only a gravity step can have raised it.
            assert_eq!(step % 3, 2);
        }
        if engine.is_game_over() {
            engine.start();
        }
    }
}

#[test]
fn lock_promotes_the_previewed_piece() {
    let mut engine = GameEngine::new(77);
    engine.start();
    let promoted = engine.preview_kind();
    let first = engine.current().unwrap().kind;

    // Drop straight down until the first lock replaces the piece.
    let mut ticks = 0;
    loop {
        engine.soft_drop();
        ticks += 1;
        assert!(ticks <= BOARD_HEIGHT as u32, "first piece never locked");
        let now = engine.current().unwrap();
        if now.row == 0 && ticks > 1 {
            assert_eq!(now.kind, promoted);
            break;
        }
        if now.kind != first {
            assert_eq!(now.kind, promoted);
            break;
        }
    }

    // The preview box now shows the freshly generated piece.
    let color = engine.preview_kind().color_index();
    let filled = (0..4)
        .flat_map(|row| (0..4).map(move |col| (col, row)))
        .filter(|&(col, row)| engine.next_piece_cell_value(col, row) == color)
        .count();
    assert_eq!(filled, 4);
}

#[test]
fn full_bottom_row_scores_forty_on_lock() {
    let mut engine = GameEngine::new(3);
    engine.start();
    for col in 0..BOARD_WIDTH as i32 {
        engine.board_mut().set(col, BOARD_HEIGHT as i32 - 1, 1);
    }

    while engine.score() == 0 && !engine.is_game_over() {
        engine.tick();
    }
    assert_eq!(engine.score(), 40);

    // The cleared row compacted away: the bottom row now only holds the
    // cells of the locked piece, if any.
    let bottom: Vec<u8> = (0..BOARD_WIDTH as i32)
        .map(|col| engine.board().cell(col, BOARD_HEIGHT as i32 - 1))
        .collect();
    assert!(bottom.iter().any(|&c| c == 0));
}

#[test]
fn unattended_game_ends_and_restart_resets() {
    let mut engine = GameEngine::new(5);
    engine.start();

    for _ in 0..20_000 {
        engine.tick();
        if engine.is_game_over() {
            break;
        }
    }
    assert!(engine.is_game_over());
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.current().is_none());

    // Every command but start is a no-op now.
    let score = engine.score();
    let cells: Vec<u8> = engine.board().cells().to_vec();
    assert!(!engine.shift(-1));
    assert!(!engine.rotate());
    engine.soft_drop();
    engine.tick();
    assert_eq!(engine.score(), score);
    assert_eq!(engine.board().cells(), cells.as_slice());
    assert!(engine.is_game_over());

    engine.start();
    assert_eq!(engine.phase(), Phase::Playing);
    assert!(!engine.is_game_over());
    assert_eq!(engine.score(), 0);
    assert!(engine.board().cells().iter().all(|&c| c == 0));
    assert!(engine.current().is_some());
}

#[test]
fn identical_seeds_replay_identically() {
    let mut a = GameEngine::new(424242);
    let mut b = GameEngine::new(424242);
    a.start();
    b.start();

    for step in 0u32..500 {
        match step % 4 {
            0 => {
                a.shift(1);
                b.shift(1);
            }
            1 => {
                a.rotate();
                b.rotate();
            }
            _ => {
                a.tick();
                b.tick();
            }
        }
        assert_eq!(a.current(), b.current());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.is_game_over(), b.is_game_over());
    }
}
