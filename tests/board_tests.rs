//! Board behavior through the public facade.

use isotris::core::Board;
use isotris::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..BOARD_WIDTH as i32 {
        board.set(col, row, 1);
    }
}

#[test]
fn reads_are_total_over_any_coordinates() {
    let board = Board::new();
    for (col, row) in [(-1, 0), (10, 0), (0, -1), (0, 24), (i32::MIN, i32::MAX)] {
        assert_eq!(board.cell(col, row), 0);
    }
}

#[test]
fn occupancy_floor_walls_and_headroom() {
    let mut board = Board::new();
    board.set(3, 10, 2);

    // Settled cell.
    assert!(board.is_occupied(3, 10));
    // The floor below the last row.
    assert!(board.is_occupied(0, BOARD_HEIGHT as i32));
    // Side walls are closed but not "occupied".
    assert!(!board.is_occupied(-1, 10));
    assert!(!board.is_open(-1, 10));
    assert!(!board.is_open(BOARD_WIDTH as i32, 10));
    // Spawn headroom above the top row is open.
    assert!(board.is_open(3, -2));
}

#[test]
fn clearing_rows_five_and_seven_compacts_by_their_distance() {
    let mut board = Board::new();
    fill_row(&mut board, 5);
    fill_row(&mut board, 7);

    // Markers above, between, and below the full rows.
    board.set(0, 4, 6);
    board.set(1, 6, 5);
    board.set(2, 8, 4);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Above both cleared rows: shifts down by 2.
    assert_eq!(board.cell(0, 6), 6);
    assert_eq!(board.cell(0, 4), 0);
    // Between them: shifts down by 1.
    assert_eq!(board.cell(1, 7), 5);
    assert_eq!(board.cell(1, 6), 0);
    // Below both: unaffected.
    assert_eq!(board.cell(2, 8), 4);

    // Two empty rows inserted at the top.
    for col in 0..BOARD_WIDTH as i32 {
        assert_eq!(board.cell(col, 0), 0);
        assert_eq!(board.cell(col, 1), 0);
    }
}

#[test]
fn four_simultaneous_rows_clear_in_one_pass() {
    let mut board = Board::new();
    for row in 20..24 {
        fill_row(&mut board, row);
    }
    board.set(0, 19, 3);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.cell(0, 23), 3);
    assert_eq!(board.cell(0, 19), 0);
}

#[test]
fn almost_full_row_does_not_clear() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i32 - 1 {
        board.set(col, 23, 1);
    }
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.cell(0, 23), 1);
}

#[test]
fn settle_then_clear_roundtrip() {
    let mut board = Board::new();
    board.settle(&[(0, 23), (1, 23)], 7);
    assert_eq!(board.cell(0, 23), 7);

    board.clear();
    assert!(board.cells().iter().all(|&c| c == 0));
}
