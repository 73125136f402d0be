//! Board tests - free-cell rule, locking and line clearing

use tui_blockfall::core::Board;
use tui_blockfall::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn fill_row(board: &mut Board, row: i16, except: &[i16]) {
    for x in 0..board.width() as i16 {
        if !except.contains(&x) {
            board.set(x, row, Some(GRAY));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert!(board.is_cell_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_free_cell_rule_outside_board() {
    let board = Board::new(10, 20);

    // Columns outside the board are never free, at any row.
    assert!(!board.is_cell_free(-1, 5));
    assert!(!board.is_cell_free(10, 5));
    assert!(!board.is_cell_free(-1, -3));

    // Above the board is open space.
    assert!(board.is_cell_free(0, -1));
    assert!(board.is_cell_free(9, -4));

    // Below the floor is blocked.
    assert!(!board.is_cell_free(3, 20));
}

#[test]
fn test_occupied_cell_is_not_free() {
    let mut board = Board::new(10, 20);
    assert!(board.set(5, 10, Some(GRAY)));
    assert!(!board.is_cell_free(5, 10));
    assert!(board.is_cell_free(4, 10));
    assert!(!board.set(10, 0, Some(GRAY)));
}

#[test]
fn test_lock_cells_drops_rows_above_board() {
    let mut board = Board::new(10, 20);
    let stored = board.lock_cells([(5, -2, GRAY), (5, -1, GRAY), (5, 0, GRAY), (5, 1, GRAY)]);
    assert_eq!(stored, 2);
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(5, 0), Some(Some(GRAY)));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 19, &[]);
    board.set(3, 18, Some(Rgb::new(1, 2, 3)));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(3, 19), Some(Some(Rgb::new(1, 2, 3))));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows_compacts_in_order() {
    let mut board = Board::new(10, 20);
    let a = Rgb::new(10, 0, 0);
    let b = Rgb::new(0, 10, 0);

    board.set(0, 16, Some(a));
    fill_row(&mut board, 17, &[]);
    board.set(1, 18, Some(b));
    fill_row(&mut board, 19, &[]);

    assert_eq!(board.clear_full_rows(), 2);

    // Row 18 drops by one (one full row beneath it), row 16 by two.
    assert_eq!(board.get(1, 19), Some(Some(b)));
    assert_eq!(board.get(0, 18), Some(Some(a)));
    assert_eq!(board.occupied_count(), 2);
    for y in 0..18 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None), "({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_clear_leaves_rows_below_band_untouched() {
    let mut board = Board::new(10, 20);
    let low = Rgb::new(10, 0, 0);
    let high = Rgb::new(0, 10, 0);

    board.set(3, 19, Some(low));
    fill_row(&mut board, 18, &[]);
    board.set(2, 17, Some(high));

    assert_eq!(board.clear_full_rows(), 1);

    // Only rows above the cleared row move; row 19 keeps its contents.
    assert_eq!(board.get(3, 19), Some(Some(low)));
    assert_eq!(board.get(2, 18), Some(Some(high)));
    assert_eq!(board.get(2, 17), Some(None));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        fill_row(&mut board, y, &[]);
    }
    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_no_full_row_leaves_board_untouched() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 19, &[4]);
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_has_cell_above_threshold() {
    let mut board = Board::new(10, 20);
    board.set(0, 1, Some(GRAY));
    assert!(!board.has_cell_above(1));
    board.set(9, 0, Some(GRAY));
    assert!(board.has_cell_above(1));
}

#[test]
fn test_custom_board_size() {
    let mut board = Board::new(6, 8);
    fill_row(&mut board, 7, &[]);
    assert!(board.is_row_full(7));
    assert!(!board.is_cell_free(6, 0));
    assert!(!board.is_cell_free(0, 8));
    assert_eq!(board.clear_full_rows(), 1);
}
