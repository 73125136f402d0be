//! Shape catalog and placement validator tests

use tui_blockfall::core::pieces::{get_state, rotation_states};
use tui_blockfall::core::{get_shape, is_valid, rotation_count, Board, Piece};
use tui_blockfall::types::{Rgb, ShapeId};

#[test]
fn test_rotation_counts() {
    assert_eq!(rotation_count(ShapeId::O), 1);
    for shape in [ShapeId::S, ShapeId::Z, ShapeId::I] {
        assert_eq!(rotation_count(shape), 2, "{:?}", shape);
    }
    for shape in [ShapeId::J, ShapeId::L, ShapeId::T] {
        assert_eq!(rotation_count(shape), 4, "{:?}", shape);
    }
}

#[test]
fn test_every_state_has_four_distinct_cells_above_anchor() {
    for shape in ShapeId::ALL {
        for state in rotation_states(shape) {
            for (i, a) in state.iter().enumerate() {
                assert!(a.1 < 0, "{:?} offset {:?} not above anchor", shape, a);
                assert!((-2..=2).contains(&a.0));
                for b in &state[i + 1..] {
                    assert_ne!(a, b, "{:?} has duplicate offsets", shape);
                }
            }
        }
    }
}

#[test]
fn test_rotation_closure() {
    for shape in ShapeId::ALL {
        let start = Piece::new(shape, 5, 10);
        let mut piece = start;
        for _ in 0..rotation_count(shape) {
            piece = piece.rotated();
        }
        assert_eq!(piece, start, "{:?} did not return to its start state", shape);
    }
}

#[test]
fn test_get_shape_reduces_rotation_modulo_count() {
    assert_eq!(get_shape(ShapeId::I, 3), get_shape(ShapeId::I, 1));
    assert_eq!(get_shape(ShapeId::O, 7), get_shape(ShapeId::O, 0));
    assert_eq!(get_shape(ShapeId::T, 6), get_shape(ShapeId::T, 2));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_state_rejects_raw_index_past_count() {
    get_state(ShapeId::S, 2);
}

#[test]
fn test_vertical_i_occupies_four_rows_at_anchor_column() {
    let piece = Piece::new(ShapeId::I, 5, 20);
    assert_eq!(piece.cells(), [(5, 16), (5, 17), (5, 18), (5, 19)]);
}

#[test]
fn test_validator_accepts_spawn_above_board() {
    let board = Board::new(10, 20);
    for shape in ShapeId::ALL {
        assert!(is_valid(&Piece::new(shape, 5, 0), &board), "{:?}", shape);
    }
}

#[test]
fn test_validator_rejects_walls_floor_and_overlap() {
    let mut board = Board::new(10, 20);

    // O covers anchor-1..=anchor.
    assert!(!is_valid(&Piece::new(ShapeId::O, 0, 5), &board));
    assert!(is_valid(&Piece::new(ShapeId::O, 1, 5), &board));
    assert!(!is_valid(&Piece::new(ShapeId::O, 10, 5), &board));
    assert!(!is_valid(&Piece::new(ShapeId::O, 5, 21), &board));

    board.set(4, 4, Some(Rgb::new(9, 9, 9)));
    assert!(!is_valid(&Piece::new(ShapeId::O, 5, 5), &board));
    assert!(is_valid(&Piece::new(ShapeId::O, 5, 4), &board));
}

#[test]
fn test_colored_cells_carry_shape_color() {
    let piece = Piece::new(ShapeId::T, 4, 4);
    for (_, _, color) in piece.colored_cells() {
        assert_eq!(color, Rgb::new(128, 0, 128));
    }
}
