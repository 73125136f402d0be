//! Pieces module - the shape catalog
//!
//! Each shape has a fixed list of rotation states (O: 1, I/S/Z: 2, J/L/T: 4).
//! A state is four `(dx, dy)` offsets from the piece anchor. All offsets have
//! `dy < 0`, so a piece anchored on row 0 is entirely above the board.
//!
//! Rotation indices are reduced modulo the shape's state count before lookup,
//! so rotating past the last state wraps to the first. There is no wall-kick
//! table: a rotation is tried at the same anchor or not at all.

use crate::types::ShapeId;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i16, i16);

/// One rotation state - four cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

const S_STATES: [PieceShape; 2] = [
    [(0, -2), (1, -2), (-1, -1), (0, -1)],
    [(0, -3), (0, -2), (1, -2), (1, -1)],
];

const Z_STATES: [PieceShape; 2] = [
    [(-1, -2), (0, -2), (0, -1), (1, -1)],
    [(0, -3), (-1, -2), (0, -2), (-1, -1)],
];

const I_STATES: [PieceShape; 2] = [
    // vertical bar in the anchor column
    [(0, -4), (0, -3), (0, -2), (0, -1)],
    [(-2, -3), (-1, -3), (0, -3), (1, -3)],
];

const O_STATES: [PieceShape; 1] = [[(-1, -2), (0, -2), (-1, -1), (0, -1)]];

const J_STATES: [PieceShape; 4] = [
    [(-1, -3), (-1, -2), (0, -2), (1, -2)],
    [(0, -3), (1, -3), (0, -2), (0, -1)],
    [(-1, -2), (0, -2), (1, -2), (1, -1)],
    [(0, -3), (0, -2), (-1, -1), (0, -1)],
];

const L_STATES: [PieceShape; 4] = [
    [(1, -3), (-1, -2), (0, -2), (1, -2)],
    [(0, -3), (0, -2), (0, -1), (1, -1)],
    [(-1, -2), (0, -2), (1, -2), (-1, -1)],
    [(-1, -3), (0, -3), (0, -2), (0, -1)],
];

const T_STATES: [PieceShape; 4] = [
    [(0, -3), (-1, -2), (0, -2), (1, -2)],
    [(0, -3), (0, -2), (1, -2), (0, -1)],
    [(-1, -2), (0, -2), (1, -2), (0, -1)],
    [(0, -3), (-1, -2), (0, -2), (0, -1)],
];

/// All rotation states of a shape, in rotation order
pub fn rotation_states(shape: ShapeId) -> &'static [PieceShape] {
    match shape {
        ShapeId::S => &S_STATES,
        ShapeId::Z => &Z_STATES,
        ShapeId::I => &I_STATES,
        ShapeId::O => &O_STATES,
        ShapeId::J => &J_STATES,
        ShapeId::L => &L_STATES,
        ShapeId::T => &T_STATES,
    }
}

/// Number of distinct rotation states for a shape
pub fn rotation_count(shape: ShapeId) -> u8 {
    rotation_states(shape).len() as u8
}

/// Reduce any rotation index into the shape's state range
pub fn normalize_rotation(shape: ShapeId, rotation: u8) -> u8 {
    rotation % rotation_count(shape)
}

/// Get the cell offsets for a shape at a rotation index.
///
/// The index is taken modulo the shape's state count, so every `u8` is a
/// valid input.
pub fn get_shape(shape: ShapeId, rotation: u8) -> PieceShape {
    rotation_states(shape)[normalize_rotation(shape, rotation) as usize]
}

/// Get a rotation state by its exact index, without wrapping.
///
/// # Panics
///
/// Panics if `state` is not below [`rotation_count`] for the shape.
pub fn get_state(shape: ShapeId, state: u8) -> PieceShape {
    let states = rotation_states(shape);
    assert!(
        (state as usize) < states.len(),
        "rotation state {} out of range for {} ({} states)",
        state,
        shape.as_str(),
        states.len()
    );
    states[state as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_counts_match_shape_symmetry() {
        assert_eq!(rotation_count(ShapeId::O), 1);
        assert_eq!(rotation_count(ShapeId::I), 2);
        assert_eq!(rotation_count(ShapeId::S), 2);
        assert_eq!(rotation_count(ShapeId::Z), 2);
        assert_eq!(rotation_count(ShapeId::J), 4);
        assert_eq!(rotation_count(ShapeId::L), 4);
        assert_eq!(rotation_count(ShapeId::T), 4);
    }

    #[test]
    fn every_state_has_four_distinct_cells_above_anchor() {
        for shape in ShapeId::ALL {
            for state in rotation_states(shape) {
                for (i, a) in state.iter().enumerate() {
                    assert!(a.1 < 0, "{:?} has a cell at or below the anchor", shape);
                    for b in &state[i + 1..] {
                        assert_ne!(a, b, "{:?} repeats a cell", shape);
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(get_shape(ShapeId::O, 3), get_shape(ShapeId::O, 0));
        assert_eq!(get_shape(ShapeId::I, 2), get_shape(ShapeId::I, 0));
        assert_eq!(get_shape(ShapeId::T, 5), get_shape(ShapeId::T, 1));
        assert_eq!(normalize_rotation(ShapeId::S, 255), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn exact_state_lookup_rejects_unknown_state() {
        get_state(ShapeId::I, 2);
    }
}
