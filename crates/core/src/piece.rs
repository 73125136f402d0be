//! Piece module - active/next piece values and the placement validator
//!
//! A piece is a plain `Copy` value. Moves and rotations build a candidate
//! piece, and the engine swaps it in only after [`is_valid`] accepts it, so a
//! rejected attempt leaves the current piece untouched.

use crate::board::Board;
use crate::pieces::{get_shape, normalize_rotation, PieceShape};
use crate::types::{Rgb, ShapeId};

/// A falling or queued piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    /// Always within `0..rotation_count(shape)`
    pub rotation: u8,
    /// Anchor column
    pub x: i16,
    /// Anchor row
    pub y: i16,
}

impl Piece {
    /// Create a piece in rotation state 0 at the given anchor
    pub fn new(shape: ShapeId, x: i16, y: i16) -> Self {
        Self {
            shape,
            rotation: 0,
            x,
            y,
        }
    }

    /// Offsets for the current rotation
    pub fn shape_offsets(&self) -> PieceShape {
        get_shape(self.shape, self.rotation)
    }

    /// Absolute (column, row) of each occupied cell
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.shape_offsets()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Cells paired with the shape color, ready for [`Board::lock_cells`]
    pub fn colored_cells(&self) -> [(i16, i16, Rgb); 4] {
        let color = self.shape.color();
        self.cells().map(|(x, y)| (x, y, color))
    }

    pub fn color(&self) -> Rgb {
        self.shape.color()
    }

    /// Candidate shifted by (dx, dy)
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate in the next rotation state at the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            rotation: normalize_rotation(self.shape, self.rotation.wrapping_add(1)),
            ..*self
        }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid(self, board)
    }
}

/// Placement validator: true iff every cell of `piece` is free on `board`
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    piece
        .cells()
        .iter()
        .all(|&(column, row)| board.is_cell_free(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn test_piece_new() {
        let piece = Piece::new(ShapeId::T, 5, 0);
        assert_eq!(piece.shape, ShapeId::T);
        assert_eq!(piece.rotation, 0);
        assert_eq!((piece.x, piece.y), (5, 0));
    }

    #[test]
    fn test_cells_are_offsets_plus_anchor() {
        let piece = Piece::new(ShapeId::I, 5, 4);
        assert_eq!(piece.cells(), [(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_rotated_wraps_per_shape() {
        let o = Piece::new(ShapeId::O, 5, 0);
        assert_eq!(o.rotated().rotation, 0);

        let s = Piece::new(ShapeId::S, 5, 0);
        assert_eq!(s.rotated().rotation, 1);
        assert_eq!(s.rotated().rotated().rotation, 0);

        let t = Piece::new(ShapeId::T, 5, 0);
        assert_eq!(t.rotated().rotated().rotated().rotation, 3);
    }

    #[test]
    fn test_validator_against_walls_and_stack() {
        let mut board = Board::new(10, 20);
        let piece = Piece::new(ShapeId::O, 5, 20);
        assert!(is_valid(&piece, &board));
        assert!(!is_valid(&piece.moved(0, 1), &board));

        board.set(4, 19, Some(Rgb::new(1, 2, 3)));
        assert!(!is_valid(&piece, &board));

        // O occupies anchor-1..=anchor, so anchor 0 pokes out at column -1.
        assert!(!is_valid(&Piece::new(ShapeId::O, 0, 5), &board));
    }

    #[test]
    fn test_validator_ignores_stack_above_board() {
        let board = Board::new(10, 20);
        assert!(is_valid(&Piece::new(ShapeId::I, 5, -10), &board));
        assert!(!is_valid(&Piece::new(ShapeId::I, 10, -10), &board));
    }
}
