//! Render snapshot - everything a frontend needs to draw one frame
//!
//! `grid` composes the locked board with the visible cells of the active
//! piece. Callers that redraw every frame should keep one snapshot around and
//! refresh it with [`Engine::snapshot_into`](crate::Engine::snapshot_into),
//! which reuses the grid allocation.

use serde::Serialize;

use crate::piece::Piece;
use crate::types::{Cell, ShapeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    pub rotation: u8,
    pub x: i16,
    pub y: i16,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Next-piece preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub shape: ShapeId,
    pub rotation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` entries
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub piece_id: u32,
    pub episode_id: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Color at (column, row); `None` for empty or out of range
    pub fn cell(&self, column: u16, row: u16) -> Cell {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.grid[row as usize * self.width as usize + column as usize]
    }

    /// Number of non-empty grid cells
    pub fn filled_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            grid: Vec::new(),
            active: None,
            next: NextSnapshot {
                shape: ShapeId::I,
                rotation: 0,
            },
            score: 0,
            lines: 0,
            fall_interval_ms: 0,
            piece_id: 0,
            episode_id: 0,
            game_over: false,
        }
    }
}
