//! Board module - the grid of locked cells
//!
//! Cells are stored in a flat row-major vector (`row * width + column`), one
//! slot per visible position, so a coordinate can hold at most one color.
//! Coordinates: column grows to the right from 0, row grows downward from 0
//! (the top visible row). Negative rows are above the board: they are always
//! free and never stored.

use crate::types::{Cell, Rgb};

/// The board of committed cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, column: i16, row: i16) -> Option<usize> {
        if column < 0 || row < 0 || column >= self.width as i16 || row >= self.height as i16 {
            return None;
        }
        Some(row as usize * self.width as usize + column as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the cell at (column, row), or `None` if out of bounds
    pub fn get(&self, column: i16, row: i16) -> Option<Cell> {
        self.index(column, row).map(|i| self.cells[i])
    }

    /// Set the cell at (column, row).
    /// Returns false if out of bounds.
    pub fn set(&mut self, column: i16, row: i16, cell: Cell) -> bool {
        match self.index(column, row) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may occupy (column, row).
    ///
    /// Columns outside the board are never free. Rows above the board are
    /// always free so pieces can spawn and fall in from above. Rows below the
    /// board are never free. Otherwise the cell is free iff nothing is locked
    /// there.
    pub fn is_cell_free(&self, column: i16, row: i16) -> bool {
        if column < 0 || column >= self.width as i16 {
            return false;
        }
        if row < 0 {
            return true;
        }
        matches!(self.get(column, row), Some(None))
    }

    /// Commit cells to the board.
    ///
    /// Cells above the board (`row < 0`) are dropped. Returns how many cells
    /// were stored.
    pub fn lock_cells<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = (i16, i16, Rgb)>,
    {
        let mut stored = 0;
        for (column, row, color) in cells {
            if row < 0 {
                continue;
            }
            if self.set(column, row, Some(color)) {
                stored += 1;
            }
        }
        stored
    }

    /// Whether every column of `row` is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height as usize {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    fn row(&self, row: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[row * width..(row + 1) * width]
    }

    /// Remove all full rows and compact the rows above them.
    ///
    /// Rows are scanned bottom to top. Each surviving row is copied down by the
    /// number of full rows found beneath it, and the vacated rows at the top
    /// are emptied. Rows below the lowest full row do not move. Returns the
    /// number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_row = self.height as usize;

        for read_row in (0..self.height as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Whether any locked cell sits on a row above `threshold`
    pub fn has_cell_above(&self, threshold: i16) -> bool {
        let rows = threshold.clamp(0, self.height as i16) as usize;
        self.cells[..rows * self.width as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Number of locked cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
