//! Keyboard cursor over the board.

use crate::types::BOARD_SIZE;

/// Cursor position, always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    row: usize,
    col: usize,
}

impl BoardCursor {
    /// Cursor at the board center
    pub fn new() -> Self {
        Self {
            row: BOARD_SIZE / 2,
            col: BOARD_SIZE / 2,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Flat board index under the cursor
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Move by (d_row, d_col), clamped to the board edges
    pub fn shift(&mut self, d_row: i32, d_col: i32) {
        let max = BOARD_SIZE as i32 - 1;
        self.row = (self.row as i32 + d_row).clamp(0, max) as usize;
        self.col = (self.col as i32 + d_col).clamp(0, max) as usize;
    }

    /// Jump to (row, col); ignored off the board
    pub fn place(&mut self, row: i32, col: i32) {
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            self.row = row as usize;
            self.col = col as usize;
        }
    }
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self::new()
    }
}
