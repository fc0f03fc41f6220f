//! Board module - manages the game grid
//!
//! The board is a 9x9 grid where each cell is empty (0) or holds a ball color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) with row 0 at the top, both ranging 0..9.
//! Linear index: `row * BOARD_SIZE + col`.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_SIZE, CELLS, COLOR_COUNT, EMPTY, MIN_LINE};

/// Line axes scanned by run detection: horizontal, vertical, diagonal down-right,
/// diagonal up-right. Each axis is scanned in one direction only.
const LINE_AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Calculate flat index from (row, col) coordinates
#[inline(always)]
pub fn index_of(row: i32, col: i32) -> Option<usize> {
    if !in_bounds(row, col) {
        return None;
    }
    Some((row as usize) * BOARD_SIZE + (col as usize))
}

/// Split a flat index into (row, col)
#[inline(always)]
pub fn row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Check if (row, col) lies on the board
#[inline(always)]
pub fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}

/// The game board - 9 x 9 cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; CELLS],
        }
    }

    /// Create from a flat array. Values above `COLOR_COUNT` become empty cells.
    pub fn from_cells(mut cells: [Cell; CELLS]) -> Self {
        for cell in &mut cells {
            if *cell > COLOR_COUNT {
                *cell = EMPTY;
            }
        }
        Self { cells }
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        index_of(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds or the color is not a valid cell value
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match index_of(row, col) {
            Some(idx) => self.set_index(idx, cell),
            None => false,
        }
    }

    /// Get cell by flat index. Returns `EMPTY` for indices off the board.
    #[inline]
    pub fn get_index(&self, idx: usize) -> Cell {
        self.cells.get(idx).copied().unwrap_or(EMPTY)
    }

    /// Set cell by flat index
    pub fn set_index(&mut self, idx: usize, cell: Cell) -> bool {
        if idx >= CELLS || cell > COLOR_COUNT {
            return false;
        }
        self.cells[idx] = cell;
        true
    }

    /// Check if the cell at a flat index is empty
    #[inline]
    pub fn is_empty_at(&self, idx: usize) -> bool {
        idx < CELLS && self.cells[idx] == EMPTY
    }

    /// Count empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }

    /// Indices of all empty cells in ascending order
    pub fn empty_indices(&self) -> ArrayVec<usize, CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == EMPTY)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if no empty cell is left
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != EMPTY)
    }

    /// Mark every cell that belongs to a run of `MIN_LINE` or more same-colored
    /// balls along any of the four axes.
    ///
    /// A run is only walked from its first cell (the predecessor along the axis
    /// has a different color), so every run is visited once per axis. Runs that
    /// share a cell are unioned.
    pub fn line_mask(&self) -> [bool; CELLS] {
        let mut mask = [false; CELLS];
        let size = BOARD_SIZE as i32;

        for row in 0..size {
            for col in 0..size {
                let color = self.cells[(row * size + col) as usize];
                if color == EMPTY {
                    continue;
                }

                for &(dr, dc) in LINE_AXES.iter() {
                    if self.get(row - dr, col - dc) == Some(color) {
                        continue;
                    }

                    let mut length = 0usize;
                    let (mut r, mut c) = (row, col);
                    while self.get(r, c) == Some(color) {
                        length += 1;
                        r += dr;
                        c += dc;
                    }

                    if length >= MIN_LINE {
                        let (mut r, mut c) = (row, col);
                        for _ in 0..length {
                            mask[(r * size + c) as usize] = true;
                            r += dr;
                            c += dc;
                        }
                    }
                }
            }
        }

        mask
    }

    /// Clear every cell marked by [`Board::line_mask`].
    /// Returns the number of distinct cells cleared.
    pub fn clear_lines(&mut self) -> usize {
        let mask = self.line_mask();
        let mut cleared = 0;
        for (cell, marked) in self.cells.iter_mut().zip(mask.iter()) {
            if *marked {
                *cell = EMPTY;
                cleared += 1;
            }
        }
        cleared
    }

    /// Stable FNV-1a hash of the cells.
    ///
    /// `DefaultHasher` output is not stable across Rust versions, so the
    /// fingerprint is computed by hand.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for &b in self.cells.iter() {
            h ^= b as u64;
            h = h.wrapping_mul(0x0000_0100_0000_01B3);
        }
        h
    }

    /// Write the cells into a 2D grid (row-major)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_SIZE]; BOARD_SIZE]) {
        for (row, chunk) in self.cells.chunks_exact(BOARD_SIZE).enumerate() {
            out[row].copy_from_slice(chunk);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
