//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, session glue).
//!
//! # Board Dimensions
//!
//! Lines-98 playfield:
//!
//! - **Size**: 9 x 9 cells, row-major (`index = row * BOARD_SIZE + col`)
//! - **Colors**: cells hold `0` (empty) or a ball color in `1..=COLOR_COUNT`
//! - **Preview**: `NEXT_COUNT` colors are announced for the next forced spawn
//!
//! # Animation Timing
//!
//! Turn animation phases run in order move -> clear -> spawn. Durations are in seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_DURATION` | 0.18 | Ball travels along its path |
//! | `CLEAR_DURATION` | 0.16 | Cleared cells stay empty while dust flies |
//! | `SPAWN_DURATION` | 0.18 | Spawned balls grow from 0 to full size |
//! | `MAX_FRAME_DT` | 0.033 | Frame delta clamp (avoids large jumps) |
//!
//! # Examples
//!
//! ```
//! use tui_lines_types::{ClickAction, BOARD_SIZE, CELLS, COLOR_COUNT};
//!
//! assert_eq!(BOARD_SIZE, 9);
//! assert_eq!(CELLS, 81);
//! assert_eq!(COLOR_COUNT, 7);
//!
//! assert!(ClickAction::Moved.starts_animation());
//! assert!(!ClickAction::Selected.starts_animation());
//! assert_eq!(ClickAction::GameOver.as_str(), "gameOver");
//! ```

/// Board side length in cells (9)
pub const BOARD_SIZE: usize = 9;

/// Total number of cells on the board (81)
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of distinct ball colors (1..=7)
pub const COLOR_COUNT: u8 = 7;

/// Number of colors in the next-spawn preview
pub const NEXT_COUNT: usize = 3;

/// Balls placed on a fresh board
pub const INITIAL_BALLS: usize = 5;

/// Minimum run length that gets cleared
pub const MIN_LINE: usize = 5;

/// Seed substituted for 0 (xorshift has an all-zero fixed point)
pub const ZERO_SEED_SUBSTITUTE: u32 = 0xA341_316C;

/// Move phase duration in seconds
pub const MOVE_DURATION: f32 = 0.18;

/// Clear phase duration in seconds
pub const CLEAR_DURATION: f32 = 0.16;

/// Spawn phase duration in seconds
pub const SPAWN_DURATION: f32 = 0.18;

/// Upper bound for a single frame delta in seconds
pub const MAX_FRAME_DT: f32 = 0.033;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - `1..=COLOR_COUNT`: Ball color
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines98_board_defaults() {
        assert_eq!(BOARD_SIZE, 9);
        assert_eq!(CELLS, 81);
        assert_eq!(NEXT_COUNT, 3);
        assert_eq!(INITIAL_BALLS, 5);
        assert_eq!(MIN_LINE, 5);
        assert_eq!(ZERO_SEED_SUBSTITUTE, 0xA341316C);
    }

    #[test]
    fn animation_phases_are_positive() {
        assert!(MOVE_DURATION > 0.0);
        assert!(CLEAR_DURATION > 0.0);
        assert!(SPAWN_DURATION > 0.0);
        assert!(MAX_FRAME_DT > 0.0);
    }

    #[test]
    fn board_layout_maps_terminal_coordinates() {
        let layout = BoardLayout {
            origin_x: 10,
            origin_y: 2,
            cell_w: 4,
            cell_h: 2,
        };
        assert_eq!(layout.cell_at(10, 2), Some((0, 0)));
        assert_eq!(layout.cell_at(13, 3), Some((0, 0)));
        assert_eq!(layout.cell_at(14, 3), Some((0, 1)));
        assert_eq!(layout.cell_at(10 + 4 * 8 + 3, 2 + 2 * 8 + 1), Some((8, 8)));
        assert_eq!(layout.cell_at(9, 2), None);
        assert_eq!(layout.cell_at(10 + 4 * 9, 2), None);
    }
}

/// Result of one board click
///
/// - **Selected**: an occupied cell was clicked and is now the selection
/// - **Moved**: the selected ball moved and the turn resolved
/// - **Invalid**: nothing changed
/// - **GameOver**: the ball moved and the board filled up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickAction {
    Selected,
    Moved,
    #[default]
    Invalid,
    GameOver,
}

impl ClickAction {
    /// Whether a turn animation follows this action
    pub fn starts_animation(&self) -> bool {
        matches!(self, ClickAction::Moved | ClickAction::GameOver)
    }

    /// Convert to camelCase string (used in the turn log)
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickAction::Selected => "selected",
            ClickAction::Moved => "moved",
            ClickAction::Invalid => "invalid",
            ClickAction::GameOver => "gameOver",
        }
    }
}

/// Phases of the turn animation
///
/// The cycle goes: None -> Move -> Clear -> Spawn -> None.
/// Clear is skipped when the turn cleared nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    #[default]
    None,
    Move,
    Clear,
    Spawn,
}

/// Placement of the board inside the terminal, in terminal cells.
///
/// Produced by the view, consumed by the mouse mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// Column of the top-left board cell (inside the border)
    pub origin_x: u16,
    /// Row of the top-left board cell (inside the border)
    pub origin_y: u16,
    /// Terminal columns per board cell
    pub cell_w: u16,
    /// Terminal rows per board cell
    pub cell_h: u16,
}

impl BoardLayout {
    /// Map a terminal position to a `(row, col)` board coordinate.
    ///
    /// Returns `None` outside the board.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(i32, i32)> {
        if self.cell_w == 0 || self.cell_h == 0 || x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell_w) as usize;
        let row = ((y - self.origin_y) / self.cell_h) as usize;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some((row as i32, col as i32))
    }

    /// Top-left terminal position of a board cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.origin_x + (col as u16) * self.cell_w,
            self.origin_y + (row as u16) * self.cell_h,
        )
    }
}
