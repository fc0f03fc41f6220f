//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and turn animation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (reproducible sessions)
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-size boards, queues and paths; no heap allocation per turn
//!
//! # Module Structure
//!
//! - [`board`]: 9x9 board with run detection and line clearing
//! - [`path`]: Breadth-first reachability and shortest paths over empty cells
//! - [`game`]: Complete game state: selection, score, preview, turn resolution
//! - [`turn`]: Turn controller capturing pre-click board, path and score delta
//! - [`anim`]: Move -> clear -> spawn animation derived from two board snapshots
//! - [`rng`]: Xorshift32 generator for colors and spawn cells
//! - [`scoring`]: Lines-98 clear scoring
//!
//! # Game Rules
//!
//! - **Move**: select a ball, then an empty cell reachable through empty cells
//!   (up/down/left/right only)
//! - **Lines**: 5+ same-colored balls in a row, column or diagonal are removed
//! - **Spawn**: a move that clears nothing drops the 3 previewed colors on the board;
//!   lines they complete are removed and scored too
//! - **Game over**: the board has no empty cell left after a turn
//!
//! # Example
//!
//! ```
//! use tui_lines_core::{Board, Game};
//! use tui_lines_types::ClickAction;
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.set(1, col, 3);
//! }
//! board.set(0, 4, 3);
//!
//! let mut game = Game::from_board(board, [1, 2, 3], 11);
//! assert_eq!(game.click(0, 4), ClickAction::Selected);
//! assert_eq!(game.click(1, 4), ClickAction::Moved);
//! assert_eq!(game.score(), 10);
//! ```

pub mod anim;
pub mod board;
pub mod game;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod turn;

pub use tui_lines_types as types;

// Re-export commonly used types for convenience
pub use anim::{BallAt, MoveAnim, TurnAnim};
pub use board::{in_bounds, index_of, row_col, Board};
pub use game::{Game, TurnReport};
pub use path::{is_reachable, shortest_path, Path};
pub use rng::XorShiftRng;
pub use scoring::line_clear_score;
pub use snapshot::GameSnapshot;
pub use turn::TurnClickResult;
