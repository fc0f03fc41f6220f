//! Terminal front end for the Lines board.
//!
//! A small game-oriented rendering layer: no widget toolkit, just a
//! framebuffer of styled cells, a pure view that draws the board into it and
//! a renderer that flushes changed runs to the terminal.
//!
//! - `core` stays deterministic and testable
//! - each board cell is 4 columns x 2 rows so balls look round-ish
//! - the view reports where the board landed ([`BoardLayout`]) so mouse
//!   clicks can be mapped back to cells
//!
//! [`BoardLayout`]: crate::types::BoardLayout

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_lines_core as core;
pub use tui_lines_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{ball_rgb, BoardScene, GameView, Viewport};
pub use render_throttle::{RenderThrottle, STATIC_REFRESH_MS};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, DirtyRun, TerminalRenderer};
