//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`InputCommand`]s and keeps a keyboard
//! cursor so the board can be played without a mouse.

pub mod cursor;
pub mod map;

pub use tui_lines_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit, InputCommand};
