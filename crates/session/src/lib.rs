//! Play session layer: everything between the rules engine and a front end.
//!
//! - [`Session`] owns the [`Game`](crate::core::Game), the turn animation and
//!   the board being shown, and blocks clicks while a turn plays
//! - [`SessionConfig`] reads `LINES_*` environment variables
//! - [`TurnLog`] appends one JSON object per turn/restart
//! - [`AudioCue`] names the sound each event deserves

pub mod config;
pub mod cue;
pub mod session;
pub mod turn_log;

pub use tui_lines_core as core;
pub use tui_lines_types as types;

pub use config::SessionConfig;
pub use cue::{write_status, AudioCue};
pub use session::{Session, StepOutput};
pub use turn_log::{LogRecord, TurnLog};
