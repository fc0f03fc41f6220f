//! TUI Lines (workspace facade crate).
//!
//! Re-exports the member crates under `tui_lines::{core,input,session,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_lines_core as core;
pub use tui_lines_input as input;
pub use tui_lines_session as session;
pub use tui_lines_term as term;
pub use tui_lines_types as types;
