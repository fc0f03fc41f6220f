//! Audio cues: which sound a click or restart would trigger.
//!
//! Synthesis is up to the front end; the terminal shows the cue as a status line.

use std::fmt::Write as _;

use crate::core::{TurnClickResult, TurnReport};
use crate::types::ClickAction;

/// Bounds for the line-clear intensity.
const MIN_INTENSITY: u32 = 5;
const MAX_INTENSITY: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Select,
    Invalid,
    Move,
    /// `cleared` is clamped to `5..=20`
    LineClear { cleared: u32 },
    GameOver,
    Restart,
}

impl AudioCue {
    /// Cue for a processed click. Clicks outside the board make no sound.
    pub fn for_click(result: &TurnClickResult, report: Option<TurnReport>) -> Option<Self> {
        result.to?;
        let cue = match result.action {
            ClickAction::Invalid => AudioCue::Invalid,
            ClickAction::Selected => AudioCue::Select,
            ClickAction::GameOver => AudioCue::GameOver,
            ClickAction::Moved if result.scored() => AudioCue::LineClear {
                cleared: report
                    .map(|r| r.cleared())
                    .unwrap_or(0)
                    .clamp(MIN_INTENSITY, MAX_INTENSITY),
            },
            ClickAction::Moved => AudioCue::Move,
        };
        Some(cue)
    }

    /// Short status text
    pub fn label(&self) -> &'static str {
        match self {
            AudioCue::Select => "selected",
            AudioCue::Invalid => "can't go there",
            AudioCue::Move => "moved",
            AudioCue::LineClear { .. } => "line cleared!",
            AudioCue::GameOver => "board full",
            AudioCue::Restart => "new game",
        }
    }
}

/// Rewrite `out` with the status line: the last cue's label, then
/// ` x<burst>` when the last clear burst removed balls.
///
/// Reuses the buffer; nothing is allocated once `out` has room for the text.
pub fn write_status(out: &mut String, cue: Option<AudioCue>, burst: usize) {
    out.clear();
    if let Some(cue) = cue {
        out.push_str(cue.label());
    }
    if burst > 0 {
        let _ = write!(out, " x{burst}");
    }
}
