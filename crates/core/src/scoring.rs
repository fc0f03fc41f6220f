//! Scoring module - Lines-98 clear scoring
//!
//! Canonical progression: 5 -> 10, 6 -> 12, 7 -> 18, 8 -> 28, 9 -> 42,
//! continuing as `2 * (n - 5)^2 + 10` for larger clears.

use crate::types::MIN_LINE;

/// Points awarded for clearing `cleared` distinct cells in one resolution step.
///
/// Clears below `MIN_LINE` score nothing.
pub fn line_clear_score(cleared: usize) -> u32 {
    if cleared < MIN_LINE {
        return 0;
    }
    let d = (cleared - MIN_LINE) as u32;
    d.saturating_mul(d).saturating_mul(2).saturating_add(10)
}
