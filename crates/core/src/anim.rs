//! Turn animation - timed move -> clear -> spawn presentation of one turn.
//!
//! The animation never looks at game rules. It diffs the board before the click
//! against the board after the turn resolved, and derives:
//!
//! - **cleared**: balls present before and gone after (the moving ball counts
//!   when it did not survive at its destination)
//! - **spawned**: balls absent before and present after (except the moved ball)
//!
//! From these it builds three snapshots (after move, after clear, final) and
//! exposes a render board that steps through them as time advances. All
//! snapshots are owned copies.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{
    Cell, TurnPhase, CELLS, CLEAR_DURATION, EMPTY, MOVE_DURATION, SPAWN_DURATION,
};

/// A ball color at a board index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallAt {
    pub index: usize,
    pub color: Cell,
}

/// Path of the moving ball and its color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveAnim {
    /// At least two nodes were supplied
    pub active: bool,
    pub path: ArrayVec<usize, CELLS>,
    pub color: Cell,
}

/// Full turn animation state and board snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct TurnAnim {
    active: bool,
    phase: TurnPhase,
    phase_t: f32,
    move_dur: f32,
    clear_dur: f32,
    spawn_dur: f32,

    movement: MoveAnim,
    cleared: ArrayVec<BallAt, CELLS>,
    spawned: ArrayVec<BallAt, CELLS>,

    before_board: Board,
    after_move_board: Board,
    after_clear_board: Board,
    final_board: Board,
}

fn normalize_duration(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl TurnAnim {
    /// Idle animation with default phase durations
    pub fn new() -> Self {
        Self::with_durations(MOVE_DURATION, CLEAR_DURATION, SPAWN_DURATION)
    }

    /// Idle animation with custom phase durations (seconds).
    ///
    /// Non-positive or non-finite values fall back to the defaults.
    pub fn with_durations(move_dur: f32, clear_dur: f32, spawn_dur: f32) -> Self {
        Self {
            active: false,
            phase: TurnPhase::None,
            phase_t: 0.0,
            move_dur: normalize_duration(move_dur, MOVE_DURATION),
            clear_dur: normalize_duration(clear_dur, CLEAR_DURATION),
            spawn_dur: normalize_duration(spawn_dur, SPAWN_DURATION),
            movement: MoveAnim::default(),
            cleared: ArrayVec::new(),
            spawned: ArrayVec::new(),
            before_board: Board::new(),
            after_move_board: Board::new(),
            after_clear_board: Board::new(),
            final_board: Board::new(),
        }
    }

    /// Back to idle. Durations are kept.
    pub fn reset(&mut self) {
        *self = Self::with_durations(self.move_dur, self.clear_dur, self.spawn_dur);
    }

    /// Input must stay blocked while this is true
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn phase_time(&self) -> f32 {
        self.phase_t
    }

    pub fn durations(&self) -> (f32, f32, f32) {
        (self.move_dur, self.clear_dur, self.spawn_dur)
    }

    pub fn movement(&self) -> &MoveAnim {
        &self.movement
    }

    /// Balls removed this turn, in board order (a consumed moving ball last)
    pub fn cleared(&self) -> &[BallAt] {
        &self.cleared
    }

    /// Balls spawned this turn, in board order
    pub fn spawned(&self) -> &[BallAt] {
        &self.spawned
    }

    pub fn before_board(&self) -> &Board {
        &self.before_board
    }

    pub fn after_move_board(&self) -> &Board {
        &self.after_move_board
    }

    pub fn after_clear_board(&self) -> &Board {
        &self.after_clear_board
    }

    pub fn final_board(&self) -> &Board {
        &self.final_board
    }

    /// Build a new turn animation from the board before the click, the board
    /// after the turn resolved, and the moving ball's path.
    pub fn start(
        &mut self,
        before: &Board,
        final_board: &Board,
        from: Option<usize>,
        to: Option<usize>,
        path: &[usize],
    ) {
        self.reset();

        let from = from.filter(|&i| i < CELLS);
        let to = to.filter(|&i| i < CELLS);

        self.active = true;
        self.phase = TurnPhase::Move;
        self.phase_t = 0.0;

        let path = &path[..path.len().min(CELLS)];
        self.movement.active = path.len() >= 2;
        self.movement.color = from.map(|i| before.get_index(i)).unwrap_or(EMPTY);
        if self.movement.active {
            self.movement.path.extend(path.iter().copied());
        }

        self.before_board = *before;
        self.final_board = *final_board;
        self.after_move_board = *before;
        if let (Some(from), Some(to)) = (from, to) {
            let color = self.after_move_board.get_index(from);
            self.after_move_board.set_index(to, color);
            self.after_move_board.set_index(from, EMPTY);
        }
        self.after_clear_board = self.after_move_board;

        let moved_color = self.movement.color;
        let moved_survived =
            to.is_some_and(|t| moved_color != EMPTY && final_board.get_index(t) == moved_color);

        for idx in 0..CELLS {
            let was = before.get_index(idx);
            let now = final_board.get_index(idx);
            if was != EMPTY && now == EMPTY && Some(idx) != from {
                self.cleared.push(BallAt { index: idx, color: was });
                self.after_clear_board.set_index(idx, EMPTY);
            } else if was == EMPTY && now != EMPTY {
                if Some(idx) == to && moved_survived {
                    continue;
                }
                self.spawned.push(BallAt { index: idx, color: now });
            }
        }

        if let Some(to) = to {
            let listed = self.cleared.iter().any(|b| b.index == to);
            if moved_color != EMPTY && !moved_survived && !listed {
                self.cleared.push(BallAt {
                    index: to,
                    color: moved_color,
                });
                self.after_clear_board.set_index(to, EMPTY);
            }
        }
    }

    /// Fill the render board for the first frame: the board before the click
    /// with the moving ball lifted off its source cell.
    pub fn begin_render(&self, render: &mut Board) {
        *render = self.before_board;
        if self.movement.active {
            if let Some(&from) = self.movement.path.first() {
                render.set_index(from, EMPTY);
            }
        }
    }

    /// Advance by `dt` seconds and update the render board.
    ///
    /// Returns true on the frame the move phase ends, which is when clear
    /// particles should burst at [`TurnAnim::cleared`] (possibly none).
    pub fn update(&mut self, dt: f32, render: &mut Board) -> bool {
        if !self.active {
            return false;
        }

        self.phase_t += dt.max(0.0);

        match self.phase {
            TurnPhase::Move => {
                if self.phase_t < self.move_dur {
                    return false;
                }
                // The move has landed; cleared cells vanish at the same instant.
                *render = self.after_clear_board;
                self.phase_t = 0.0;
                self.phase = if self.cleared.is_empty() {
                    TurnPhase::Spawn
                } else {
                    TurnPhase::Clear
                };
                true
            }
            TurnPhase::Clear => {
                *render = self.after_clear_board;
                if self.phase_t >= self.clear_dur {
                    self.phase = TurnPhase::Spawn;
                    self.phase_t = 0.0;
                }
                false
            }
            TurnPhase::Spawn => {
                *render = self.after_clear_board;
                for ball in self.spawned.iter() {
                    render.set_index(ball.index, ball.color);
                }
                if self.phase_t >= self.spawn_dur {
                    *render = self.final_board;
                    self.reset();
                }
                false
            }
            TurnPhase::None => false,
        }
    }

    /// Visual size `[0, 1]` of a ball spawned at `idx`, only during the spawn phase.
    pub fn spawn_scale(&self, idx: usize) -> Option<f32> {
        if !self.active || self.phase != TurnPhase::Spawn {
            return None;
        }
        if !self.spawned.iter().any(|b| b.index == idx) {
            return None;
        }
        Some((self.phase_t / self.spawn_dur).clamp(0.0, 1.0))
    }

    /// Position `u` in `[0, path_len - 1]` of the moving ball during the move phase.
    pub fn move_progress(&self) -> Option<f32> {
        if !self.active || self.phase != TurnPhase::Move || !self.movement.active {
            return None;
        }
        let last = (self.movement.path.len() - 1) as f32;
        Some(((self.phase_t / self.move_dur) * last).clamp(0.0, last))
    }

    /// Path segment under the moving ball: `(from_idx, to_idx, fraction)`.
    pub fn move_segment(&self) -> Option<(usize, usize, f32)> {
        let u = self.move_progress()?;
        let path = &self.movement.path;
        let seg = (u.floor() as usize).min(path.len() - 2);
        let frac = u - seg as f32;
        Some((path[seg], path[seg + 1], frac))
    }
}

impl Default for TurnAnim {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let anim = TurnAnim::new();
        assert!(!anim.active());
        assert_eq!(anim.phase(), TurnPhase::None);
        assert_eq!(anim.move_progress(), None);
        assert_eq!(anim.spawn_scale(0), None);
    }

    #[test]
    fn degenerate_durations_are_normalized() {
        let anim = TurnAnim::with_durations(0.0, -1.0, f32::NAN);
        assert_eq!(
            anim.durations(),
            (MOVE_DURATION, CLEAR_DURATION, SPAWN_DURATION)
        );
        let anim = TurnAnim::with_durations(0.5, 0.25, 0.75);
        assert_eq!(anim.durations(), (0.5, 0.25, 0.75));
    }

    #[test]
    fn reset_keeps_durations() {
        let mut anim = TurnAnim::with_durations(1.0, 2.0, 3.0);
        let board = Board::new();
        anim.start(&board, &board, None, None, &[]);
        anim.reset();
        assert!(!anim.active());
        assert_eq!(anim.durations(), (1.0, 2.0, 3.0));
    }

    #[test]
    fn move_segment_walks_path() {
        let mut before = Board::new();
        before.set_index(0, 3);
        let mut after = Board::new();
        after.set_index(2, 3);

        let mut anim = TurnAnim::new();
        let mut render = Board::new();
        anim.start(&before, &after, Some(0), Some(2), &[0, 1, 2]);

        assert_eq!(anim.move_segment(), Some((0, 1, 0.0)));
        anim.update(MOVE_DURATION * 0.75, &mut render);
        let (a, b, frac) = anim.move_segment().unwrap();
        assert_eq!((a, b), (1, 2));
        assert!((frac - 0.5).abs() < 1e-4);
    }

    #[test]
    fn single_node_path_has_no_progress() {
        let mut before = Board::new();
        before.set_index(4, 1);
        let mut anim = TurnAnim::new();
        anim.start(&before, &before, Some(4), Some(4), &[4]);
        assert!(anim.active());
        assert!(!anim.movement().active);
        assert_eq!(anim.move_progress(), None);
    }
}
