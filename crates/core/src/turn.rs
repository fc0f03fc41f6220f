//! Turn controller - routes one click through the game and captures what the
//! animation layer needs: the board before the click, the moving ball's path
//! and the score delta.
//!
//! No game rules live here. The path is computed on the pre-click board purely
//! for presentation; whether the move is legal is decided by [`Game::click`].

use crate::board::{index_of, Board};
use crate::game::Game;
use crate::path::{shortest_path, Path};
use crate::types::ClickAction;

/// Everything observed about one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnClickResult {
    pub action: ClickAction,
    /// `action` is `Moved` or `GameOver`
    pub has_move_animation: bool,
    /// Selection at click time, when the clicked cell was empty
    pub from: Option<usize>,
    /// Clicked cell (any in-bounds click)
    pub to: Option<usize>,
    /// Shortest path `from -> to` on the pre-click board, empty if none
    pub path: Path,
    pub score_before: u32,
    pub score_after: u32,
    pub before_board: Board,
}

impl TurnClickResult {
    pub fn clear(&mut self) {
        self.action = ClickAction::Invalid;
        self.has_move_animation = false;
        self.from = None;
        self.to = None;
        self.path.clear();
        self.score_before = 0;
        self.score_after = 0;
        self.before_board.clear();
    }

    /// The move raised the score (some line was cleared)
    pub fn scored(&self) -> bool {
        self.score_after > self.score_before
    }
}

impl Default for TurnClickResult {
    fn default() -> Self {
        Self {
            action: ClickAction::Invalid,
            has_move_animation: false,
            from: None,
            to: None,
            path: Path::new(),
            score_before: 0,
            score_after: 0,
            before_board: Board::new(),
        }
    }
}

/// Process one click, writing into an existing result.
pub fn click_into(game: &mut Game, row: i32, col: i32, out: &mut TurnClickResult) {
    out.clear();

    let Some(to) = index_of(row, col) else {
        return;
    };

    out.before_board = *game.board();
    out.score_before = game.score();
    out.to = Some(to);

    if let Some(from) = game.selected() {
        if out.before_board.is_empty_at(to) {
            out.from = Some(from);
            if let Some(path) = shortest_path(&out.before_board, from, to) {
                out.path = path;
            }
        }
    }

    out.action = game.click(row, col);
    out.score_after = game.score();
    out.has_move_animation = out.action.starts_animation();
}

/// Process one click.
pub fn click(game: &mut Game, row: i32, col: i32) -> TurnClickResult {
    let mut out = TurnClickResult::default();
    click_into(game, row, col, &mut out);
    out
}
