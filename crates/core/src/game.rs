//! Game module - the Lines-98 rules engine
//!
//! Owns the board, selection, score, next-color preview and RNG. The only
//! mutating entry point during play is [`Game::click`]; everything else is a query.
//!
//! States are implicit in `(game_over, selected)`:
//! Playing without selection, Playing with a selection, and GameOver (terminal).

use crate::board::{index_of, Board};
use crate::path::is_reachable;
use crate::rng::XorShiftRng;
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, ClickAction, COLOR_COUNT, EMPTY, INITIAL_BALLS, NEXT_COUNT};

/// Bookkeeping for the most recently resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnReport {
    /// Balls removed by lines the move completed
    pub cleared_by_move: u32,
    /// Balls placed from the preview (0 when the move cleared something)
    pub spawned: u32,
    /// Balls removed by lines the spawn completed
    pub cleared_by_spawn: u32,
    /// Points added to the score this turn
    pub points: u32,
}

impl TurnReport {
    /// Total balls removed this turn
    pub fn cleared(&self) -> u32 {
        self.cleared_by_move + self.cleared_by_spawn
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    next_colors: [Cell; NEXT_COUNT],
    selected: Option<usize>,
    score: u32,
    game_over: bool,
    rng: XorShiftRng,
    /// Seed passed to the last `init` / `from_board`
    seed: u32,
    /// Last resolved turn (consumed by observers such as the turn log).
    last_turn: Option<TurnReport>,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(),
            next_colors: [EMPTY; NEXT_COUNT],
            selected: None,
            score: 0,
            game_over: false,
            rng: XorShiftRng::new(seed),
            seed,
            last_turn: None,
        };
        game.init(seed);
        game
    }

    /// Build a game around a prepared board.
    ///
    /// The RNG is seeded with `seed`; preview entries outside `1..=COLOR_COUNT`
    /// are replaced by fresh draws. A full board starts out game over.
    pub fn from_board(board: Board, next_colors: [Cell; NEXT_COUNT], seed: u32) -> Self {
        let mut rng = XorShiftRng::new(seed);
        let mut next = next_colors;
        for color in &mut next {
            if *color == EMPTY || *color > COLOR_COUNT {
                *color = rng.next_color();
            }
        }

        Self {
            game_over: board.is_full(),
            board,
            next_colors: next,
            selected: None,
            score: 0,
            rng,
            seed,
            last_turn: None,
        }
    }

    /// Reset to a fresh game: empty board, new preview, five random balls.
    pub fn init(&mut self, seed: u32) {
        self.board.clear();
        self.rng.seed(seed);
        self.seed = seed;
        self.selected = None;
        self.score = 0;
        self.game_over = false;
        self.last_turn = None;

        self.generate_next();

        let mut initial = [EMPTY; INITIAL_BALLS];
        for color in &mut initial {
            *color = self.rng.next_color();
        }
        self.spawn_random_balls(&initial);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_colors(&self) -> &[Cell; NEXT_COUNT] {
        &self.next_colors
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn last_turn(&self) -> Option<TurnReport> {
        self.last_turn
    }

    /// Color at (row, col); `0` for empty cells and coordinates off the board.
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        self.board.get(row, col).unwrap_or(EMPTY)
    }

    /// Count of empty cells
    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    /// Whether the ball at (from_row, from_col) can travel to (to_row, to_col)
    /// through orthogonally connected empty cells.
    pub fn can_reach(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match (index_of(from_row, from_col), index_of(to_row, to_col)) {
            (Some(from), Some(to)) => is_reachable(&self.board, from, to),
            _ => false,
        }
    }

    /// Apply one board click.
    ///
    /// - occupied cell: becomes the selection
    /// - empty cell reachable from the selection: the ball moves and the turn resolves
    /// - anything else (off board, game over, no selection, unreachable): no change
    pub fn click(&mut self, row: i32, col: i32) -> ClickAction {
        if self.game_over {
            return ClickAction::Invalid;
        }
        let Some(idx) = index_of(row, col) else {
            return ClickAction::Invalid;
        };

        if !self.board.is_empty_at(idx) {
            self.selected = Some(idx);
            return ClickAction::Selected;
        }

        let Some(from) = self.selected else {
            return ClickAction::Invalid;
        };
        if !is_reachable(&self.board, from, idx) {
            return ClickAction::Invalid;
        }

        let color = self.board.get_index(from);
        self.board.set_index(from, EMPTY);
        self.board.set_index(idx, color);

        if self.finish_turn() {
            ClickAction::GameOver
        } else {
            ClickAction::Moved
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.board_hash = self.board.fingerprint();
        out.next_colors = self.next_colors;
        out.selected = self.selected;
        out.score = self.score;
        out.game_over = self.game_over;
        out.empty_cells = self.board.empty_count() as u32;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Resolve the turn after a successful move.
    /// Returns true when the board is full (game over).
    fn finish_turn(&mut self) -> bool {
        let mut report = TurnReport::default();

        report.cleared_by_move = self.resolve_lines() as u32;
        if report.cleared_by_move == 0 {
            let colors = self.next_colors;
            report.spawned = self.spawn_random_balls(&colors) as u32;
            report.cleared_by_spawn = self.resolve_lines() as u32;
        }
        report.points = line_clear_score(report.cleared_by_move as usize)
            + line_clear_score(report.cleared_by_spawn as usize);

        self.generate_next();
        self.selected = None;
        self.last_turn = Some(report);

        if self.board.is_full() {
            self.game_over = true;
        }
        self.game_over
    }

    /// Clear completed lines and add their score. Returns cells cleared.
    fn resolve_lines(&mut self) -> usize {
        let cleared = self.board.clear_lines();
        self.score = self.score.saturating_add(line_clear_score(cleared));
        cleared
    }

    fn generate_next(&mut self) {
        for color in &mut self.next_colors {
            *color = self.rng.next_color();
        }
    }

    /// Place `colors` into distinct random empty cells, stopping when the board
    /// fills up. Returns the number of balls placed.
    fn spawn_random_balls(&mut self, colors: &[Cell]) -> usize {
        let mut empties = self.board.empty_indices();
        let mut placed = 0;

        for &color in colors {
            if empties.is_empty() {
                break;
            }
            let pick = self.rng.next_range(empties.len() as u32) as usize;
            let idx = empties.swap_remove(pick);
            self.board.set_index(idx, color);
            placed += 1;
        }
        placed
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
