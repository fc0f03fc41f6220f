use crate::types::{Cell, BOARD_SIZE, NEXT_COUNT};

/// Renderer-facing copy of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub board_hash: u64,
    pub next_colors: [Cell; NEXT_COUNT],
    pub selected: Option<usize>,
    pub score: u32,
    pub game_over: bool,
    pub empty_cells: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.board_hash = 0;
        self.next_colors = [0; NEXT_COUNT];
        self.selected = None;
        self.score = 0;
        self.game_over = false;
        self.empty_cells = 0;
        self.seed = 0;
    }

    /// Cell at (row, col), `0` off the board
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Fingerprint over everything visible in a static frame
    pub fn fingerprint(&self) -> u64 {
        let mut h = self.board_hash;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0000_0100_0000_01B3);
        };
        for &c in self.next_colors.iter() {
            mix(c as u64);
        }
        mix(self.selected.map(|s| s as u64 + 1).unwrap_or(0));
        mix(self.score as u64);
        mix(self.game_over as u64);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            board_hash: 0,
            next_colors: [0; NEXT_COUNT],
            selected: None,
            score: 0,
            game_over: false,
            empty_cells: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
