use tui_lines::core::{index_of, line_clear_score, row_col, Board};
use tui_lines::types::{CELLS, EMPTY};

fn board_with(cells: &[(i32, i32, u8)]) -> Board {
    let mut board = Board::new();
    for &(row, col, color) in cells {
        assert!(board.set(row, col, color));
    }
    board
}

fn marked(board: &Board) -> Vec<(usize, usize)> {
    board
        .line_mask()
        .iter()
        .enumerate()
        .filter(|&(_, &m)| m)
        .map(|(i, _)| row_col(i))
        .collect()
}

#[test]
fn test_horizontal_and_vertical_runs() {
    let horizontal: Vec<_> = (2..7).map(|c| (8, c, 4)).collect();
    let board = board_with(&horizontal);
    assert_eq!(marked(&board), (2..7).map(|c| (8, c)).collect::<Vec<_>>());

    let vertical: Vec<_> = (0..6).map(|r| (r, 0, 1)).collect();
    let board = board_with(&vertical);
    assert_eq!(marked(&board).len(), 6);
}

#[test]
fn test_diagonal_down_right_run() {
    let cells: Vec<_> = (0..9).map(|i| (i, i, 7)).collect();
    let mut board = board_with(&cells);
    assert_eq!(board.clear_lines(), 9);
    assert_eq!(board.empty_count(), CELLS);
}

#[test]
fn test_plus_shape_is_unioned() {
    // Horizontal and vertical runs of 5 crossing at (4,4): 9 distinct cells.
    let mut cells: Vec<_> = (2..7).map(|c| (4, c, 2)).collect();
    cells.extend((2..7).filter(|&r| r != 4).map(|r| (r, 4, 2)));
    let mut board = board_with(&cells);
    assert_eq!(board.clear_lines(), 9);
    assert_eq!(line_clear_score(9), 42);
}

#[test]
fn test_independent_runs_clear_together() {
    let mut cells: Vec<_> = (0..5).map(|c| (0, c, 1)).collect();
    cells.extend((0..5).map(|c| (8, c + 4, 3)));
    cells.push((5, 5, 6));
    let mut board = board_with(&cells);
    assert_eq!(board.clear_lines(), 10);
    assert_eq!(board.get(5, 5), Some(6));
}

#[test]
fn test_broken_run_is_not_cleared() {
    let mut board = board_with(&[(3, 0, 5), (3, 1, 5), (3, 2, 5), (3, 3, 2), (3, 4, 5), (3, 5, 5)]);
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board.empty_count(), CELLS - 6);
}

#[test]
fn test_bounds_and_index_helpers() {
    assert_eq!(index_of(0, 0), Some(0));
    assert_eq!(index_of(8, 8), Some(80));
    assert_eq!(index_of(9, 0), None);
    assert_eq!(index_of(0, -1), None);
    assert_eq!(row_col(40), (4, 4));

    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert!(!board.set(0, 9, 1));
    assert_eq!(board.get_index(81), EMPTY);
    assert!(!board.set_index(81, 1));
}

#[test]
fn test_fingerprint_tracks_contents() {
    let a = board_with(&[(0, 0, 1)]);
    let b = board_with(&[(0, 0, 2)]);
    let c = board_with(&[(0, 0, 1)]);
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint(), c.fingerprint());
    assert_ne!(Board::new().fingerprint(), a.fingerprint());
}
