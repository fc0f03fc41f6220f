//! Path search over empty cells.
//!
//! Balls travel through 4-connected empty cells (no diagonals). Both queries run
//! a breadth-first search with a fixed-size queue, so nothing is allocated and
//! the first path found is a shortest one.

use arrayvec::ArrayVec;

use crate::board::{row_col, Board};
use crate::types::CELLS;

/// Cell indices from source to destination, both inclusive
pub type Path = ArrayVec<usize, CELLS>;

/// Neighbour order: up, down, left, right
const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const NO_PREV: usize = usize::MAX;

fn neighbours(idx: usize) -> impl Iterator<Item = usize> {
    let (row, col) = row_col(idx);
    NEIGHBOURS.iter().filter_map(move |&(dr, dc)| {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        crate::board::index_of(r, c)
    })
}

/// Check whether a ball at `from` can travel to the empty cell `to`.
///
/// `from == to` is always reachable. Otherwise the source must hold a ball and
/// the destination must be empty.
pub fn is_reachable(board: &Board, from: usize, to: usize) -> bool {
    if from >= CELLS || to >= CELLS {
        return false;
    }
    if from == to {
        return true;
    }
    if board.is_empty_at(from) || !board.is_empty_at(to) {
        return false;
    }

    let mut queue = [0usize; CELLS];
    let mut visited = [false; CELLS];
    let (mut head, mut tail) = (0, 0);

    queue[tail] = from;
    tail += 1;
    visited[from] = true;

    while head < tail {
        let cur = queue[head];
        head += 1;

        for next in neighbours(cur) {
            if visited[next] {
                continue;
            }
            if next == to {
                return true;
            }
            if board.is_empty_at(next) {
                visited[next] = true;
                queue[tail] = next;
                tail += 1;
            }
        }
    }

    false
}

/// Shortest path for a ball at `from` to the cell `to`, walking empty cells only.
///
/// The destination itself may be occupied (it is only ever entered last).
/// Returns `[from]` when `from == to` and `None` when no path exists.
pub fn shortest_path(board: &Board, from: usize, to: usize) -> Option<Path> {
    if from >= CELLS || to >= CELLS {
        return None;
    }

    let mut path = Path::new();
    if from == to {
        path.push(from);
        return Some(path);
    }

    let mut prev = [NO_PREV; CELLS];
    let mut queue = [0usize; CELLS];
    let (mut head, mut tail) = (0, 0);

    queue[tail] = from;
    tail += 1;
    prev[from] = from;

    let mut found = false;
    'search: while head < tail {
        let cur = queue[head];
        head += 1;

        for next in neighbours(cur) {
            if prev[next] != NO_PREV {
                continue;
            }
            if next != to && !board.is_empty_at(next) {
                continue;
            }

            prev[next] = cur;
            if next == to {
                found = true;
                break 'search;
            }
            queue[tail] = next;
            tail += 1;
        }
    }

    if !found {
        return None;
    }

    let mut cur = to;
    while cur != from {
        path.push(cur);
        cur = prev[cur];
    }
    path.push(from);
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::index_of;
    use crate::types::BOARD_SIZE;

    fn manhattan(a: usize, b: usize) -> usize {
        let (ar, ac) = (a / BOARD_SIZE, a % BOARD_SIZE);
        let (br, bc) = (b / BOARD_SIZE, b % BOARD_SIZE);
        ar.abs_diff(br) + ac.abs_diff(bc)
    }

    fn idx(row: i32, col: i32) -> usize {
        index_of(row, col).unwrap()
    }

    #[test]
    fn open_board_path_is_manhattan_shortest() {
        let mut board = Board::new();
        board.set(0, 0, 1);

        let path = shortest_path(&board, idx(0, 0), idx(8, 8)).unwrap();
        assert_eq!(path.len(), manhattan(idx(0, 0), idx(8, 8)) + 1);
        assert_eq!(path[0], idx(0, 0));
        assert_eq!(*path.last().unwrap(), idx(8, 8));
    }

    #[test]
    fn path_steps_are_orthogonal_neighbours() {
        let mut board = Board::new();
        board.set(4, 0, 2);
        // Wall with a gap at the bottom.
        for row in 0..8 {
            board.set(row, 4, 3);
        }

        let path = shortest_path(&board, idx(4, 0), idx(0, 8)).unwrap();
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
        }
        assert!(path.contains(&idx(8, 4)));
    }

    #[test]
    fn same_cell_path_has_one_node() {
        let board = Board::new();
        let path = shortest_path(&board, 10, 10).unwrap();
        assert_eq!(path.as_slice(), &[10]);
        assert!(is_reachable(&board, 10, 10));
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let mut board = Board::new();
        board.set(8, 8, 1);
        board.set(0, 1, 2);
        board.set(1, 0, 2);

        assert!(!is_reachable(&board, idx(8, 8), idx(0, 0)));
        assert!(shortest_path(&board, idx(8, 8), idx(0, 0)).is_none());
    }

    #[test]
    fn reachability_needs_ball_and_empty_target() {
        let mut board = Board::new();
        board.set(0, 0, 1);
        board.set(0, 2, 1);

        assert!(!is_reachable(&board, idx(5, 5), idx(6, 6)));
        assert!(!is_reachable(&board, idx(0, 0), idx(0, 2)));
        assert!(!is_reachable(&board, CELLS, 0));
    }
}
