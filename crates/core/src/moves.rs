//! Move engine - slides and merges tiles toward one edge
//!
//! Only the leftward merge is implemented directly; the other directions are
//! derived from it by mirroring rows and/or transposing the board.
//!
//! # Merge rule
//!
//! For each row, positions `c = 0, 1, 2` are visited once, in order. For each
//! `c`, the first non-empty cell `k > c` is located and exactly one of the
//! following happens before moving on to `c + 1`:
//!
//! - cell `c` is empty: the tile at `k` moves to `c`
//! - cell `c` holds the same value: `c` doubles and `k` is emptied
//! - otherwise: nothing
//!
//! A position is never revisited, so merges do not cascade and a single call
//! may leave gaps. `[2, 2, 2, 2]` becomes `[4, 2, 2, 0]`, not `[4, 4, 0, 0]`.

use crate::board::{Board, Row};
use crate::types::{Direction, BOARD_SIZE};

/// Merge one row toward index 0. Returns true if any cell changed.
pub fn merge_row_left(row: &mut Row) -> bool {
    let mut changed = false;

    for c in 0..BOARD_SIZE - 1 {
        let Some(k) = (c + 1..BOARD_SIZE).find(|&k| row[k] != 0) else {
            continue;
        };

        if row[c] == 0 {
            row[c] = row[k];
            row[k] = 0;
            changed = true;
        } else if row[c] == row[k] {
            row[c] *= 2;
            row[k] = 0;
            changed = true;
        }
    }

    changed
}

/// Apply [`merge_row_left`] to every row.
///
/// Every row is processed even after one reports a change.
pub fn slide_left(board: &mut Board) -> bool {
    let mut changed = false;
    for r in 0..BOARD_SIZE {
        let mut row = board.row(r);
        changed |= merge_row_left(&mut row);
        board.set_row(r, row);
    }
    changed
}

fn slide_right(board: &mut Board) -> bool {
    let mut mirrored = board.reverse_rows();
    let changed = slide_left(&mut mirrored);
    *board = mirrored.reverse_rows();
    changed
}

/// Slide the board in `direction`. Returns true if any cell changed.
pub fn apply(board: &mut Board, direction: Direction) -> bool {
    match direction {
        Direction::Left => slide_left(board),
        Direction::Right => slide_right(board),
        Direction::Up => {
            let mut t = board.transpose();
            let changed = slide_left(&mut t);
            *board = t.transpose();
            changed
        }
        Direction::Down => {
            let mut t = board.transpose();
            let changed = slide_right(&mut t);
            *board = t.transpose();
            changed
        }
    }
}

impl Board {
    /// Slide this board in `direction`. See [`apply`].
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        apply(self, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(mut row: Row) -> (Row, bool) {
        let changed = merge_row_left(&mut row);
        (row, changed)
    }

    #[test]
    fn test_four_equal_tiles_do_not_cascade() {
        assert_eq!(left([2, 2, 2, 2]), ([4, 2, 2, 0], true));
    }

    #[test]
    fn test_merge_across_gap() {
        assert_eq!(left([4, 0, 4, 0]), ([8, 0, 0, 0], true));
    }

    #[test]
    fn test_shift_does_not_merge_in_same_pass() {
        // Position 0 takes the first tile and stops scanning.
        assert_eq!(left([0, 2, 2, 0]), ([2, 2, 0, 0], true));
        assert_eq!(left([0, 0, 0, 2]), ([2, 0, 0, 0], true));
    }

    #[test]
    fn test_blocked_row_is_unchanged() {
        assert_eq!(left([2, 4, 8, 16]), ([2, 4, 8, 16], false));
        assert_eq!(left([2, 4, 0, 0]), ([2, 4, 0, 0], false));
        assert_eq!(left([0, 0, 0, 0]), ([0, 0, 0, 0], false));
    }

    #[test]
    fn test_different_neighbor_stops_scan() {
        // 2 at c=0 sees 4 first and cannot reach the 2 behind it.
        assert_eq!(left([2, 4, 2, 0]), ([2, 4, 2, 0], false));
        assert_eq!(left([2, 0, 4, 4]), ([2, 4, 4, 0], true));
    }

    #[test]
    fn test_merged_value_is_not_merged_again() {
        assert_eq!(left([4, 4, 8, 0]), ([8, 8, 0, 0], true));
    }

    #[test]
    fn test_right_mirrors_left() {
        let mut board = Board::from_rows([[2, 4, 0, 0], [2, 2, 2, 2], [0; 4], [0, 4, 0, 4]]);
        assert!(apply(&mut board, Direction::Right));
        assert_eq!(board.row(0), [0, 0, 2, 4]);
        assert_eq!(board.row(1), [0, 2, 2, 4]);
        assert_eq!(board.row(2), [0; 4]);
        assert_eq!(board.row(3), [0, 0, 0, 8]);
    }

    #[test]
    fn test_up_and_down_work_on_columns() {
        let start = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 4], [0, 0, 0, 0], [4, 0, 0, 4]]);

        let mut up = start;
        assert!(up.apply_move(Direction::Up));
        // Column 3 ([0, 4, 0, 4]) shifts twice instead of merging.
        assert_eq!(up.rows(), [[4, 0, 0, 4], [4, 0, 0, 4], [0; 4], [0; 4]]);

        let mut down = start;
        assert!(down.apply_move(Direction::Down));
        assert_eq!(down.rows(), [[0; 4], [2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 8]]);
    }

    #[test]
    fn test_empty_board_never_changes() {
        for dir in Direction::ALL {
            let mut board = Board::new();
            assert!(!apply(&mut board, dir));
            assert_eq!(board, Board::new());
        }
    }

    #[test]
    fn test_changed_flag_ors_all_rows() {
        // Only the last row can move; earlier unchanged rows must not hide it.
        let mut board = Board::from_rows([[2, 4, 8, 16], [2, 4, 8, 16], [2, 4, 8, 16], [0, 0, 0, 2]]);
        assert!(slide_left(&mut board));
        assert_eq!(board.row(3), [2, 0, 0, 0]);
    }
}
