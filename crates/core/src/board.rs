//! Board module - manages the 4x4 tile grid
//!
//! Each cell holds `0` (empty) or a tile value that is a power of two >= 2.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where both range 0..3; row 0 is the top edge.

use arrayvec::ArrayVec;

use crate::types::{BOARD_SIZE, CELL_COUNT};

/// One row (or, after a transpose, one column) of the board
pub type Row = [u32; BOARD_SIZE];

/// Returns true if `value` may appear in a cell: `0` or a power of two >= 2.
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from a flat row-major array
    pub fn from_cells(cells: [u32; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build a board from rows, top row first
    pub fn from_rows(rows: [Row; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.set_row(r, *row);
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Copy of row `r`. Panics if `r` is out of bounds.
    pub fn row(&self, r: usize) -> Row {
        let start = r * BOARD_SIZE;
        let mut out = [0; BOARD_SIZE];
        out.copy_from_slice(&self.cells[start..start + BOARD_SIZE]);
        out
    }

    /// Overwrite row `r`. Panics if `r` is out of bounds.
    pub fn set_row(&mut self, r: usize, row: Row) {
        let start = r * BOARD_SIZE;
        self.cells[start..start + BOARD_SIZE].copy_from_slice(&row);
    }

    /// All rows, top first
    pub fn rows(&self) -> [Row; BOARD_SIZE] {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            *row = self.row(r);
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Write a value by flat index. Returns false if out of bounds.
    pub(crate) fn set_flat(&mut self, idx: usize, value: u32) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// New board with rows and columns swapped (cell (r, c) moves to (c, r))
    pub fn transpose(&self) -> Board {
        let mut out = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                out.cells[c * BOARD_SIZE + r] = self.cells[r * BOARD_SIZE + c];
            }
        }
        out
    }

    /// New board with every row mirrored left-to-right
    pub fn reverse_rows(&self) -> Board {
        let mut out = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                out.cells[r * BOARD_SIZE + (BOARD_SIZE - 1 - c)] = self.cells[r * BOARD_SIZE + c];
            }
        }
        out
    }

    /// Flat indices of empty cells, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check that every cell holds 0 or a power of two >= 2
    pub fn is_valid(&self) -> bool {
        self.cells.iter().all(|&v| is_valid_tile(v))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}
