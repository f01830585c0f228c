//! Tile spawner - places one new tile on a random empty cell

use log::debug;

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::{BOARD_SIZE, SPAWN_VALUES};

/// Where a tile was placed and with which value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    /// Flat, row-major cell index
    pub index: usize,
    pub value: u32,
}

impl Spawned {
    pub fn row(&self) -> usize {
        self.index / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.index % BOARD_SIZE
    }
}

/// Place a 2 or 4 (equal odds) on a uniformly chosen empty cell.
///
/// The cell is drawn before the value. A full board is left untouched and
/// `None` is returned.
pub fn spawn<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawned> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let index = empty[rng.next_range(empty.len() as u32) as usize];
    let value = SPAWN_VALUES[rng.next_range(SPAWN_VALUES.len() as u32) as usize];
    board.set_flat(index, value);

    let spawned = Spawned { index, value };
    debug!(
        "spawned {} at ({}, {})",
        value,
        spawned.row(),
        spawned.col()
    );
    Some(spawned)
}
