//! Game session - owns the board and the random source for one play session
//!
//! A session has no terminal state: a full board with no possible merge keeps
//! accepting commands, every one of which reports [`Outcome::Unchanged`].

use log::debug;

use crate::board::Board;
use crate::moves;
use crate::rng::{RandomSource, SimpleRng};
use crate::spawn::{spawn, Spawned};
use crate::types::{Command, Direction, INITIAL_TILES};

/// Result of feeding one command to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed and a new tile was spawned (if room remained).
    Moved,
    /// The move had no effect; nothing was spawned.
    Unchanged,
    /// The player asked to stop.
    Quit,
}

/// A single play session.
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board,
    rng: R,
    moves: u64,
}

impl Game<SimpleRng> {
    /// Start a session seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a session drawing from `rng`: empty board plus two spawned tiles.
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self::from_board(Board::new(), rng);
        for _ in 0..INITIAL_TILES {
            game.spawn();
        }
        game
    }

    /// Resume from an explicit board. No tiles are spawned.
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            rng,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Place one random tile. No-op on a full board.
    pub fn spawn(&mut self) -> Option<Spawned> {
        spawn(&mut self.board, &mut self.rng)
    }

    /// Slide in `direction`; if anything changed, spawn exactly one tile.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let changed = moves::apply(&mut self.board, direction);
        debug!("move {} changed={}", direction.as_str(), changed);
        if changed {
            self.moves += 1;
            self.spawn();
        }
        changed
    }

    pub fn apply_command(&mut self, command: Command) -> Outcome {
        match command {
            Command::Quit => Outcome::Quit,
            Command::Move(direction) => {
                if self.apply_move(direction) {
                    Outcome::Moved
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }
}
