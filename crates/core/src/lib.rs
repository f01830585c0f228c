//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the move/merge rules and the tile spawner.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and same moves produce identical sessions
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Runs behind the line prompt, the TUI, or headless
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 flat grid with transpose/mirror helpers
//! - [`moves`]: leftward merge and the three directions derived from it
//! - [`spawn`]: random 2/4 tile placement on an empty cell
//! - [`rng`]: injectable random source with a seedable LCG
//! - [`game`]: one play session tying the above together
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Game};
//! use tui_2048_types::Direction;
//!
//! let mut board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
//! assert!(board.apply_move(Direction::Left));
//! assert_eq!(board.row(0), [4, 2, 2, 0]);
//!
//! let game = Game::new(12345);
//! assert_eq!(game.board().count_tiles(), 2);
//! ```

pub mod board;
pub mod game;
pub mod moves;
pub mod rng;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_tile, Board, Row};
pub use game::{Game, Outcome};
pub use rng::{RandomSource, SimpleRng};
pub use spawn::{spawn, Spawned};
