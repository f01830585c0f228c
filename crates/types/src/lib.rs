//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, line-mode prompt, terminal rendering).
//!
//! # Board Dimensions
//!
//! The grid is always 4x4. Cells are addressed as `(row, col)` with row 0 at the
//! top and col 0 on the left; storage is flat and row-major.
//!
//! # Text Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_TEXT_WIDTH` | 4 | Each cell is right-justified to this width |
//! | `SEPARATOR_WIDTH` | 25 | Width of the `=` line above and below the grid |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, BOARD_SIZE};
//!
//! assert_eq!(Direction::from_str("W"), Some(Direction::Up));
//! assert_eq!(Command::from_str("q"), Some(Command::Quit));
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Side length of the square board (4 cells)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board (16)
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Values a freshly spawned tile may take, drawn with equal probability
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Number of tiles placed when a new session starts
pub const INITIAL_TILES: usize = 2;

/// Right-justified width of a cell in the text rendering
pub const CELL_TEXT_WIDTH: usize = 4;

/// Width of the `=` separator line in the text rendering
pub const SEPARATOR_WIDTH: usize = 25;

/// Direction tiles slide toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in key order (w, s, a, d).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from its key or name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("a"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" | "up" => Some(Direction::Up),
            "s" | "down" => Some(Direction::Down),
            "a" | "left" => Some(Direction::Left),
            "d" | "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Key bound to this direction in the line prompt
    pub fn key(&self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'a',
            Direction::Right => 'd',
        }
    }
}

/// A single player instruction for the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Parse a command from a single prompt token (case-insensitive).
    ///
    /// Only the single-character tokens `w`, `s`, `a`, `d` and `q` are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" => Some(Command::Move(Direction::Up)),
            "s" => Some(Command::Move(Direction::Down)),
            "a" => Some(Command::Move(Direction::Left)),
            "d" => Some(Command::Move(Direction::Right)),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}
