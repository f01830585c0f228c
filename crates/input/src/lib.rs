//! Terminal input module (engine-facing).
//!
//! Turns raw player input into [`crate::types::Command`]s. Two sources are
//! supported: whole lines typed at the prompt ([`line`]) and crossterm key
//! events from the raw-mode front end ([`map`]). Nothing here touches the board.

pub mod line;
pub mod map;

pub use tui_2048_types as types;

pub use line::parse_line;
pub use map::{handle_key_event, should_quit};
