//! Terminal front-end module.
//!
//! Two ways to show the board:
//! - [`text`] + [`session`]: the plain line prompt (print grid, read a line)
//! - [`game_view`] + [`renderer`]: a raw-mode view drawn into a framebuffer and
//!   flushed with crossterm, diffing against the previous frame
//!
//! Everything except [`renderer`] and [`session`] I/O is pure and unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod session;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, KEY_HINT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::{run_line_session, FAREWELL, PROMPT};
pub use text::render_text;
