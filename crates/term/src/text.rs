//! Plain-text board rendering for the line-mode front end.
//!
//! Layout: a blank line, a row of `=`, one line per board row framed by `|`
//! with every cell right-justified, then another row of `=`.
//!
//! ```text
//!
//! =========================
//! |    2    0    0    0 |
//! |    0    0    4    0 |
//! |    0    0    0    0 |
//! |    0    0    0    0 |
//! =========================
//! ```

use std::fmt::Write;

use crate::core::Board;
use crate::types::{CELL_TEXT_WIDTH, SEPARATOR_WIDTH};

/// Render `board` as the bordered text grid, ending with a newline.
pub fn render_text(board: &Board) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::with_capacity(8 * SEPARATOR_WIDTH);

    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in board.rows() {
        out.push_str("| ");
        for value in row {
            // Writing into a String cannot fail.
            let _ = write!(out, "{:>width$} ", value, width = CELL_TEXT_WIDTH);
        }
        out.push_str("|\n");
    }
    out.push_str(&separator);
    out.push('\n');
    out
}
