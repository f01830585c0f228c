//! Prompt-line parsing for the line-mode front end.

use crate::types::Command;

/// Parse one line typed at the prompt.
///
/// Surrounding whitespace (including the trailing newline) is ignored and
/// matching is case-insensitive. The trimmed line must be exactly one of the
/// tokens `w`, `s`, `a`, `d` or `q`; anything else yields `None` and the
/// caller skips the turn.
pub fn parse_line(line: &str) -> Option<Command> {
    Command::from_str(line.trim())
}
