//! Line-mode game loop: print the board, read a line, apply it.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{info, trace};

use crate::core::{Game, Outcome, RandomSource};
use crate::input::parse_line;
use crate::text::render_text;

pub const PROMPT: &str = "Enter move (W: up, S: down, A: left, D: right, Q: quit): ";
pub const FAREWELL: &str = "Game over!";

/// Drive `game` from `input` until `q` or end of input.
///
/// Unrecognized lines are skipped without touching the board. The board is
/// redrawn before every prompt, including after ignored or unchanged moves.
pub fn run_line_session<R, I, O>(game: &mut Game<R>, mut input: I, output: &mut O) -> Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let mut line = String::new();
    loop {
        output.write_all(render_text(game.board()).as_bytes())?;
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("end of input after {} moves", game.moves());
            writeln!(output)?;
            break;
        }

        match parse_line(&line) {
            Some(command) => {
                if game.apply_command(command) == Outcome::Quit {
                    info!("quit after {} moves", game.moves());
                    break;
                }
            }
            None => trace!("ignored input {:?}", line.trim_end()),
        }
    }

    writeln!(output, "{FAREWELL}")?;
    output.flush()?;
    Ok(())
}
