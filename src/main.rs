//! Terminal 2048 runner (default binary).
//!
//! Line mode prints the board and reads one command per line from stdin.
//! TUI mode uses crossterm raw mode and the framebuffer renderer.

mod cli;
mod logging;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_2048::core::Game;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{run_line_session, GameView, TerminalRenderer, Viewport};

use cli::{Cli, Mode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_path.as_deref())?;

    let seed = cli.resolve_seed();
    info!("starting {:?} session with seed {}", cli.mode, seed);
    let mut game = Game::new(seed);

    match cli.mode {
        Mode::Line => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_line_session(&mut game, stdin.lock(), &mut stdout)
        }
        Mode::Tui => {
            if cli.log_path.is_none() {
                warn!("logging to stderr in TUI mode; pass --log-path to keep the screen clean");
            }
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run_tui(&mut term, &mut game);

            // Always try to restore terminal state.
            let _ = term.exit();
            info!("session ended after {} moves", game.moves());
            result
        }
    }
}

fn run_tui(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game.board(), Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    game.apply_command(command);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            // Repeats, releases, mouse and focus events are ignored.
            _ => {}
        }
    }
}
