//! Command-line options. Every flag can also be set from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tui-2048")]
#[command(version, about = "Sliding-tile merging puzzle on a 4x4 grid")]
pub struct Cli {
    /// Front end to play with
    #[arg(long, value_enum, env = "TWENTY48_MODE", default_value = "line")]
    pub mode: Mode,

    /// Seed for tile spawning; the same seed and moves replay the same game
    #[arg(long, env = "TWENTY48_SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "TWENTY48_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print the board and read one line per move
    Line,
    /// Full-screen raw-mode terminal view, one key per move
    Tui,
}

impl Cli {
    /// The configured seed, or one derived from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
