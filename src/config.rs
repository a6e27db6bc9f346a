use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::LevelFilter;

/// Environment fallback for `--seed`.
pub const SEED_ENV: &str = "MAZE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Raw-mode keyboard, one keypress per command.
    Keys,
    /// One command per line on stdin.
    Line,
}

#[derive(Debug, Parser)]
#[command(name = "maze", version, about = "Walk through randomly generated rooms")]
pub struct Args {
    /// Seed for reproducible rooms.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = InputMode::Keys)]
    pub input: InputMode,

    /// Give up after this many unsolvable boards in a row.
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Args {
    /// `--seed`, else a parsable `MAZE_SEED`, else none.
    pub fn seed(&self) -> Option<u64> {
        self.seed.or_else(|| {
            std::env::var(SEED_ENV)
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        self.verbose.log_level_filter()
    }
}
