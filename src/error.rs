use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no solvable room after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = core::result::Result<T, GameError>;
