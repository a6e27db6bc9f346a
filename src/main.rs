use std::io;
use std::process::ExitCode;

use clap::Parser;

use maze_game::config::{Args, InputMode};
use maze_game::input::{KeySource, LineSource};
use maze_game::render::{LineRenderer, TermRenderer};
use maze_game::rng::{self, MazeRng};
use maze_game::terminal::TerminalGuard;
use maze_game::{logging, session, Game, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("maze: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level())?;
    }

    let seed = args.seed();
    let mut rng = rng::seeded(seed);
    let mut game = Game::new(&mut rng, args.max_attempts)?;
    log::info!("starting, seed {:?}, input {:?}", seed, args.input);

    match args.input {
        InputMode::Keys => run_keys(&mut game, &mut rng),
        InputMode::Line => {
            let stdin = io::stdin();
            session::play(
                &mut game,
                &mut rng,
                &mut LineSource::new(stdin.lock()),
                &mut LineRenderer::new(io::stdout()),
            )
        }
    }
}

fn run_keys(game: &mut Game, rng: &mut MazeRng) -> Result<()> {
    let _guard = TerminalGuard::enter(io::stdout())?;
    session::play(
        game,
        rng,
        &mut KeySource,
        &mut TermRenderer::new(io::stdout()),
    )
}
