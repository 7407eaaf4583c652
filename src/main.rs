mod cli;
mod config;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{error, info};

use rchess::store::{Backend, BoardStore, FileBackend, StoreError};
use rchess::ui::{BoardRenderer, GlyphSet};
use rchess::Game;

fn main() -> ExitCode {
    // Initialize logger
    let env = Env::default().filter_or("RCHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path = std::env::var_os("RCHESS_CONFIG_PATH").map(|s| s.into());
    let cfg = match config::Config::load(cfg_path.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(command) = cli.command else {
        // If no subcommand, print help
        if let Err(e) = cli::Cli::command().print_help() {
            error!("failed to print help: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let owner = cli.owner.unwrap_or_else(|| cfg.default_owner.clone());
    let mut store = BoardStore::new(FileBackend::new(cfg.data_dir.clone()));
    match run(&mut store, &owner, command, cfg.glyphs) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Handle one request. `Ok(false)` means the move was rejected.
fn run<B: Backend>(
    store: &mut BoardStore<B>,
    owner: &str,
    command: cli::Commands,
    glyphs: GlyphSet,
) -> Result<bool, StoreError> {
    match command {
        cli::Commands::Show => {
            let game = store.open(owner)?;
            print_game(&game, glyphs);
        }
        cli::Commands::New | cli::Commands::Reset => {
            let game = store.reset(owner)?;
            print_game(&game, glyphs);
        }
        cli::Commands::Move {
            source,
            destination,
        } => {
            store.open(owner)?;
            let outcome = store.play(owner, &source, &destination)?;
            let game = store.open(owner)?;
            print_game(&game, glyphs);
            if !outcome.accepted {
                println!("{}", outcome.message);
                return Ok(false);
            }
        }
        cli::Commands::End => {
            if store.end(owner)? {
                println!("Game for {owner} ended.");
            } else {
                info!("{owner} had no game to end");
            }
        }
    }
    Ok(true)
}

fn print_game(game: &Game, glyphs: GlyphSet) {
    print!("{}", BoardRenderer::render(&game.board.snapshot(), glyphs));
    println!("{} to move", game.turn);
}
