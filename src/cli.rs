use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rchess", version, about = "Two-player chess board with a saved game per player")]
pub struct Cli {
    /// Player whose board is used; defaults to `default_owner` from the config
    #[arg(short, long, global = true)]
    pub owner: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board, starting a game on the first visit
    Show,
    /// Start a new game with white to move
    New,
    /// Put every piece back on its starting square, white to move
    Reset,
    /// Move a piece, e.g. `rchess move e2 e4`
    Move { source: String, destination: String },
    /// End the game and discard the board
    End,
}
