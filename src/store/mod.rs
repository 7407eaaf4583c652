//! Per-owner board state, kept in a pluggable backend.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::game::board::{Board, Snapshot};
use crate::game::mv::{MoveError, MoveOutcome};
use crate::game::piece::{Color, Occupant};
use crate::game::rules;
use crate::game::session::Game;
use crate::game::square::Square;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed game file {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("stored board for {owner:?} is corrupt: {reason}")]
    Corrupt { owner: String, reason: String },
}

/// Where games live, keyed by owner.
pub trait Backend {
    fn load(&self, owner: &str) -> Result<Option<Game>, StoreError>;
    fn save(&mut self, owner: &str, game: &Game) -> Result<(), StoreError>;
    /// Returns whether a game was stored for `owner`.
    fn remove(&mut self, owner: &str) -> Result<bool, StoreError>;
}

/// Board state store: one game per owner.
///
/// Every operation is a read-then-write against the backend with no locking.
/// Callers that serve concurrent requests must serialize them per owner.
#[derive(Debug, Default)]
pub struct BoardStore<B> {
    backend: B,
}

impl<B: Backend> BoardStore<B> {
    pub fn new(backend: B) -> Self {
        BoardStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drop any existing game for `owner` and start over from the standard
    /// layout with white to move. Calling it twice gives the same state.
    pub fn initialize(&mut self, owner: &str) -> Result<Game, StoreError> {
        self.backend.remove(owner)?;
        let game = Game::new();
        self.backend.save(owner, &game)?;
        info!("new game for {owner}");
        Ok(game)
    }

    /// Same as [`BoardStore::initialize`]; the name used for a "new game" / "reset" request.
    pub fn reset(&mut self, owner: &str) -> Result<Game, StoreError> {
        self.initialize(owner)
    }

    /// The owner's game, creating one on first visit.
    pub fn open(&mut self, owner: &str) -> Result<Game, StoreError> {
        match self.backend.load(owner)? {
            Some(game) => Ok(game),
            None => {
                info!("no board stored for {owner}, initializing");
                self.initialize(owner)
            }
        }
    }

    /// Occupant of `square`, `Empty` when nothing is recorded.
    pub fn get(&self, owner: &str, square: Square) -> Result<Occupant, StoreError> {
        Ok(self
            .backend
            .load(owner)?
            .map_or(Occupant::Empty, |game| game.board.get(square)))
    }

    /// Write an occupant, replacing what was there. An owner without a game
    /// gets an empty board first.
    pub fn set(
        &mut self,
        owner: &str,
        square: Square,
        occupant: Occupant,
    ) -> Result<(), StoreError> {
        let mut game = self.backend.load(owner)?.unwrap_or_else(|| Game {
            board: Board::empty(),
            turn: Color::White,
        });
        game.board.set(square, occupant);
        self.backend.save(owner, &game)
    }

    /// Full grid for rendering, rank 8 first. All empty when the owner has no game.
    pub fn snapshot(&self, owner: &str) -> Result<Snapshot, StoreError> {
        Ok(self
            .backend
            .load(owner)?
            .map_or_else(|| Board::empty().snapshot(), |game| game.board.snapshot()))
    }

    /// Stored side to move, white when the owner has no game.
    pub fn turn(&self, owner: &str) -> Result<Color, StoreError> {
        Ok(self.backend.load(owner)?.map_or(Color::White, |game| game.turn))
    }

    /// Validate and apply a move for `owner` with the caller-supplied turn.
    ///
    /// Accepted moves persist the new board and the returned turn. Rejections
    /// are reported in the outcome and write nothing; `Err` only means the
    /// backend failed.
    pub fn apply_move(
        &mut self,
        owner: &str,
        source: &str,
        destination: &str,
        turn: Color,
    ) -> Result<MoveOutcome, StoreError> {
        let Some(mut game) = self.backend.load(owner)? else {
            warn!("{owner}: move {source} -> {destination} with no board stored");
            return Ok(MoveOutcome::rejected(&MoveError::SourceNotFound, turn));
        };
        let outcome = rules::apply_move(&mut game.board, source, destination, turn);
        if outcome.accepted {
            game.turn = outcome.turn;
            self.backend.save(owner, &game)?;
        } else {
            warn!(
                "{owner}: {source} -> {destination} rejected: {}",
                outcome.message
            );
        }
        Ok(outcome)
    }

    /// [`BoardStore::apply_move`] using the turn stored with the owner's game.
    pub fn play(
        &mut self,
        owner: &str,
        source: &str,
        destination: &str,
    ) -> Result<MoveOutcome, StoreError> {
        let turn = self.turn(owner)?;
        self.apply_move(owner, source, destination, turn)
    }

    /// End the owner's session, discarding the board.
    pub fn end(&mut self, owner: &str) -> Result<bool, StoreError> {
        let removed = self.backend.remove(owner)?;
        if removed {
            info!("game for {owner} ended");
        }
        Ok(removed)
    }
}
