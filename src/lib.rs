//! Two-player chess board with per-owner persisted state and a move legality checker.

pub mod game;
pub mod store;
pub mod ui;

pub use game::board::Board;
pub use game::mv::{MoveError, MoveOutcome};
pub use game::piece::{Color, Occupant, Piece, PieceKind};
pub use game::session::Game;
pub use game::square::Square;
pub use store::{BoardStore, FileBackend, MemoryBackend, StoreError};
