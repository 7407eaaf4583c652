//! Move representation and rejection reasons.

use std::fmt;

use thiserror::Error;

use super::piece::{Color, Piece, PieceKind};
use super::square::{Square, SquareError};

/// A validated move, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// Which input field a malformed square came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Source,
    Destination,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Source => f.write_str("source"),
            Field::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid {field} square: {reason}")]
    InvalidSquare { field: Field, reason: SquareError },
    #[error("Source square not found.")]
    SourceNotFound,
    #[error("No piece at the source square.")]
    NoPiece,
    #[error("It is {0}'s turn.")]
    WrongTurn(Color),
    #[error("Cannot capture your own piece.")]
    OwnCapture,
    #[error("Pawn cannot move forward into an occupied square.")]
    PawnBlocked,
    #[error("Path is not clear for pawn's double move.")]
    PawnDoubleBlocked,
    #[error("Pawn diagonal move must capture an enemy piece.")]
    PawnMustCapture,
    #[error("{}", illegal_message(.0))]
    Illegal(PieceKind),
}

fn illegal_message(kind: &PieceKind) -> String {
    if kind.slides() {
        format!("Illegal {kind} move or path is blocked.")
    } else {
        format!("Illegal {kind} move.")
    }
}

/// Result of a move request as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub message: String,
    /// Side to move next: flipped when accepted, unchanged otherwise.
    pub turn: Color,
}

impl MoveOutcome {
    pub const COMPLETED: &'static str = "Move completed.";

    pub fn accepted(turn: Color) -> Self {
        MoveOutcome {
            accepted: true,
            message: Self::COMPLETED.to_string(),
            turn,
        }
    }

    pub fn rejected(err: &MoveError, turn: Color) -> Self {
        MoveOutcome {
            accepted: false,
            message: err.to_string(),
            turn,
        }
    }
}
