// Occupancy of one game: an 8x8 array indexed [row][col], row 0 = rank 8.

use super::piece::{Color, Occupant, Piece, PieceKind};
use super::square::Square;

pub type Snapshot = [[Occupant; 8]; 8];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Snapshot,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub fn empty() -> Self {
        Board {
            squares: [[Occupant::Empty; 8]; 8],
        }
    }

    pub fn from_snapshot(squares: Snapshot) -> Self {
        Board { squares }
    }

    /// Replace every square with the standard starting layout.
    pub fn reset(&mut self) {
        self.clear();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            // Black on rank 8/7 (rows 0/1), white on rank 2/1 (rows 6/7)
            self.squares[0][col] = Piece::new(*kind, Color::Black).into();
            self.squares[1][col] = Piece::new(PieceKind::Pawn, Color::Black).into();
            self.squares[6][col] = Piece::new(PieceKind::Pawn, Color::White).into();
            self.squares[7][col] = Piece::new(*kind, Color::White).into();
        }
    }

    pub fn clear(&mut self) {
        self.squares = [[Occupant::Empty; 8]; 8];
    }

    pub fn get(&self, square: Square) -> Occupant {
        self.squares[square.row()][square.col()]
    }

    /// Overwrites whatever was on `square`.
    pub fn set(&mut self, square: Square, occupant: Occupant) {
        self.squares[square.row()][square.col()] = occupant;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Copy of the grid, rank 8 row first, files a to h.
    pub fn snapshot(&self) -> Snapshot {
        self.squares
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|o| o.color() == Some(color))
            .count()
    }
}
