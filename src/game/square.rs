use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A square on the 8x8 board.
///
/// Row 0 is rank 8 and row 7 is rank 1; column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("Square must be a 2-character string, e.g. e2.")]
    Length,
    #[error("File must be a letter from a to h.")]
    File,
    #[error("Rank must be a number from 1 to 8.")]
    Rank,
}

impl Square {
    /// Returns `None` when either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse a token such as `e2`. The file letter is case-insensitive.
    pub fn parse(token: &str) -> Result<Self, SquareError> {
        let mut chars = token.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(SquareError::Length),
        };
        if !('a'..='h').contains(&file) {
            return Err(SquareError::File);
        }
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(SquareError::Rank)?;
        Ok(Square {
            row: 8 - rank as u8,
            col: file as u8 - b'a',
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(self) -> u8 {
        8 - self.row
    }

    /// The square `d_row` rows and `d_col` columns away, if it is on the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Square::new(row as usize, col as usize)
        } else {
            None
        }
    }

    /// All 64 squares, rank 8 first, files a to h within a rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
