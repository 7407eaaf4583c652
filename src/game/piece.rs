use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Bishops, rooks and queens need a clear path between their endpoints.
    pub fn slides(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// FEN-style letter: uppercase for white, lowercase for black.
    pub fn letter(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

/// What sits on a square. `Empty` is the only representation of an unoccupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

impl Occupant {
    pub const EMPTY_LETTER: char = '.';
    pub const EMPTY_GLYPH: char = '·';
    pub const EMPTY_HTML: &'static str = "&nbsp;";

    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Piece(p) => Some(p),
            Occupant::Empty => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        self.piece().map(|p| p.color)
    }

    pub fn letter(self) -> char {
        self.piece().map_or(Self::EMPTY_LETTER, Piece::letter)
    }

    pub fn from_letter(c: char) -> Option<Self> {
        if c == Self::EMPTY_LETTER {
            return Some(Occupant::Empty);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Occupant::Piece(Piece::new(kind, color)))
    }

    pub fn glyph(self) -> char {
        self.piece().map_or(Self::EMPTY_GLYPH, Piece::glyph)
    }

    /// Numeric HTML entity for the piece glyph, `&nbsp;` when empty.
    pub fn html(self) -> String {
        match self.piece() {
            Some(p) => format!("&#{};", p.glyph() as u32),
            None => Self::EMPTY_HTML.to_string(),
        }
    }

    pub fn from_html(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() || code == Self::EMPTY_HTML {
            return Some(Occupant::Empty);
        }
        let n: u32 = code.strip_prefix("&#")?.strip_suffix(';')?.parse().ok()?;
        let glyph = char::from_u32(n)?;
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| {
                PieceKind::ALL
                    .into_iter()
                    .map(move |kind| Piece::new(kind, color))
            })
            .find(|p| p.glyph() == glyph)
            .map(Occupant::Piece)
    }
}

impl From<Piece> for Occupant {
    fn from(p: Piece) -> Self {
        Occupant::Piece(p)
    }
}
