use serde::Deserialize;

use crate::game::board::Snapshot;
use crate::game::piece::Occupant;

/// Symbol set used for each square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Unicode,
    Letters,
    Html,
}

impl GlyphSet {
    pub fn symbol(self, occupant: Occupant) -> String {
        match self {
            GlyphSet::Unicode => occupant.glyph().to_string(),
            GlyphSet::Letters => occupant.letter().to_string(),
            GlyphSet::Html => occupant.html(),
        }
    }
}

/// Simple text renderer for the board.
pub struct BoardRenderer;

impl BoardRenderer {
    /// Rank 8 at the top, files a to h left to right.
    pub fn render(snapshot: &Snapshot, glyphs: GlyphSet) -> String {
        let mut output = String::new();
        for (row, squares) in snapshot.iter().enumerate() {
            output.push_str(&format!("{} | ", 8 - row));
            let cells: Vec<String> = squares.iter().map(|o| glyphs.symbol(*o)).collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
        }
        output.push_str("    a b c d e f g h\n");
        output
    }
}
