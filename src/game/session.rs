use super::board::Board;
use super::piece::Color;

/// One owner's game: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
}

impl Game {
    pub fn new() -> Self {
        Game::default()
    }

    /// Back to the starting layout with white to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::White;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::apply_move;

    #[test]
    fn reset_restores_start_and_white_to_move() {
        let mut game = Game::new();
        let outcome = apply_move(&mut game.board, "e2", "e4", game.turn);
        game.turn = outcome.turn;
        assert_eq!(game.turn, Color::Black);

        game.reset();
        assert_eq!(game, Game::new());
        assert_eq!(game.turn, Color::White);
    }
}
