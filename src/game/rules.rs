//! Move legality: decides whether a move is allowed on the current board and applies it.
//!
//! Only piece movement shapes and path obstruction are checked. There is no check
//! detection, castling, en passant or promotion.

use log::debug;

use super::board::Board;
use super::mv::{Field, Move, MoveError, MoveOutcome};
use super::piece::{Color, Occupant, Piece, PieceKind};
use super::square::Square;

/// Validate and, if legal, apply a move given as two square tokens.
///
/// The board is only written after every check has passed, so a rejected
/// move leaves both the board and the turn untouched.
pub fn apply_move(board: &mut Board, source: &str, destination: &str, turn: Color) -> MoveOutcome {
    debug!("{turn} attempts {source} -> {destination}");
    match validate(board, source, destination, turn) {
        Ok(mv) => {
            make_move(board, &mv);
            debug!(
                "{} {} {} -> {}",
                mv.piece.color, mv.piece.kind, mv.from, mv.to
            );
            MoveOutcome::accepted(turn.opposite())
        }
        Err(err) => {
            debug!("rejected {source} -> {destination}: {err}");
            MoveOutcome::rejected(&err, turn)
        }
    }
}

/// Parse both tokens, then check the move. The source token is parsed first.
pub fn validate(
    board: &Board,
    source: &str,
    destination: &str,
    turn: Color,
) -> Result<Move, MoveError> {
    let from = Square::parse(source).map_err(|reason| MoveError::InvalidSquare {
        field: Field::Source,
        reason,
    })?;
    let to = Square::parse(destination).map_err(|reason| MoveError::InvalidSquare {
        field: Field::Destination,
        reason,
    })?;
    validate_squares(board, from, to, turn)
}

/// Checks run in a fixed order: empty source, wrong side, own capture, then
/// the piece's movement shape. The first failing check is reported.
pub fn validate_squares(
    board: &Board,
    from: Square,
    to: Square,
    turn: Color,
) -> Result<Move, MoveError> {
    let piece = board.get(from).piece().ok_or(MoveError::NoPiece)?;
    if piece.color != turn {
        return Err(MoveError::WrongTurn(turn));
    }
    let target = board.get(to);
    if target.color() == Some(piece.color) {
        return Err(MoveError::OwnCapture);
    }

    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;

    let legal = match piece.kind {
        PieceKind::Pawn => return pawn_move(board, piece, from, to, target),
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => is_diagonal(d_row, d_col) && is_path_clear(board, from, to),
        PieceKind::Rook => is_straight(d_row, d_col) && is_path_clear(board, from, to),
        PieceKind::Queen => {
            (is_diagonal(d_row, d_col) || is_straight(d_row, d_col))
                && is_path_clear(board, from, to)
        }
        PieceKind::King => d_row.abs().max(d_col.abs()) == 1,
    };
    if legal {
        Ok(Move {
            from,
            to,
            piece,
            captured: target.piece(),
        })
    } else {
        Err(MoveError::Illegal(piece.kind))
    }
}

fn pawn_move(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    target: Occupant,
) -> Result<Move, MoveError> {
    let (direction, start_row) = match piece.color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };
    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;

    if d_col == 0 && d_row == direction {
        if !target.is_empty() {
            return Err(MoveError::PawnBlocked);
        }
    } else if d_col == 0 && d_row == 2 * direction && from.row() == start_row {
        let middle_clear = from
            .offset(direction, 0)
            .is_some_and(|sq| board.is_empty(sq));
        if !middle_clear || !target.is_empty() {
            return Err(MoveError::PawnDoubleBlocked);
        }
    } else if d_col.abs() == 1 && d_row == direction {
        // Own pieces were already turned away, so any occupant here is an enemy.
        if target.is_empty() {
            return Err(MoveError::PawnMustCapture);
        }
    } else {
        return Err(MoveError::Illegal(PieceKind::Pawn));
    }
    Ok(Move {
        from,
        to,
        piece,
        captured: target.piece(),
    })
}

fn is_diagonal(d_row: i32, d_col: i32) -> bool {
    d_row != 0 && d_row.abs() == d_col.abs()
}

fn is_straight(d_row: i32, d_col: i32) -> bool {
    (d_row == 0) != (d_col == 0)
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal lines; the step is the delta
/// divided by the number of steps.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;
    let steps = d_row.abs().max(d_col.abs());
    if steps <= 1 {
        return true;
    }
    let (step_row, step_col) = (d_row / steps, d_col / steps);
    (1..steps).all(|i| {
        from.offset(step_row * i, step_col * i)
            .is_some_and(|sq| board.is_empty(sq))
    })
}

/// Capture whatever is on the destination and move the piece there.
pub fn make_move(board: &mut Board, mv: &Move) {
    board.set(mv.to, Occupant::Piece(mv.piece));
    board.set(mv.from, Occupant::Empty);
}
