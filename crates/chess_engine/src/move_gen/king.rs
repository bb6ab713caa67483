//! Castling candidates
//!
//! Emitted before the king's ordinary steps. Only the board is checked here: the right must still
//! be held, king and rook must stand on their home squares and the squares between them must be
//! empty. Whether the king passes through check is decided later by legality filtering, through
//! the king-passant square the castle leaves behind.

use crate::constants::{BLACK_KING_HOME, WHITE_KING_HOME};
use crate::position::Position;
use crate::types::{Color, Move, Piece, PieceKind, Square};

pub fn generate_castling_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let home = match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    };
    if from != home {
        return;
    }
    let board = pos.board();
    let rights = pos.castling(color);
    let rook = Some(Piece::new(PieceKind::Rook, color));

    if rights.kingside && board[from + 3] == rook && (1..=2).all(|i| board[from + i].is_none()) {
        moves.push(Move::new(from, from + 2));
    }
    if rights.queenside && board[from - 4] == rook && (1..=3).all(|i| board[from - i].is_none()) {
        moves.push(Move::new(from, from - 2));
    }
}
