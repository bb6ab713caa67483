//! Knight, bishop, rook, queen and king steps
//!
//! Sliders walk each direction until the edge or the first occupied square; knights and kings
//! take a single step. An occupied square ends the walk and is only emitted when it holds an
//! opposing piece.

use crate::board::step;
use crate::constants::{BISHOP_DIRS, KING_DIRS, KNIGHT_DIRS, ROOK_DIRS};
use crate::types::{Board, Move, Piece, PieceKind, Square};

pub(crate) fn directions(kind: PieceKind) -> &'static [isize] {
    match kind {
        PieceKind::Knight => &KNIGHT_DIRS,
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen | PieceKind::King => &KING_DIRS,
        PieceKind::Pawn => &[],
    }
}

/// Generate moves for any non-pawn piece standing on `from`
pub fn generate_piece_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for &dir in directions(piece.kind) {
        let mut cur = from;
        while let Some(to) = step(cur, dir) {
            match board[to] {
                None => moves.push(Move::new(from, to)),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            if !piece.kind.is_slider() {
                break;
            }
            cur = to;
        }
    }
}
