//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures, en passant included
//! - Diagonal "captures" next to the king-passant square
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square forward onto an empty square
//! - **Double push**: only from the home rank, and only if both squares are empty
//! - **Captures**: diagonally forward onto an opposing piece or the en-passant target
//! - **Promotion**: not emitted here; applying a move onto the last rank promotes
//!
//! Directions come from [`PAWN_DIRS_WHITE`] and [`PAWN_DIRS_BLACK`]: push, double push, then
//! the two capture diagonals.

use crate::board::{rank, step};
use crate::constants::{PAWN_DIRS_BLACK, PAWN_DIRS_WHITE};
use crate::position::Position;
use crate::types::{Color, Move, Square};

/// Generate pawn moves from a given square
///
/// En-passant and king-passant targets only count when `color` is the side to move: they describe
/// what the opponent just did.
///
/// # Arguments
///
/// * `pos` - The position to generate from
/// * `from` - Square of the pawn (0-63)
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Position::start(), 52, Color::White, &mut moves);
/// // moves now holds e2-e3 and e2-e4
/// ```
pub fn generate_pawn_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = pos.board();
    let (push, double, captures, home_rank) = match color {
        Color::White => {
            let [push, double, left, right] = PAWN_DIRS_WHITE;
            (push, double, [left, right], 2)
        }
        Color::Black => {
            let [push, double, left, right] = PAWN_DIRS_BLACK;
            (push, double, [left, right], 7)
        }
    };

    if let Some(one) = step(from, push).filter(|sq| board[*sq].is_none()) {
        moves.push(Move::new(from, one));
        if rank(from) == home_rank {
            if let Some(two) = step(from, double).filter(|sq| board[*sq].is_none()) {
                moves.push(Move::new(from, two));
            }
        }
    }

    let on_move = color == pos.turn();
    for dir in captures {
        let Some(to) = step(from, dir) else {
            continue;
        };
        let allowed = match board[to] {
            Some(piece) => piece.color != color,
            None => {
                on_move
                    && (pos.en_passant() == Some(to)
                        || pos.king_passant().is_some_and(|kp| kp.abs_diff(to) < 2))
            }
        };
        if allowed {
            moves.push(Move::new(from, to));
        }
    }
}
