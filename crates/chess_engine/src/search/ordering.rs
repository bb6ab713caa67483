//! Move ordering for alpha-beta pruning
//!
//! Tries the cached best move first, then the rest by the score they gain for the mover
//! ([`Position::value`]), so captures and promotions come early. Ties keep generation order,
//! which keeps the search deterministic.

use std::cmp::Reverse;

use crate::position::Position;
use crate::types::Move;

/// Order moves for better alpha-beta pruning
pub fn order_moves(pos: &Position, moves: &[Move], tt_move: Option<Move>) -> Vec<Move> {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| {
            let key = if tt_move.is_some_and(|best| best.same_squares(&mv)) {
                i32::MAX
            } else {
                pos.value(mv)
            };
            (key, mv)
        })
        .collect();
    scored.sort_by_key(|&(key, _)| Reverse(key));
    scored.into_iter().map(|(_, mv)| mv).collect()
}
