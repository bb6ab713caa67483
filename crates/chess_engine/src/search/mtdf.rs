//! MTD(f) driver
//!
//! Converges on the exact negamax score with zero-window searches. Each pass either raises the
//! lower bound (fail high) or lowers the upper bound (fail low); scores are integers, so the bounds
//! meet after finitely many passes. The last pass always fails high at the true score, which is
//! where the root's best move comes from.

use super::{SearchAborted, Searcher};
use crate::constants::AB_INF;
use crate::position::Position;
use crate::types::Move;

impl Searcher {
    /// Exact score of `pos` at `depth` and the move that achieves it.
    pub(super) fn mtdf(
        &mut self,
        pos: &Position,
        first_guess: i32,
        depth: u32,
    ) -> Result<(i32, Option<Move>), SearchAborted> {
        let mut g = first_guess;
        let mut lower = -AB_INF;
        let mut upper = AB_INF;
        let mut best_move = None;

        while lower < upper {
            let beta = if g == lower { g + 1 } else { g };
            self.root_best = None;
            g = self.negamax(pos, depth, 0, beta - 1, beta, true)?;
            if g >= beta {
                lower = g;
                best_move = self.root_best.or(best_move);
            } else {
                upper = g;
            }
        }
        Ok((g, best_move))
    }
}
