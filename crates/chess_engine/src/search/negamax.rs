//! Fail-soft negamax with alpha-beta pruning
//!
//! MTD(f) only ever calls this with a zero-width window, so every node either fails high or fails
//! low and the stored bound says which.

use super::ordering::order_moves;
use super::{score_from_tt, score_to_tt, Bound, SearchAborted, Searcher, TtEntry};
use crate::constants::*;
use crate::evaluation::non_pawn_material;
use crate::position::Position;

impl Searcher {
    /// Score of `pos` for the side to move, searched `depth` plies deep.
    ///
    /// `ply` is the distance from the root; it makes mate scores prefer the shortest mate and
    /// keeps the root out of the transposition cutoff so a best move is always produced there.
    pub(super) fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        ply: u32,
        alpha: i32,
        beta: i32,
        allow_null: bool,
    ) -> Result<i32, SearchAborted> {
        self.nodes += 1;
        if self.nodes % TIME_CHECK_INTERVAL == 0 && self.out_of_time() {
            return Err(SearchAborted);
        }

        let original_alpha = alpha;
        let mut alpha = alpha;

        let mut tt_move = None;
        if let Some(entry) = self.table.get(pos.hash()).copied() {
            tt_move = entry.best_move;
            if ply > 0 && entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                let usable = match entry.bound {
                    Bound::Exact => true,
                    Bound::Lower => score >= beta,
                    Bound::Upper => score <= alpha,
                };
                if usable {
                    self.cache_hits += 1;
                    return Ok(score);
                }
            }
        }

        if depth == 0 {
            return Ok(pos.score());
        }

        let moves = self.legal_moves(pos);
        let in_check = pos.in_check(pos.turn());
        if moves.is_empty() {
            return Ok(if in_check { -(MATE - ply as i32) } else { 0 });
        }

        // Passing is never better than the best move, except in zugzwang, which needs pieces
        // other than pawns to be rare enough to ignore.
        if self.null_move_pruning
            && allow_null
            && ply > 0
            && depth > NULL_MOVE_REDUCTION
            && !in_check
            && non_pawn_material(pos.board(), pos.turn()) > 0
        {
            let reduced = depth - 1 - NULL_MOVE_REDUCTION;
            let score =
                -self.negamax(&pos.null_move(), reduced, ply + 1, -beta, -beta + 1, false)?;
            if score >= beta {
                return Ok(beta);
            }
        }

        let mut best = -AB_INF;
        let mut best_move = None;
        for mv in order_moves(pos, &moves, tt_move) {
            let child = pos.make_move(mv);
            let score = -self.negamax(&child, depth - 1, ply + 1, -beta, -alpha, true)?;
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= original_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        // A fail-low says nothing about which move is best; keep the one we had.
        let stored_move = match bound {
            Bound::Upper => tt_move.or(best_move),
            _ => best_move,
        };
        self.table.add(
            pos.hash(),
            TtEntry {
                score: score_to_tt(best, ply),
                depth,
                bound,
                best_move: stored_move,
            },
        );

        if ply == 0 && bound != Bound::Upper {
            self.root_best = best_move;
        }
        Ok(best)
    }
}
