//! Move execution and AI moves
//!
//! Human moves are validated before they are applied; the AI picks its move with the searcher and
//! applies it the same way, so both extend the same position chain and both can be undone.

use futures_lite::future::{block_on, yield_now};
use std::sync::Arc;
use tracing::info;

use super::Engine;
use crate::board::parse_square;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::search::{SearchLimits, SearchOutcome, SearchReport};
use crate::types::{Move, PieceKind, Square};

impl Engine {
    /// Plays the move from `from` to `to` for the side to move.
    ///
    /// `promotion` picks the piece a pawn becomes on the last rank; `None` means a queen.
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::InvalidSquare`] if a square is off the board
    /// - [`ChessEngineError::IllegalMove`] if the move is not legal here
    /// - [`ChessEngineError::InvalidPromotion`] for a promotion to a pawn or king, or a promotion
    ///   piece on a move that does not promote
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_engine::Engine;
    ///
    /// let mut engine = Engine::default();
    /// // e2-e4
    /// engine.play(52, 36, None).unwrap();
    /// assert!(engine.play(52, 36, None).is_err());
    /// ```
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<Move> {
        for sq in [from, to] {
            if sq >= 64 {
                return Err(ChessEngineError::InvalidSquare {
                    square: sq.to_string(),
                });
            }
        }

        let mv = Move {
            from,
            to,
            promotion,
        };
        if !self.current.valid(mv) {
            return Err(ChessEngineError::IllegalMove { from, to });
        }
        if let Some(piece) = promotion {
            if !piece.is_promotion_target() || !self.current.is_promotion(mv) {
                return Err(ChessEngineError::InvalidPromotion { from, to, piece });
            }
        }

        self.apply(mv);
        info!(%mv, fen = %self.current.to_fen(), "[ENGINE] Move played");
        Ok(mv)
    }

    /// Like [`Engine::play`], with squares given as names such as `"e2"`.
    pub fn play_algebraic(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<Move> {
        let parse = |name: &str| {
            parse_square(name).ok_or_else(|| ChessEngineError::InvalidSquare {
                square: name.to_string(),
            })
        };
        let (from, to) = (parse(from)?, parse(to)?);
        self.play(from, to, promotion)
    }

    /// Takes back the latest move. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(parent) = self.current.parent().cloned() else {
            return false;
        };
        self.current = parent;
        true
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.current.legal_moves()
    }

    /// Lets the AI move for the side to move.
    ///
    /// With `depth` the search runs exactly that deep regardless of the clock; otherwise the
    /// configured depth and time limits apply. The search yields between depths. Returns `None`
    /// when the side to move has no legal move.
    pub async fn ai_move(&mut self, depth: Option<u32>) -> Option<SearchReport> {
        let limits = match depth {
            Some(depth) => SearchLimits::depth(depth),
            None => self.config.search_limits(),
        };
        let outcome = self
            .searcher
            .search(&self.current, limits, |_| yield_now())
            .await;

        match outcome {
            SearchOutcome::BestMove(report) => {
                self.apply(report.best_move);
                info!(
                    mv = %report.best_move,
                    score = report.score,
                    depth = report.depth,
                    "[ENGINE] AI moved"
                );
                Some(report)
            }
            SearchOutcome::NoLegalMove => {
                info!(fen = %self.current.to_fen(), "[ENGINE] AI has no legal move");
                None
            }
        }
    }

    /// Blocking version of [`Engine::ai_move`].
    pub fn ai_move_blocking(&mut self, depth: Option<u32>) -> Option<SearchReport> {
        block_on(self.ai_move(depth))
    }

    fn apply(&mut self, mv: Move) {
        self.current = Arc::new(Position::advance(&self.current, mv));
    }
}
