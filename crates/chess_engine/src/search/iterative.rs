//! Iterative deepening search
//!
//! Runs one MTD(f) pass per depth, seeding each with the previous depth's score, until the depth
//! limit, the time budget or a forced mate ends the search.

use std::future::Future;

use instant::Instant;
use tracing::{debug, info, warn};

use super::{
    DepthReport, SearchAborted, SearchLimits, SearchOutcome, SearchReport, Searcher, StopReason,
};
use crate::constants::MATE_BOUND;
use crate::position::Position;

impl Searcher {
    /// Searches `pos` for the side to move.
    ///
    /// `on_depth` is awaited after every completed depth; it is the only point where the search
    /// yields. The returned move always comes from a fully completed depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_engine::position::Position;
    /// use chess_engine::search::{SearchLimits, SearchOutcome, Searcher};
    ///
    /// let mut searcher = Searcher::default();
    /// let pos = Position::start();
    /// let outcome = futures_lite::future::block_on(searcher.search(
    ///     &pos,
    ///     SearchLimits::depth(2),
    ///     |_| async {},
    /// ));
    /// let SearchOutcome::BestMove(report) = outcome else { panic!("start has moves") };
    /// assert!(pos.valid(report.best_move));
    /// assert_eq!(report.depth, 2);
    /// ```
    pub async fn search<F, Fut>(
        &mut self,
        pos: &Position,
        limits: SearchLimits,
        mut on_depth: F,
    ) -> SearchOutcome
    where
        F: FnMut(DepthReport) -> Fut,
        Fut: Future<Output = ()>,
    {
        let started = Instant::now();
        self.started = started;
        self.budget = None;
        self.nodes = 0;
        self.cache_hits = 0;

        let root_moves = self.legal_moves(pos);
        let Some(&fallback) = root_moves.first() else {
            debug!(fen = %pos.to_fen(), "[SEARCH] No legal move");
            return SearchOutcome::NoLegalMove;
        };

        let max_depth = limits.max_depth.max(1);
        let mut guess = pos.score();
        let mut completed = None;
        let mut stop_reason = StopReason::Depth;

        for depth in 1..=max_depth {
            if depth > 1 && started.elapsed() >= limits.time {
                stop_reason = StopReason::Time;
                break;
            }
            // Depth 1 runs without a clock so there is always a move to return.
            self.budget = (depth > 1).then_some(limits.time);

            let (score, best) = match self.mtdf(pos, guess, depth) {
                Ok(result) => result,
                Err(SearchAborted) => {
                    stop_reason = StopReason::Time;
                    break;
                }
            };
            let best_move = best.unwrap_or(fallback);
            guess = score;
            completed = Some((depth, score, best_move));

            debug!(
                depth,
                score,
                nodes = self.nodes,
                cache_hits = self.cache_hits,
                best_move = %best_move,
                "[SEARCH] Depth complete"
            );
            on_depth(DepthReport {
                depth,
                score,
                best_move,
                nodes: self.nodes,
                cache_hits: self.cache_hits,
                elapsed: started.elapsed(),
            })
            .await;

            if score.abs() >= MATE_BOUND {
                stop_reason = StopReason::Mate;
                break;
            }
        }
        self.budget = None;

        let Some((depth, score, best_move)) = completed else {
            return SearchOutcome::NoLegalMove;
        };
        if stop_reason == StopReason::Time && depth < 2 {
            warn!(
                time_ms = limits.time.as_millis() as u64,
                "[SEARCH] Time budget ran out before depth 2"
            );
        }

        let report = SearchReport {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            cache_hits: self.cache_hits,
            stop_reason,
            elapsed: started.elapsed(),
        };
        info!(
            best_move = %report.best_move,
            score = report.score,
            depth = report.depth,
            nodes = report.nodes,
            cache_hits = report.cache_hits,
            stop_reason = ?report.stop_reason,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "[SEARCH] Search finished"
        );
        SearchOutcome::BestMove(report)
    }
}
