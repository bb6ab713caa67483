//! Search algorithms for finding the best move
//!
//! Iterative deepening drives one MTD(f) pass per depth; each pass is a series of zero-window
//! fail-soft negamax searches that squeeze the score between a lower and an upper bound until they
//! meet. Results are cached by position hash in a [`TranspositionCache`](crate::tt::TranspositionCache), and the legal move list
//! of every visited position is cached in a second one.
//!
//! The search is synchronous inside a depth. Between completed depths it awaits a caller-supplied
//! callback, which is the only point where it yields. Time is checked at every depth boundary and
//! every [`TIME_CHECK_INTERVAL`] nodes; a depth interrupted by the clock is thrown away and the
//! result of the last completed depth is returned. Depth 1 always completes.
//!
//! ## Module Organization
//!
//! - `negamax` - zero-window alpha-beta with transposition lookups and null-move pruning
//! - `mtdf` - MTD(f) driver for one depth
//! - `iterative` - iterative deepening, time management, reporting
//! - `ordering` - move ordering

mod iterative;
mod mtdf;
mod negamax;
mod ordering;

use instant::Instant;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::EngineConfig;
use crate::constants::*;
use crate::position::Position;
use crate::tt::{new_cache, BoxedCache, CacheKind};
use crate::types::Move;

pub use ordering::order_moves;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Score is at least this (fail high).
    Lower,
    /// Score is at most this (fail low).
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub score: i32,
    pub depth: u32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u32,
    pub time: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            time: Duration::from_millis(DEFAULT_SEARCH_TIME_MS),
        }
    }
}

impl SearchLimits {
    /// Searches exactly `depth` plies, however long it takes.
    pub fn depth(depth: u32) -> Self {
        Self {
            max_depth: depth,
            time: Duration::MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopReason {
    /// The depth limit was reached.
    Depth,
    /// The time budget ran out.
    Time,
    /// A forced mate was found, for either side.
    Mate,
}

/// Progress after one completed depth, handed to the inter-depth callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepthReport {
    pub depth: u32,
    pub score: i32,
    pub best_move: Move,
    pub nodes: u64,
    pub cache_hits: u64,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub best_move: Move,
    /// Score for the side to move at the root.
    pub score: i32,
    /// Deepest fully completed depth.
    pub depth: u32,
    pub nodes: u64,
    pub cache_hits: u64,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    BestMove(SearchReport),
    /// The side to move has no legal move: checkmate or stalemate.
    NoLegalMove,
}

impl SearchOutcome {
    pub fn report(&self) -> Option<&SearchReport> {
        match self {
            SearchOutcome::BestMove(report) => Some(report),
            SearchOutcome::NoLegalMove => None,
        }
    }
}

/// Raised inside a depth when the time budget runs out.
#[derive(Debug)]
struct SearchAborted;

pub struct Searcher {
    table: BoxedCache<TtEntry>,
    move_cache: BoxedCache<Arc<[Move]>>,
    null_move_pruning: bool,
    nodes: u64,
    cache_hits: u64,
    started: Instant,
    /// `None` while the current depth must complete regardless of the clock.
    budget: Option<Duration>,
    root_best: Option<Move>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Searcher {
    pub fn new(
        kind: CacheKind,
        capacity: usize,
        move_cache_capacity: usize,
        null_move_pruning: bool,
    ) -> Self {
        Self {
            table: new_cache(kind, capacity),
            move_cache: new_cache(kind, move_cache_capacity),
            null_move_pruning,
            nodes: 0,
            cache_hits: 0,
            started: Instant::now(),
            budget: None,
            root_best: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.cache.kind,
            config.cache.capacity,
            config.move_cache_capacity,
            config.null_move_pruning,
        )
    }

    /// Forgets every cached result.
    pub fn clear(&mut self) {
        self.table.clear();
        self.move_cache.clear();
    }

    /// Number of transposition entries (or buckets, for LRU) currently held.
    pub fn table_size(&self) -> usize {
        self.table.size()
    }

    fn legal_moves(&mut self, pos: &Position) -> Arc<[Move]> {
        if let Some(moves) = self.move_cache.get(pos.hash()) {
            return Arc::clone(moves);
        }
        let moves: Arc<[Move]> = pos.legal_moves().into();
        Arc::clone(self.move_cache.add(pos.hash(), moves))
    }

    fn out_of_time(&self) -> bool {
        self.budget
            .is_some_and(|budget| self.started.elapsed() >= budget)
    }
}

/// Mate scores are stored relative to the node so they stay valid at any ply.
fn score_to_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_BOUND {
        score + ply as i32
    } else if score <= -MATE_BOUND {
        score - ply as i32
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_BOUND {
        score - ply as i32
    } else if score <= -MATE_BOUND {
        score + ply as i32
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_scores_round_trip_through_table() {
        let mated_in_three = -(MATE - 3);
        assert_eq!(score_to_tt(mated_in_three, 2), -(MATE - 1));
        assert_eq!(score_from_tt(score_to_tt(mated_in_three, 2), 2), mated_in_three);
        assert_eq!(score_to_tt(150, 7), 150);
    }

    #[test]
    fn test_move_list_cache() {
        let mut searcher = Searcher::default();
        let pos = Position::start();
        let first = searcher.legal_moves(&pos);
        let second = searcher.legal_moves(&pos);
        assert_eq!(first.len(), 20);
        assert!(Arc::ptr_eq(&first, &second), "second lookup is served from the cache");
    }
}
