//! Engine configuration
//!
//! Every field has a default, so a partial JSON document (or none at all) yields a usable
//! configuration:
//!
//! ```json
//! {
//!   "start_position": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
//!   "search_time_ms": 1000,
//!   "max_depth": 32,
//!   "cache": { "kind": "lru", "capacity": 100000 },
//!   "move_cache_capacity": 20000,
//!   "null_move_pruning": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::search::SearchLimits;
use crate::tt::CacheKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub kind: CacheKind,
    /// Buckets for [`CacheKind::Lru`], entries for [`CacheKind::ClearWhenFull`].
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            kind: CacheKind::Lru,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// FEN the engine starts from and returns to on restart.
    pub start_position: String,
    pub search_time_ms: u64,
    pub max_depth: u32,
    pub cache: CacheConfig,
    /// Capacity of the per-position legal move cache.
    pub move_cache_capacity: usize,
    pub null_move_pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_position: START_FEN.to_string(),
            search_time_ms: DEFAULT_SEARCH_TIME_MS,
            max_depth: MAX_DEPTH,
            cache: CacheConfig::default(),
            move_cache_capacity: DEFAULT_MOVE_CACHE_CAPACITY,
            null_move_pruning: true,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> ChessEngineResult<()> {
        let invalid = |message: &str| {
            Err(ChessEngineError::InvalidConfig {
                message: message.to_string(),
            })
        };
        if self.max_depth == 0 {
            return invalid("max_depth must be at least 1");
        }
        if self.cache.capacity == 0 {
            return invalid("cache.capacity must be at least 1");
        }
        if self.move_cache_capacity == 0 {
            return invalid("move_cache_capacity must be at least 1");
        }
        Position::from_fen(&self.start_position)?;
        Ok(())
    }

    pub fn start(&self) -> ChessEngineResult<Position> {
        Ok(Position::from_fen(&self.start_position)?)
    }

    pub fn search_time(&self) -> Duration {
        Duration::from_millis(self.search_time_ms)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: self.max_depth,
            time: self.search_time(),
        }
    }
}
