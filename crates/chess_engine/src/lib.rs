//! Mailbox chess engine
//!
//! Positions are immutable: [`Position::make_move`] returns a new position with its score and
//! Zobrist hashes updated incrementally. Moves are generated pseudo-legally and filtered by
//! playing them out. The search is iterative-deepening MTD(f) over a fail-soft negamax, backed by
//! a transposition cache with a configurable eviction policy.
//!
//! The board is a 64-cell array indexed from a8 (0) to h1 (63):
//!
//! ```text
//! 8 |  0  1  2  3  4  5  6  7
//! 7 |  8  9 10 11 12 13 14 15
//! 6 | 16 17 18 19 20 21 22 23
//! 5 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 3 | 40 41 42 43 44 45 46 47
//! 2 | 48 49 50 51 52 53 54 55
//! 1 | 56 57 58 59 60 61 62 63
//!     a  b  c  d  e  f  g  h
//! ```
//!
//! # Examples
//!
//! ```
//! use chess_engine::{Engine, Winner};
//!
//! let mut engine = Engine::default();
//! engine.play_algebraic("e2", "e4", None).unwrap();
//! let report = engine.ai_move_blocking(Some(2)).expect("black has moves");
//! assert_eq!(engine.history().len(), 2);
//! assert_eq!(engine.history()[1], report.best_move);
//! assert_eq!(engine.winner(), None::<Winner>);
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod fen;
pub mod hash;
pub mod move_gen;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;

pub use api::{Engine, Winner};
pub use config::{CacheConfig, EngineConfig};
pub use error::{ChessEngineError, ChessEngineResult, FenError};
pub use hash::HashPair;
pub use position::Position;
pub use search::{SearchLimits, SearchOutcome, SearchReport, Searcher, StopReason};
pub use tt::{CacheKind, ClearWhenFullCache, LruCache, TranspositionCache};
pub use types::{CastlingRights, Color, Move, Piece, PieceKind, Square};
