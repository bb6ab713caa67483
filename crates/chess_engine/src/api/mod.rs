//! Public API for the chess engine
//!
//! [`Engine`] owns the current game: a chain of immutable positions linked to the last position
//! that was set, the configuration, and the searcher with its caches. Every entry point validates
//! its input and leaves the game untouched when it fails.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new, configure, set_position, restart)
//! - `moves` - Move execution and AI moves (play, undo, ai_move)
//! - `state` - Game state queries (winner, draw rules)

mod game;
mod moves;
mod state;

pub use game::Engine;
pub use state::Winner;
