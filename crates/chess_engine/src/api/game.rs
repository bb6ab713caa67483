//! Game lifecycle management
//!
//! Creating engines, changing configuration and replacing the position.

use std::sync::Arc;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::ChessEngineResult;
use crate::position::Position;
use crate::search::Searcher;
use crate::types::Move;

pub struct Engine {
    pub(super) config: EngineConfig,
    pub(super) current: Arc<Position>,
    pub(super) searcher: Searcher,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            current: Arc::new(Position::start()),
            searcher: Searcher::default(),
        }
    }
}

impl Engine {
    /// Creates an engine at the configured start position.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: EngineConfig) -> ChessEngineResult<Engine> {
        config.validate()?;
        let current = Arc::new(config.start()?);
        let searcher = Searcher::from_config(&config);
        Ok(Engine {
            config,
            current,
            searcher,
        })
    }

    /// Applies a new configuration.
    ///
    /// Caches are rebuilt. The game returns to the start position only if that changed.
    pub fn configure(&mut self, config: EngineConfig) -> ChessEngineResult<()> {
        config.validate()?;
        if config.start_position != self.config.start_position {
            self.current = Arc::new(config.start()?);
        }
        self.searcher = Searcher::from_config(&config);
        info!(
            search_time_ms = config.search_time_ms,
            max_depth = config.max_depth,
            cache = ?config.cache.kind,
            "[ENGINE] Configured"
        );
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the game with the position described by `fen`. On failure the current game is
    /// kept as it was.
    pub fn set_position(&mut self, fen: &str) -> ChessEngineResult<()> {
        let pos = Position::from_fen(fen)?;
        self.current = Arc::new(pos);
        info!(fen, "[ENGINE] Position set");
        Ok(())
    }

    pub fn fen(&self) -> String {
        self.current.to_fen()
    }

    pub fn position(&self) -> &Position {
        &self.current
    }

    /// Moves played since the last position was set, oldest first.
    pub fn history(&self) -> Vec<Move> {
        self.current.move_chain()
    }

    /// Returns to the configured start position.
    pub fn restart(&mut self) {
        // the config was validated on the way in
        if let Ok(pos) = self.config.start() {
            self.current = Arc::new(pos);
        }
        info!("[ENGINE] Restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;
    use crate::error::{ChessEngineError, FenError};

    const KINGS: &str = "8/8/8/8/8/8/8/K6k w - - 0 1";

    #[test]
    fn test_new_engine_starts_at_configured_position() {
        let engine = Engine::default();
        assert_eq!(engine.fen(), START_FEN);

        let config = EngineConfig {
            start_position: KINGS.to_string(),
            ..EngineConfig::default()
        };
        let engine = Engine::new(config).unwrap();
        assert_eq!(engine.fen(), KINGS);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig {
            max_depth: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(ChessEngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_set_position_failure_keeps_game() {
        let mut engine = Engine::default();
        engine.play(52, 36, None).unwrap();
        let before = engine.fen();

        let err = engine.set_position("8/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(
            err,
            ChessEngineError::InvalidFen(FenError::RankCount { found: 3 })
        ));
        assert_eq!(engine.fen(), before);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_set_position_clears_history() {
        let mut engine = Engine::default();
        engine.play(52, 36, None).unwrap();
        engine.set_position(KINGS).unwrap();
        assert_eq!(engine.fen(), KINGS);
        assert!(engine.history().is_empty());
        assert!(!engine.undo());
    }

    #[test]
    fn test_restart_and_configure() {
        let mut engine = Engine::default();
        engine.play(52, 36, None).unwrap();
        engine.restart();
        assert_eq!(engine.fen(), START_FEN);

        engine.play(52, 36, None).unwrap();
        let config = EngineConfig {
            search_time_ms: 50,
            ..EngineConfig::default()
        };
        engine.configure(config).unwrap();
        assert_eq!(engine.config().search_time_ms, 50);
        assert_eq!(engine.history().len(), 1, "same start position keeps the game");

        let config = EngineConfig {
            start_position: KINGS.to_string(),
            ..EngineConfig::default()
        };
        engine.configure(config).unwrap();
        assert_eq!(engine.fen(), KINGS);
        engine.set_position(START_FEN).unwrap();
        engine.restart();
        assert_eq!(engine.fen(), KINGS);
    }
}
