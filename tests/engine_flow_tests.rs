//! Integration tests for the engine facade
//!
//! Plays real game fragments through [`Engine`] and checks the resulting FEN after every move,
//! then exercises the AI, draw rules and configuration handling end to end.

use chess_engine::constants::START_FEN;
use chess_engine::{
    CacheKind, ChessEngineError, Engine, EngineConfig, FenError, Move, PieceKind, StopReason,
    Winner,
};

/// Plays `(from, to, expected FEN)` triples, checking the FEN after each move.
fn play_line(engine: &mut Engine, line: &[(&str, &str, &str)]) {
    for (from, to, fen) in line {
        engine
            .play_algebraic(from, to, None)
            .unwrap_or_else(|err| panic!("{from}{to} rejected: {err}"));
        assert_eq!(engine.fen(), *fen, "after {from}{to}");
    }
}

#[test]
fn test_italian_opening_with_castling() {
    let mut engine = Engine::default();
    play_line(
        &mut engine,
        &[
            ("e2", "e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            ("e7", "e5", "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"),
            ("g1", "f3", "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"),
            ("b8", "c6", "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3"),
            ("f1", "c4", "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"),
            ("f8", "c5", "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"),
            ("e1", "g1", "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 5 4"),
        ],
    );
    assert_eq!(engine.history().len(), 7);
    while engine.undo() {}
    assert_eq!(engine.fen(), START_FEN);
}

#[test]
fn test_en_passant_line() {
    let mut engine = Engine::default();
    play_line(
        &mut engine,
        &[
            ("e2", "e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            ("a7", "a6", "rnbqkbnr/1ppppppp/p7/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"),
            ("e4", "e5", "rnbqkbnr/1ppppppp/p7/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2"),
            ("d7", "d5", "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"),
            ("e5", "d6", "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"),
        ],
    );
}

#[test]
fn test_move_counts() {
    let mut engine = Engine::default();
    assert_eq!(engine.legal_moves().len(), 20);
    engine
        .set_position("rnbqkbnr/1pp1pppp/8/3pP3/p1B5/5N2/PPPP1PPP/RNBQK2R w KQkq d6 0 5")
        .unwrap();
    assert_eq!(engine.legal_moves().len(), 31);
}

#[test]
fn test_scholars_mate() {
    let mut engine = Engine::default();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        assert_eq!(engine.winner(), None);
        engine.play_algebraic(from, to, None).unwrap();
    }
    assert_eq!(engine.winner(), Some(Winner::White));
    assert!(engine.legal_moves().is_empty());
    assert!(engine.ai_move_blocking(Some(2)).is_none());
}

#[test]
fn test_engine_finds_winning_bishop_move() {
    let mut engine = Engine::default();
    engine.set_position("5k2/8/7P/8/5K2/8/4B3/8 w - - 0 1").unwrap();
    let report = engine.ai_move_blocking(Some(5)).unwrap();
    assert_eq!(report.best_move, Move::new(52, 34));
    assert_eq!(report.depth, 5);
    assert_eq!(report.stop_reason, StopReason::Depth);
    assert_eq!(engine.history(), vec![Move::new(52, 34)]);
}

#[test]
fn test_engine_finds_rook_invasion() {
    let mut engine = Engine::default();
    engine
        .set_position("4r1k1/p1p2pp1/1pq4p/8/2PPR2P/1P3Q2/P5P1/6K1 w - - 0 1")
        .unwrap();
    let report = engine.ai_move_blocking(Some(5)).unwrap();
    assert_eq!(report.best_move, Move::new(36, 12));
    assert_eq!(report.depth, 5);
    assert_eq!(engine.history(), vec![Move::new(36, 12)]);
}

#[test]
fn test_ai_takes_hanging_queen() {
    for kind in [CacheKind::Lru, CacheKind::ClearWhenFull] {
        let mut config = EngineConfig::default();
        config.cache.kind = kind;
        config.cache.capacity = 512;
        config.start_position = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1".to_string();
        let mut engine = Engine::new(config).unwrap();

        let report = engine.ai_move_blocking(Some(3)).unwrap();
        assert_eq!(report.best_move, Move::new(36, 27), "{kind:?}");
        assert!(report.nodes > 0);
    }
}

#[test]
fn test_ai_plays_legal_games() {
    let mut config = EngineConfig::default();
    config.search_time_ms = 20;
    config.max_depth = 3;
    let mut engine = Engine::new(config).unwrap();

    for _ in 0..12 {
        if engine.winner().is_some() {
            break;
        }
        let before = engine.legal_moves();
        let report = engine.ai_move_blocking(None).unwrap();
        assert!(before.contains(&report.best_move));
        assert!(report.depth >= 1);
    }
}

#[test]
fn test_underpromotion_through_facade() {
    let mut engine = Engine::default();
    engine.set_position("8/5P1k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    engine
        .play_algebraic("f7", "f8", Some(PieceKind::Rook))
        .unwrap();
    assert_eq!(engine.fen(), "5R2/7k/8/8/8/8/8/K7 b - - 0 1");
}

#[test]
fn test_config_from_json() {
    let config: EngineConfig = serde_json::from_str(
        r#"{
            "start_position": "8/8/8/8/8/8/8/K6k w - - 0 1",
            "search_time_ms": 100,
            "cache": { "kind": "clear_when_full", "capacity": 64 },
            "null_move_pruning": false
        }"#,
    )
    .unwrap();
    let engine = Engine::new(config).unwrap();
    assert_eq!(engine.fen(), "8/8/8/8/8/8/8/K6k w - - 0 1");
    assert_eq!(engine.config().cache.kind, CacheKind::ClearWhenFull);
    assert_eq!(engine.config().max_depth, 32);
}

#[test]
fn test_bad_fen_reports_field() {
    let mut engine = Engine::default();
    let err = engine
        .set_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0")
        .unwrap_err();
    assert!(matches!(
        err,
        ChessEngineError::InvalidFen(FenError::FullmoveNumber { .. })
    ));
    assert_eq!(engine.fen(), START_FEN);
}
