//! Game state queries
//!
//! Game over detection: checkmate, stalemate, the fifty-move rule and threefold repetition.

use serde::Serialize;
use std::fmt;

use super::Engine;
use crate::constants::{FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Winner::White => "white",
            Winner::Black => "black",
            Winner::Tie => "tie",
        })
    }
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

impl Engine {
    /// Result of the game, or `None` while it is still going.
    pub fn winner(&self) -> Option<Winner> {
        let pos = &self.current;
        if pos.legal_moves().is_empty() {
            return Some(if pos.in_check(pos.turn()) {
                pos.turn().opponent().into()
            } else {
                Winner::Tie
            });
        }
        if self.is_fifty_move_draw() || self.is_threefold_repetition() {
            return Some(Winner::Tie);
        }
        None
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.current.halfmove_clock() >= FIFTY_MOVE_LIMIT
    }

    /// Whether the current board has occurred three times since the position was set.
    ///
    /// Only piece placement is compared; side to move and rights are ignored.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = &self.current;
        current
            .ancestors()
            .filter(|pos| {
                pos.board_hash() == current.board_hash() && pos.board() == current.board()
            })
            .count()
            >= REPETITION_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_in_progress() {
        let engine = Engine::default();
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_checkmate_winner() {
        let mut engine = Engine::default();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            engine.play_algebraic(from, to, None).unwrap();
        }
        assert_eq!(engine.winner(), Some(Winner::Black));

        engine
            .set_position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .unwrap();
        assert_eq!(engine.winner(), Some(Winner::White));
    }

    #[test]
    fn test_stalemate_is_tie() {
        let mut engine = Engine::default();
        engine.set_position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(engine.winner(), Some(Winner::Tie));
    }

    #[test]
    fn test_fifty_move_rule() {
        let mut engine = Engine::default();
        engine.set_position("4k3/8/8/8/8/8/8/R3K3 w - - 49 80").unwrap();
        assert!(!engine.is_fifty_move_draw());
        assert_eq!(engine.winner(), None);

        engine.play_algebraic("a1", "a2", None).unwrap();
        assert!(engine.is_fifty_move_draw());
        assert_eq!(engine.winner(), Some(Winner::Tie));
    }

    #[test]
    fn test_threefold_repetition() {
        let mut engine = Engine::default();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for (from, to) in shuffle {
            engine.play_algebraic(from, to, None).unwrap();
        }
        assert!(!engine.is_threefold_repetition(), "second occurrence");
        for (from, to) in shuffle {
            engine.play_algebraic(from, to, None).unwrap();
        }
        assert!(engine.is_threefold_repetition());
        assert_eq!(engine.winner(), Some(Winner::Tie));

        assert!(engine.undo());
        assert!(!engine.is_threefold_repetition());
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::Tie.to_string(), "tie");
        assert_eq!(serde_json::to_string(&Winner::White).unwrap(), "\"white\"");
    }
}
