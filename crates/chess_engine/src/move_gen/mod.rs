//! Move generation
//!
//! Two layers:
//!
//! - [`Position::gen_moves`] produces pseudo-legal moves for one color: every move the pieces can
//!   physically make, including ones that leave the king en prise and castles through attacked
//!   squares. Squares are scanned from a8 to h1; a king's castling candidates come before its
//!   ordinary steps.
//! - [`Position::valid`] and [`Position::legal_moves`] filter that list by playing each move and
//!   looking at the reply: the mover's king must not be capturable, and after a castle no opposing
//!   move may land next to the king-passant square.
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, captures, en passant
//! - `sliding` - knights, bishops, rooks, queens and king steps
//! - `king` - castling candidates
//! - `attack` - check and attack detection

mod attack;
mod king;
mod pawn;
mod sliding;

pub use attack::{in_check, is_attacking_move, is_square_attacked};
pub use king::generate_castling_moves;
pub use pawn::generate_pawn_moves;
pub use sliding::generate_piece_moves;

use crate::position::Position;
use crate::types::{Color, Move, PieceKind};

impl Position {
    /// Pseudo-legal moves for `color`, in generation order.
    ///
    /// The en-passant target and the king-passant squares only apply when `color` is the side
    /// to move.
    pub fn gen_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, cell) in self.board().iter().enumerate() {
            let Some(piece) = *cell else { continue };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(self, from, color, &mut moves),
                PieceKind::King => {
                    generate_castling_moves(self, from, color, &mut moves);
                    generate_piece_moves(self.board(), from, piece, &mut moves);
                }
                _ => generate_piece_moves(self.board(), from, piece, &mut moves),
            }
        }
        moves
    }

    /// Whether a pseudo-legal move by the side to move survives the opponent's reply.
    fn survives_reply(&self, mv: Move) -> bool {
        let child = self.make_move(mv);
        if child.in_check(self.turn()) {
            return false;
        }
        match child.king_passant() {
            Some(kp) => !child
                .gen_moves(child.turn())
                .into_iter()
                .filter(|reply| is_attacking_move(child.board(), *reply))
                .any(|reply| reply.to.abs_diff(kp) < 2),
            None => true,
        }
    }

    /// Whether `mv` is legal for the side to move. Only origin and target are compared; the
    /// promotion choice is not looked at.
    pub fn valid(&self, mv: Move) -> bool {
        if !self
            .piece_at(mv.from)
            .is_some_and(|piece| piece.color == self.turn())
        {
            return false;
        }
        self.gen_moves(self.turn())
            .iter()
            .any(|candidate| candidate.same_squares(&mv))
            && self.survives_reply(mv)
    }

    /// All legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.gen_moves(self.turn())
            .into_iter()
            .filter(|mv| self.survives_reply(*mv))
            .collect()
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        in_check(self.board(), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_square;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(parse_square(from).unwrap(), parse_square(to).unwrap())
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let pos = Position::start();
        assert_eq!(pos.gen_moves(Color::White).len(), 20);
        assert_eq!(pos.legal_moves().len(), 20);
        assert_eq!(pos.gen_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_midgame_move_count() {
        let pos = Position::from_fen(
            "rnbqkbnr/1pp1pppp/8/3pP3/p1B5/5N2/PPPP1PPP/RNBQK2R w KQkq d6 0 5",
        )
        .unwrap();
        assert_eq!(pos.legal_moves().len(), 31);
        assert!(pos.valid(mv("e5", "d6")), "en passant");
        assert!(pos.valid(mv("e1", "g1")), "castle");
    }

    #[test]
    fn test_castle_order_first_for_king() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let king_moves: Vec<Move> = pos
            .gen_moves(Color::White)
            .into_iter()
            .filter(|m| m.from == 60)
            .collect();
        assert_eq!(king_moves[0], Move::new(60, 62));
    }

    #[test]
    fn test_cannot_castle_through_check() {
        // black rook on f8 covers f1
        let pos = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert!(pos.gen_moves(Color::White).contains(&mv("e1", "g1")));
        assert!(!pos.valid(mv("e1", "g1")));

        // rook on e8 gives check: castling out of check is illegal too
        let pos = Position::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert!(!pos.valid(mv("e1", "g1")));

        // a rook covering only h1 does not stop the castle
        let pos = Position::from_fen("6kr/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert!(pos.valid(mv("e1", "g1")));
    }

    #[test]
    fn test_cannot_castle_queenside_through_pawn_attack() {
        // black pawn on e2 attacks d1
        let pos = Position::from_fen("4k3/8/8/8/8/8/4p3/R3K3 w Q - 0 1").unwrap();
        assert!(!pos.valid(mv("e1", "c1")));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let pos = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
        assert!(!pos.valid(mv("e2", "d3")));
        assert!(pos.valid(mv("e1", "d1")));
        assert!(!pos.valid(mv("e1", "e2")), "own piece");
    }

    #[test]
    fn test_valid_rejects_garbage() {
        let pos = Position::start();
        assert!(!pos.valid(Move::new(64, 36)));
        assert!(!pos.valid(Move::new(52, 99)));
        assert!(!pos.valid(Move::new(36, 28)), "empty origin");
        assert!(!pos.valid(mv("e7", "e5")), "not black's turn");
        assert!(!pos.valid(mv("e2", "e5")));
    }

    #[test]
    fn test_checkmate_has_no_legal_moves() {
        let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert!(pos.in_check(Color::White));
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn test_stalemate_has_no_legal_moves() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!pos.in_check(Color::Black));
        assert!(pos.legal_moves().is_empty());
    }
}
