//! Zobrist hashing
//!
//! Positions are hashed as a pair of independent 32-bit halves. `low` picks the transposition
//! cache bucket and `high` tells entries within a bucket apart, so two positions only share an
//! entry when both halves collide.
//!
//! Keys come from a seeded PRNG and are generated once, on first use. The position hash covers
//! pieces, side to move (toggled in while White is to move), castling rights, the en-passant file
//! and the king-passant square. The board hash covers pieces only and is what repetition detection
//! compares.

use std::ops::{BitXor, BitXorAssign};
use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::file;
use crate::constants::{KING_PASSANT_SQUARES, ZOBRIST_SEED};
use crate::types::{Board, CastlingRights, Color, Piece, Square};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HashPair {
    pub low: u32,
    pub high: u32,
}

impl HashPair {
    pub const ZERO: HashPair = HashPair { low: 0, high: 0 };

    fn random(rng: &mut StdRng) -> HashPair {
        HashPair {
            low: rng.random(),
            high: rng.random(),
        }
    }
}

impl BitXor for HashPair {
    type Output = HashPair;

    #[inline]
    fn bitxor(self, rhs: HashPair) -> HashPair {
        HashPair {
            low: self.low ^ rhs.low,
            high: self.high ^ rhs.high,
        }
    }
}

impl BitXorAssign for HashPair {
    #[inline]
    fn bitxor_assign(&mut self, rhs: HashPair) {
        self.low ^= rhs.low;
        self.high ^= rhs.high;
    }
}

pub struct ZobristKeys {
    pieces: [[[HashPair; 64]; 6]; 2],
    /// `[color][0 = kingside, 1 = queenside]`
    castling: [[HashPair; 2]; 2],
    turn: HashPair,
    ep_file: [HashPair; 8],
    king_passant: [HashPair; 4],
}

static KEYS: LazyLock<ZobristKeys> = LazyLock::new(|| ZobristKeys::generate(ZOBRIST_SEED));

impl ZobristKeys {
    fn generate(seed: u64) -> ZobristKeys {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pieces = [[[HashPair::ZERO; 64]; 6]; 2];
        for by_color in pieces.iter_mut() {
            for by_kind in by_color.iter_mut() {
                for key in by_kind.iter_mut() {
                    *key = HashPair::random(&mut rng);
                }
            }
        }
        let turn = HashPair::random(&mut rng);
        let mut castling = [[HashPair::ZERO; 2]; 2];
        for key in castling.iter_mut().flatten() {
            *key = HashPair::random(&mut rng);
        }
        let ep_file = std::array::from_fn(|_| HashPair::random(&mut rng));
        let king_passant = std::array::from_fn(|_| HashPair::random(&mut rng));

        ZobristKeys {
            pieces,
            castling,
            turn,
            ep_file,
            king_passant,
        }
    }
}

pub fn keys() -> &'static ZobristKeys {
    &KEYS
}

impl ZobristKeys {
    #[inline]
    pub fn piece(&self, piece: Piece, sq: Square) -> HashPair {
        self.pieces[piece.color.index()][piece.kind.index()][sq]
    }

    /// Key for an optional occupant, zero for an empty square.
    #[inline]
    pub fn cell(&self, cell: Option<Piece>, sq: Square) -> HashPair {
        cell.map_or(HashPair::ZERO, |piece| self.piece(piece, sq))
    }

    #[inline]
    pub fn turn(&self) -> HashPair {
        self.turn
    }

    /// XOR of the keys of every right that is set.
    pub fn castling(&self, color: Color, rights: CastlingRights) -> HashPair {
        let keys = &self.castling[color.index()];
        let mut hash = HashPair::ZERO;
        if rights.kingside {
            hash ^= keys[0];
        }
        if rights.queenside {
            hash ^= keys[1];
        }
        hash
    }

    #[inline]
    pub fn en_passant(&self, ep: Option<Square>) -> HashPair {
        ep.map_or(HashPair::ZERO, |sq| self.ep_file[file(sq)])
    }

    /// Only the four squares a castling king crosses carry a key.
    pub fn king_passant(&self, kp: Option<Square>) -> HashPair {
        kp.and_then(|sq| KING_PASSANT_SQUARES.iter().position(|s| *s == sq))
            .map_or(HashPair::ZERO, |i| self.king_passant[i])
    }
}

/// Piece-placement hash.
pub fn hash_board(board: &Board) -> HashPair {
    let keys = keys();
    board
        .iter()
        .enumerate()
        .fold(HashPair::ZERO, |hash, (sq, cell)| hash ^ keys.cell(*cell, sq))
}

/// Full position hash computed from scratch.
pub fn hash_position(
    board: &Board,
    turn: Color,
    castling: &[CastlingRights; 2],
    ep: Option<Square>,
    kp: Option<Square>,
) -> HashPair {
    let keys = keys();
    let mut hash = hash_board(board);
    if turn == Color::White {
        hash ^= keys.turn();
    }
    hash ^= keys.castling(Color::White, castling[Color::White.index()]);
    hash ^= keys.castling(Color::Black, castling[Color::Black.index()]);
    hash ^= keys.en_passant(ep);
    hash ^= keys.king_passant(kp);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_keys_are_reproducible() {
        let a = ZobristKeys::generate(ZOBRIST_SEED);
        let b = ZobristKeys::generate(ZOBRIST_SEED);
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(a.piece(pawn, 52), b.piece(pawn, 52));
        assert_eq!(a.turn(), b.turn());

        let other = ZobristKeys::generate(ZOBRIST_SEED + 1);
        assert_ne!(a.piece(pawn, 52), other.piece(pawn, 52));
    }

    #[test]
    fn test_piece_keys_are_distinct() {
        let keys = keys();
        let mut seen = std::collections::HashSet::new();
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                for sq in 0..64 {
                    assert!(seen.insert(keys.piece(Piece::new(kind, color), sq)));
                }
            }
        }
    }

    #[test]
    fn test_turn_key_only_for_white() {
        let board = crate::board::empty_board();
        let rights = [CastlingRights::NONE; 2];
        let white = hash_position(&board, Color::White, &rights, None, None);
        let black = hash_position(&board, Color::Black, &rights, None, None);
        assert_eq!(black, HashPair::ZERO);
        assert_eq!(white, keys().turn());
    }

    #[test]
    fn test_en_passant_key_depends_on_file_only() {
        let keys = keys();
        assert_eq!(keys.en_passant(Some(20)), keys.en_passant(Some(44)));
        assert_ne!(keys.en_passant(Some(20)), keys.en_passant(Some(21)));
        assert_eq!(keys.en_passant(None), HashPair::ZERO);
    }

    #[test]
    fn test_king_passant_keys() {
        let keys = keys();
        assert_ne!(keys.king_passant(Some(61)), HashPair::ZERO);
        assert_ne!(keys.king_passant(Some(61)), keys.king_passant(Some(59)));
        assert_eq!(keys.king_passant(Some(60)), HashPair::ZERO);
    }
}
