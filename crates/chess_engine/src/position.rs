//! # Immutable Positions
//!
//! A [`Position`] is a complete snapshot of a game: board, side to move, castling rights,
//! en-passant target, king-passant square, clocks, plus three derived values kept in sync
//! incrementally: the side-relative score, the position hash and the board hash.
//!
//! Positions are never mutated after construction. [`Position::make_move`] and
//! [`Position::null_move`] return fresh positions and leave `self` untouched. The board is a plain
//! array, so every derived position owns its own copy.
//!
//! ## One plan, three consumers
//!
//! Applying a move, scoring it and hashing it all need the same facts: which squares change and
//! what they hold before and after, plus the new rights/en-passant/king-passant state. A private
//! `Transition` computes those once, and `make_move`, `value` and `hash_move` each fold it their
//! own way. That keeps the incremental hash and score bit-identical to a from-scratch recompute.
//!
//! ## King passant
//!
//! After a castle the square the king crossed is remembered for one ply. Move generation lets the
//! opponent "attack" the squares around it, legality checking rejects the castle if any of them is
//! hit, and [`Position::value`] scores such an attack as a king capture.
//!
//! ## Move chains
//!
//! [`Position::advance`] links the child to an `Arc` of its parent so a game can be replayed or
//! undone. Links run child to parent only. Search uses `make_move`, which does not link.

use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::sync::Arc;

use crate::board::{rank, step};
use crate::constants::*;
use crate::evaluation::{evaluate_for, piece_square_value};
use crate::hash::{hash_board, hash_position, keys, HashPair};
use crate::types::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

#[derive(Clone)]
pub struct Position {
    board: Board,
    turn: Color,
    castling: [CastlingRights; 2],
    ep: Option<Square>,
    kp: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    score: i32,
    hash: HashPair,
    board_hash: HashPair,
    last_move: Option<Move>,
    parent: Option<Arc<Position>>,
}

/// A square whose content changes: `(square, before, after)`.
type Change = (Square, Option<Piece>, Option<Piece>);

struct Transition {
    mover: Color,
    changes: SmallVec<[Change; 4]>,
    castling: [CastlingRights; 2],
    ep: Option<Square>,
    kp: Option<Square>,
    /// Pawn move or capture.
    resets_clock: bool,
}

#[rustfmt::skip]
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

impl Position {
    /// Builds a position from its raw parts, computing score and hashes from scratch.
    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        castling: [CastlingRights; 2],
        ep: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Position {
        Position {
            score: evaluate_for(&board, turn),
            hash: hash_position(&board, turn, &castling, ep, None),
            board_hash: hash_board(&board),
            board,
            turn,
            castling,
            ep,
            kp: None,
            halfmove_clock,
            fullmove_number,
            last_move: None,
            parent: None,
        }
    }

    /// The standard starting position.
    pub fn start() -> Position {
        let mut board = crate::board::empty_board();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board[file] = Some(Piece::new(kind, Color::Black));
            board[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board[56 + file] = Some(Piece::new(kind, Color::White));
        }
        Position::from_parts(board, Color::White, [CastlingRights::ALL; 2], None, 0, 1)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq).copied().flatten()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> [CastlingRights; 2] {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.ep
    }

    #[inline]
    pub fn king_passant(&self) -> Option<Square> {
        self.kp
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Evaluation from the point of view of the side to move.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn hash(&self) -> HashPair {
        self.hash
    }

    #[inline]
    pub fn board_hash(&self) -> HashPair {
        self.board_hash
    }

    /// The move that produced this position, if it was derived from another one.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn parent(&self) -> Option<&Arc<Position>> {
        self.parent.as_ref()
    }

    /// This position followed by its linked ancestors, newest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Position> {
        std::iter::successors(Some(self), |pos| pos.parent.as_deref())
    }

    /// Moves leading from the oldest linked ancestor to this position.
    pub fn move_chain(&self) -> Vec<Move> {
        let mut chain: Vec<Move> = self.ancestors().filter_map(|pos| pos.last_move).collect();
        chain.reverse();
        chain
    }

    /// `(hash, board_hash)` recomputed from scratch.
    pub fn compute_hashes(&self) -> (HashPair, HashPair) {
        (
            hash_position(&self.board, self.turn, &self.castling, self.ep, self.kp),
            hash_board(&self.board),
        )
    }

    fn transition(&self, mv: Move) -> Transition {
        let mut t = Transition {
            mover: self.turn,
            changes: SmallVec::new(),
            castling: self.castling,
            ep: None,
            kp: None,
            resets_clock: false,
        };
        let (Some(piece), Some(captured)) = (self.piece_at(mv.from), self.board.get(mv.to).copied())
        else {
            return t;
        };
        t.mover = piece.color;
        t.resets_clock = captured.is_some();
        t.changes = smallvec![(mv.from, Some(piece), None)];
        let mut placed = piece;

        match piece.kind {
            PieceKind::King => {
                t.castling[piece.color.index()] = CastlingRights::NONE;
                let home = mv.from == WHITE_KING_HOME || mv.from == BLACK_KING_HOME;
                if home && mv.from.abs_diff(mv.to) == 2 {
                    let (rook_from, rook_to) = if mv.to > mv.from {
                        (mv.from + 3, mv.from + 1)
                    } else {
                        (mv.from - 4, mv.from - 1)
                    };
                    let rook = self.board[rook_from];
                    t.changes.push((rook_from, rook, None));
                    t.changes.push((rook_to, self.board[rook_to], rook));
                    t.kp = Some(rook_to);
                }
            }
            PieceKind::Pawn => {
                t.resets_clock = true;
                let forward = piece.color.forward();
                if mv.to as isize - mv.from as isize == 2 * forward {
                    t.ep = step(mv.from, forward);
                } else if Some(mv.to) == self.ep && captured.is_none() {
                    if let Some(behind) = step(mv.to, -forward) {
                        t.changes.push((behind, self.board[behind], None));
                    }
                }
                if matches!(rank(mv.to), 1 | 8) {
                    placed = Piece::new(mv.promotion.unwrap_or(PieceKind::Queen), piece.color);
                }
            }
            _ => {}
        }

        for sq in [mv.from, mv.to] {
            match sq {
                A1 => t.castling[Color::White.index()].queenside = false,
                H1 => t.castling[Color::White.index()].kingside = false,
                A8 => t.castling[Color::Black.index()].queenside = false,
                H8 => t.castling[Color::Black.index()].kingside = false,
                _ => {}
            }
        }

        t.changes.push((mv.to, captured, Some(placed)));
        t
    }

    /// Score delta of a transition for the side making it.
    fn delta(&self, t: &Transition) -> i32 {
        let relative = |cell: Option<Piece>, sq: Square| match cell {
            Some(p) if p.color == t.mover => piece_square_value(p, sq),
            Some(p) => -piece_square_value(p, sq),
            None => 0,
        };
        t.changes
            .iter()
            .map(|&(sq, before, after)| relative(after, sq) - relative(before, sq))
            .sum()
    }

    fn transition_hashes(&self, t: &Transition) -> (HashPair, HashPair) {
        let keys = keys();
        let mut board_hash = self.board_hash;
        for &(sq, before, after) in &t.changes {
            board_hash ^= keys.cell(before, sq) ^ keys.cell(after, sq);
        }

        let mut hash = self.hash ^ self.board_hash ^ board_hash ^ keys.turn();
        for color in [Color::White, Color::Black] {
            hash ^= keys.castling(color, self.castling[color.index()]);
            hash ^= keys.castling(color, t.castling[color.index()]);
        }
        hash ^= keys.en_passant(self.ep) ^ keys.en_passant(t.ep);
        hash ^= keys.king_passant(self.kp) ^ keys.king_passant(t.kp);
        (hash, board_hash)
    }

    /// Applies a pseudo-legal move and returns the resulting position.
    ///
    /// The move is not checked; gate it with [`Position::valid`] first. A pawn reaching the last
    /// rank without an explicit promotion becomes a queen.
    pub fn make_move(&self, mv: Move) -> Position {
        let t = self.transition(mv);
        let mut board = self.board;
        for &(sq, _, after) in &t.changes {
            board[sq] = after;
        }
        let (hash, board_hash) = self.transition_hashes(&t);

        Position {
            board,
            turn: self.turn.opponent(),
            castling: t.castling,
            ep: t.ep,
            kp: t.kp,
            halfmove_clock: if t.resets_clock {
                0
            } else {
                self.halfmove_clock.saturating_add(1)
            },
            fullmove_number: self.fullmove_number
                .saturating_add(u32::from(self.turn == Color::Black)),
            score: -(self.score + self.delta(&t)),
            hash,
            board_hash,
            last_move: Some(mv),
            parent: None,
        }
    }

    /// Like [`Position::make_move`], but links the result to `parent` for move-chain replay.
    pub fn advance(parent: &Arc<Position>, mv: Move) -> Position {
        let mut child = parent.make_move(mv);
        child.parent = Some(Arc::clone(parent));
        child
    }

    /// Passes the turn without moving.
    pub fn null_move(&self) -> Position {
        let keys = keys();
        Position {
            board: self.board,
            turn: self.turn.opponent(),
            castling: self.castling,
            ep: None,
            kp: None,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            score: -self.score,
            hash: self.hash ^ keys.turn() ^ keys.en_passant(self.ep) ^ keys.king_passant(self.kp),
            board_hash: self.board_hash,
            last_move: None,
            parent: None,
        }
    }

    /// Score gained by the side to move when playing `mv`, without building the child.
    ///
    /// Right after the opponent castled, any move landing within one square of the king-passant
    /// square is worth a whole king: the castle went through an attacked square.
    pub fn value(&self, mv: Move) -> i32 {
        if let Some(kp) = self.kp {
            if mv.to.abs_diff(kp) < 2 {
                return KING_VALUE;
            }
        }
        self.delta(&self.transition(mv))
    }

    /// `(hash, board_hash)` the position after `mv` would carry.
    pub fn hash_move(&self, mv: Move) -> (HashPair, HashPair) {
        self.transition_hashes(&self.transition(mv))
    }

    /// Whether `mv` would be a pawn move onto the last rank.
    pub fn is_promotion(&self, mv: Move) -> bool {
        self.piece_at(mv.from)
            .is_some_and(|p| p.kind == PieceKind::Pawn && matches!(rank(mv.to), 1 | 8))
    }
}

impl PartialEq for Position {
    /// Compares game state only; move-chain links are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.turn == other.turn
            && self.castling == other.castling
            && self.ep == other.ep
            && self.kp == other.kp
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.score == other.score
            && self.hash == other.hash
            && self.board_hash == other.board_hash
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("kp", &self.kp)
            .field("score", &self.score)
            .field("hash", &self.hash)
            .finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(8) {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::to_fen_char))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
