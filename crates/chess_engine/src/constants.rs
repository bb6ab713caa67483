//! # Chess Engine Constants - Piece Values, Directions & Search Limits
//!
//! ## Board Geometry
//!
//! The board is a flat mailbox of 64 squares, indexed row-major from the black back rank:
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
//!   +------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! Movement is encoded as signed offsets into that array:
//! - **North (N)**: -8 (towards the black back rank)
//! - **South (S)**: +8
//! - **East (O)**: +1 (towards the h-file)
//! - **West (W)**: -1
//! - **Diagonals**: combinations (NO, NW, SO, SW)
//!
//! A single legal step never changes the file by more than two (the knight's long leg), while
//! any step that wraps around the board edge changes it by at least six. [`MAX_FILE_STEP`] is the
//! threshold move generation uses to reject wrapped steps.
//!
//! ## Centipawn Valuation
//!
//! Scores are integer centipawns. The king is valued far above everything else combined so that a
//! king capture dominates every other term; the search relies on that for its castling sentinel.
//! Checkmate is scored separately through [`MATE`], which sits above any reachable evaluation.

pub const S: isize = 8;
pub const O: isize = 1;
pub const N: isize = -S;
pub const W: isize = -O;
pub const NO: isize = N + O;
pub const NW: isize = N + W;
pub const SO: isize = S + O;
pub const SW: isize = S + W;

/// White pawn steps: single push, double push, captures.
pub const PAWN_DIRS_WHITE: [isize; 4] = [N, N + N, N + W, N + O];
pub const PAWN_DIRS_BLACK: [isize; 4] = [S, S + S, S + W, S + O];

pub const KNIGHT_DIRS: [isize; 8] = [
    N + N + W, N + N + O, W + W + N, W + W + S,
    S + S + O, S + S + W, O + O + N, O + O + S,
];
pub const BISHOP_DIRS: [isize; 4] = [NW, NO, SW, SO];
pub const ROOK_DIRS: [isize; 4] = [N, O, S, W];
pub const KING_DIRS: [isize; 8] = [N, NO, O, SO, S, SW, W, NW];

/// Largest file change a non-wrapping step can make.
pub const MAX_FILE_STEP: usize = 2;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 30000;

/// Indexed by [`PieceKind::index`](crate::types::PieceKind::index).
pub const FIGURE_VALUE: [i32; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Score of being checkmated at the root; mates further away score closer to zero.
pub const MATE: i32 = 100_000;
/// Scores beyond this magnitude are forced mates.
pub const MATE_BOUND: i32 = MATE - 1_000;
/// Search window bound, strictly above any score the search can return.
pub const AB_INF: i32 = 1_000_000;

pub const WHITE_KING_HOME: usize = 60;
pub const BLACK_KING_HOME: usize = 4;

/// Rook home squares.
pub const A8: usize = 0;
pub const H8: usize = 7;
pub const A1: usize = 56;
pub const H1: usize = 63;

/// Squares a king can pass over while castling: d8, f8, d1, f1.
pub const KING_PASSANT_SQUARES: [usize; 4] = [3, 5, 59, 61];

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Seed for the Zobrist key generator. Any fixed value works; keeping it fixed keeps hashes
/// reproducible across runs.
pub const ZOBRIST_SEED: u64 = 27102;

pub const MAX_DEPTH: u32 = 32;
pub const DEFAULT_SEARCH_TIME_MS: u64 = 1000;
pub const DEFAULT_CACHE_CAPACITY: usize = 100_000;
pub const DEFAULT_MOVE_CACHE_CAPACITY: usize = 20_000;

/// Nodes searched between two wall-clock checks.
pub const TIME_CHECK_INTERVAL: u64 = 1024;

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;
pub const REPETITION_LIMIT: usize = 3;

/// Depth reduction for null-move pruning.
pub const NULL_MOVE_REDUCTION: u32 = 2;
