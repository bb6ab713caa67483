//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! FEN parsing, move validation and engine configuration.

use thiserror::Error;

use crate::types::{PieceKind, Square};

/// Reasons a FEN record is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have 6 space-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("Piece placement must have 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("Rank {rank:?} does not describe exactly 8 squares")]
    RankLength { rank: String },

    #[error("Unknown piece letter {piece:?}")]
    InvalidPiece { piece: char },

    #[error("Side to move must be 'w' or 'b', got {token:?}")]
    SideToMove { token: String },

    #[error("Invalid castling rights {token:?}")]
    Castling { token: String },

    #[error("Invalid en passant square {token:?} (must be '-' or a square on rank 3 or 6)")]
    EnPassant { token: String },

    #[error("Half-move clock must be a non-negative integer, got {token:?}")]
    HalfmoveClock { token: String },

    #[error("Full-move number must be a positive integer, got {token:?}")]
    FullmoveNumber { token: String },
}

/// Errors that can occur in the chess engine
#[derive(Error, Debug)]
pub enum ChessEngineError {
    /// Move is not legal in the current position
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Square index out of bounds or unparsable square name
    #[error("Invalid square: {square:?} (must be 0-63 or a name like \"e4\")")]
    InvalidSquare { square: String },

    /// Promotion piece given for a non-promoting move, or to a king or pawn
    #[error("Invalid promotion to {piece:?} on move from square {from} to square {to}")]
    InvalidPromotion {
        from: Square,
        to: Square,
        piece: PieceKind,
    },

    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] FenError),

    #[error("Invalid engine configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
