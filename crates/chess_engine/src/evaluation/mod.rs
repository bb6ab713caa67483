//! Position evaluation with piece-square tables
//!
//! Evaluates boards using material values plus positional bonuses. Both terms are folded into one
//! combined table per (color, kind, square), built once on first use and shared read-only by the
//! whole process.
//!
//! ## Module Organization
//!
//! - `pst` - Raw piece-square tables (White's point of view)
//! - `material` - Material counting used by search heuristics

mod material;
mod pst;

use std::sync::LazyLock;

use crate::board::mirror;
use crate::types::{Board, Color, Piece, PieceKind, Square};

pub use material::{material, non_pawn_material};

type Tables = [[[i32; 64]; 6]; 2];

static TABLES: LazyLock<Tables> = LazyLock::new(build_tables);

fn build_tables() -> Tables {
    let mut tables = [[[0; 64]; 6]; 2];
    for kind in PieceKind::ALL {
        let raw = pst::RAW_TABLES[kind.index()];
        for sq in 0..64 {
            let value = raw[sq] + kind.value();
            tables[Color::White.index()][kind.index()][sq] = value;
            tables[Color::Black.index()][kind.index()][mirror(sq)] = value;
        }
    }
    tables
}

/// Combined material and positional value of `piece` standing on `sq`, always positive-ish and
/// from the owner's point of view.
#[inline]
pub fn piece_square_value(piece: Piece, sq: Square) -> i32 {
    TABLES[piece.color.index()][piece.kind.index()][sq]
}

/// Board value for White (negate for Black's).
pub fn evaluate(board: &Board) -> i32 {
    board
        .iter()
        .enumerate()
        .filter_map(|(sq, cell)| cell.map(|piece| (sq, piece)))
        .map(|(sq, piece)| match piece.color {
            Color::White => piece_square_value(piece, sq),
            Color::Black => -piece_square_value(piece, sq),
        })
        .sum()
}

/// Board value for the given side.
#[inline]
pub fn evaluate_for(board: &Board, color: Color) -> i32 {
    match color {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}
