//! Material evaluation
//!
//! Counts plain piece values, without positional terms. The search uses this to decide whether
//! null-move pruning is safe (zugzwang is common when a side has only king and pawns).

use crate::types::{Board, Color, PieceKind};

/// Material balance for White, kings excluded.
pub fn material(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| piece.kind != PieceKind::King)
        .map(|piece| match piece.color {
            Color::White => piece.kind.value(),
            Color::Black => -piece.kind.value(),
        })
        .sum()
}

/// Value of the knights, bishops, rooks and queens owned by `color`.
pub fn non_pawn_material(board: &Board, color: Color) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| piece.color == color)
        .filter(|piece| !matches!(piece.kind, PieceKind::Pawn | PieceKind::King))
        .map(|piece| piece.kind.value())
        .sum()
}
