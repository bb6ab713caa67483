//! Attack detection and square checking
//!
//! Check detection looks outward from the target square instead of generating the opponent's
//! moves: rook and bishop rays (first occupant only), knight and king offsets, and the two
//! squares a pawn could capture from.

use crate::board::{file, find_piece, step};
use crate::constants::{BISHOP_DIRS, KING_DIRS, KNIGHT_DIRS, O, ROOK_DIRS, W};
use crate::types::{Board, Color, Move, Piece, PieceKind, Square};

fn first_occupant(board: &Board, from: Square, dir: isize) -> Option<Piece> {
    let mut cur = from;
    while let Some(next) = step(cur, dir) {
        if let Some(piece) = board[next] {
            return Some(piece);
        }
        cur = next;
    }
    None
}

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - The board to inspect
/// * `square` - Target square index (0-63)
/// * `by` - Color of the pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // is e4 attacked by black?
/// let attacked = is_square_attacked(pos.board(), 36, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let is = |piece: Option<Piece>, kinds: &[PieceKind]| {
        piece.is_some_and(|p| p.color == by && kinds.contains(&p.kind))
    };

    let straight = [PieceKind::Rook, PieceKind::Queen];
    if ROOK_DIRS
        .iter()
        .any(|&dir| is(first_occupant(board, square, dir), &straight))
    {
        return true;
    }
    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    if BISHOP_DIRS
        .iter()
        .any(|&dir| is(first_occupant(board, square, dir), &diagonal))
    {
        return true;
    }

    let stepper = |dirs: &[isize], kind: PieceKind| {
        dirs.iter()
            .filter_map(|&dir| step(square, dir))
            .any(|sq| is(board[sq], &[kind]))
    };
    if stepper(&KNIGHT_DIRS, PieceKind::Knight) || stepper(&KING_DIRS, PieceKind::King) {
        return true;
    }

    // a pawn of `by` attacks from one rank behind, relative to its own direction
    let behind = -by.forward();
    stepper(&[behind + W, behind + O], PieceKind::Pawn)
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    find_piece(board, Piece::new(PieceKind::King, color))
        .is_some_and(|sq| is_square_attacked(board, sq, color.opponent()))
}

/// Whether a generated move could capture on its target square. Straight pawn pushes and
/// castles never can.
pub fn is_attacking_move(board: &Board, mv: Move) -> bool {
    match board.get(mv.from).copied().flatten() {
        Some(p) if p.kind == PieceKind::Pawn => file(mv.from) != file(mv.to),
        Some(p) if p.kind == PieceKind::King => mv.from.abs_diff(mv.to) != 2,
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn check_status(fen: &str) -> (bool, bool) {
        let pos = Position::from_fen(fen).unwrap();
        (
            in_check(pos.board(), Color::White),
            in_check(pos.board(), Color::Black),
        )
    }

    #[test]
    fn test_known_check_positions() {
        let cases = [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", (false, false)),
            // scholar's mate
            ("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4", (false, true)),
            // fool's mate
            ("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3", (true, false)),
            // knight check
            ("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1", (false, true)),
            // black pawn gives check, white pawn in front of its own king does not
            ("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1", (true, false)),
            ("4k3/4P3/8/8/8/8/8/4K3 b - - 0 1", (false, false)),
            ("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1", (false, true)),
            // rook check blocked by a bishop
            ("4k3/8/8/8/4r3/8/4B3/4K3 w - - 0 1", (false, false)),
            ("4k3/8/8/8/4r3/8/8/4K3 w - - 0 1", (true, false)),
            // pawn on the h-file must not wrap to attack the a-file
            ("4k3/8/8/8/8/8/7p/K7 w - - 0 1", (false, false)),
        ];
        for (fen, expected) in cases {
            assert_eq!(check_status(fen), expected, "{fen}");
        }
    }

    #[test]
    fn test_square_attacked_by_pawns() {
        let pos = Position::start();
        assert!(is_square_attacked(pos.board(), 44, Color::White), "e3 covered by d2/f2");
        assert!(!is_square_attacked(pos.board(), 36, Color::White), "e4 not covered");
        assert!(is_square_attacked(pos.board(), 20, Color::Black), "e6 covered by d7/f7");
    }

    #[test]
    fn test_attacking_moves() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/4P3/R3K2R w KQkq - 0 1").unwrap();
        assert!(!is_attacking_move(pos.board(), Move::new(52, 44)));
        assert!(!is_attacking_move(pos.board(), Move::new(60, 62)));
        assert!(is_attacking_move(pos.board(), Move::new(60, 61)));
        assert!(is_attacking_move(pos.board(), Move::new(56, 48)));
    }
}
