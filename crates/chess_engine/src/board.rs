//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square indexing and algebraic names
//! - Edge-aware stepping along direction offsets
//! - Vertical mirroring for piece-square tables

use crate::constants::MAX_FILE_STEP;
use crate::types::{Board, Piece, Square};

/// File of a square, 0 = a-file.
#[inline]
pub fn file(sq: Square) -> usize {
    sq % 8
}

/// Chess rank of a square, 1 = white back rank.
#[inline]
pub fn rank(sq: Square) -> usize {
    8 - sq / 8
}

/// Square from a 0-based file and a 1-based rank.
#[inline]
pub fn square_at(file: usize, rank: usize) -> Square {
    (8 - rank) * 8 + file
}

/// The same square seen from the other side of the board (ranks flipped, file kept).
#[inline]
pub fn mirror(sq: Square) -> Square {
    sq ^ 56
}

#[inline]
fn file_distance(a: Square, b: Square) -> usize {
    file(a).abs_diff(file(b))
}

/// One step from `from` along `dir`, or `None` when the step leaves the board.
///
/// Steps that fall off the top or bottom land outside `0..64`; steps that wrap around the side
/// edge are caught by the file distance, which a real step never pushes past [`MAX_FILE_STEP`].
#[inline]
pub fn step(from: Square, dir: isize) -> Option<Square> {
    let to = from.checked_add_signed(dir)?;
    if to >= 64 || file_distance(from, to) > MAX_FILE_STEP {
        return None;
    }
    Some(to)
}

/// Algebraic name, e.g. `e4`.
pub fn square_name(sq: Square) -> String {
    let file = (b'a' + file(sq) as u8) as char;
    format!("{}{}", file, rank(sq))
}

/// Parses an algebraic square name. Anything that is not a file letter followed by a rank digit
/// yields `None`.
pub fn parse_square(name: &str) -> Option<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a').filter(|f| *f < 8)?;
    let rank = bytes[1].checked_sub(b'0').filter(|r| (1..=8).contains(r))?;
    Some(square_at(file as usize, rank as usize))
}

/// An empty board.
#[inline]
pub fn empty_board() -> Board {
    [None; 64]
}

/// Square holding the given piece, scanning from a8.
pub fn find_piece(board: &Board, piece: Piece) -> Option<Square> {
    board.iter().position(|p| *p == Some(piece))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(0), "a8");
        assert_eq!(square_name(63), "h1");
        assert_eq!(square_name(52), "e2");
        assert_eq!(parse_square("e4"), Some(36));
        assert_eq!(parse_square("a1"), Some(56));
        assert_eq!(parse_square("h8"), Some(7));
    }

    #[test]
    fn test_parse_square_rejects_garbage() {
        for bad in ["", "e", "e9", "i1", "e0", "E2", "e22", "42"] {
            assert_eq!(parse_square(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_mirror_is_vertical_flip() {
        assert_eq!(mirror(0), 56);
        assert_eq!(mirror(63), 7);
        assert_eq!(mirror(52), 12);
        assert_eq!(mirror(57), 1);
        assert_eq!(mirror(7), 63);
        for sq in 0..64 {
            assert_eq!(mirror(mirror(sq)), sq);
            assert_eq!(file(mirror(sq)), file(sq));
        }
    }

    #[test]
    fn test_step_rejects_wraparound() {
        // h-file pawn capturing "east" would land on the a-file of the next rank
        assert_eq!(step(55, N + O), None);
        assert_eq!(step(48, N + W), None);
        // knight on b1 going two files west
        assert_eq!(step(57, W + W + N), None);
        assert_eq!(step(57, N + N + W), Some(40));
        assert_eq!(step(3, N), None);
        assert_eq!(step(60, S), None);
        assert_eq!(step(60, N), Some(52));
    }

    #[test]
    fn test_find_piece() {
        let mut board = empty_board();
        let black_king = Piece::new(PieceKind::King, Color::Black);
        assert_eq!(find_piece(&board, black_king), None);
        board[4] = Some(black_king);
        board[60] = Some(Piece::new(PieceKind::King, Color::White));
        assert_eq!(find_piece(&board, black_king), Some(4));
    }
}
