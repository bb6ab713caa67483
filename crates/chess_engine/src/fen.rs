//! FEN import and export
//!
//! Import is strict: anything that is not a well-formed six-field record is rejected with a
//! [`FenError`] naming the offending field, and no position is built. Export writes castling
//! rights in `KQkq` order, so canonical records round-trip exactly.

use tracing::warn;

use crate::board::{empty_board, parse_square, rank, square_name};
use crate::error::FenError;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece};

fn parse_placement(field: &str) -> Result<crate::types::Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut board = empty_board();
    for (row, text) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(FenError::RankLength {
                        rank: text.to_string(),
                    });
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                if file < 8 {
                    board[row * 8 + file] = Some(piece);
                }
                file += 1;
            }
            if file > 8 {
                break;
            }
        }
        if file != 8 {
            return Err(FenError::RankLength {
                rank: text.to_string(),
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<[CastlingRights; 2], FenError> {
    let invalid = || FenError::Castling {
        token: field.to_string(),
    };
    let mut rights = [CastlingRights::NONE; 2];
    if field == "-" {
        return Ok(rights);
    }
    if field.is_empty() {
        return Err(invalid());
    }
    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights[Color::White.index()].kingside,
            'Q' => &mut rights[Color::White.index()].queenside,
            'k' => &mut rights[Color::Black.index()].kingside,
            'q' => &mut rights[Color::Black.index()].queenside,
            _ => return Err(invalid()),
        };
        if *flag {
            return Err(invalid());
        }
        *flag = true;
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<usize>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    match parse_square(field) {
        Some(sq) if matches!(rank(sq), 3 | 6) => Ok(Some(sq)),
        _ => Err(FenError::EnPassant {
            token: field.to_string(),
        }),
    }
}

/// Plain decimal digits only; no sign, no whitespace.
fn parse_count(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Position {
    /// Parses a FEN record.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_engine::position::Position;
    ///
    /// let pos = Position::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1").unwrap();
    /// assert_eq!(pos.to_fen(), "8/8/8/8/8/8/8/K6k w - - 0 1");
    /// assert!(Position::from_fen("8/8/8/8/8/8/8/K6k w - - 0 0").is_err());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let result = Self::parse_fen(fen);
        if let Err(err) = &result {
            warn!(fen, %err, "[FEN] rejected");
        }
        result
    }

    fn parse_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, side, castling, ep, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::FieldCount {
                found: fields.len(),
            });
        };

        let board = parse_placement(placement)?;
        let turn = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => {
                return Err(FenError::SideToMove {
                    token: side.to_string(),
                })
            }
        };
        let castling = parse_castling(castling)?;
        let ep = parse_en_passant(ep)?;
        let halfmove_clock = parse_count(halfmove).ok_or_else(|| FenError::HalfmoveClock {
            token: halfmove.to_string(),
        })?;
        let fullmove_number = parse_count(fullmove)
            .filter(|n| *n > 0)
            .ok_or_else(|| FenError::FullmoveNumber {
                token: fullmove.to_string(),
            })?;

        Ok(Position::from_parts(
            board,
            turn,
            castling,
            ep,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Formats the position as a FEN record.
    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(72);
        for (row, cells) in self.board().chunks(8).enumerate() {
            if row > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }

        let side = match self.turn() {
            Color::White => "w",
            Color::Black => "b",
        };

        let white = self.castling(Color::White);
        let black = self.castling(Color::Black);
        let mut castling: String = [
            (white.kingside, 'K'),
            (white.queenside, 'Q'),
            (black.kingside, 'k'),
            (black.queenside, 'q'),
        ]
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, c)| *c)
        .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self.en_passant().map_or_else(|| "-".to_string(), square_name);

        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}
