//! Square name conversions.
//!
//! Column 0-7 maps to files `a`-`h`, row 0-7 maps to ranks `8`-`1`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert a square name (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Position::new(row, col).ok_or(ChessError::InvalidPosition { row, col })
}

#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}

/// Build a position from raw coordinates, reporting out-of-range input.
pub fn checked_position(row: u8, col: u8) -> ChessResult<Position> {
    Position::new(row, col).ok_or(ChessError::InvalidPosition { row, col })
}
