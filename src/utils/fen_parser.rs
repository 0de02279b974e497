//! Placement-string parser.
//!
//! Reads FEN piece placement (row 0 first, `/` between rows, digits for runs
//! of empty squares) with an optional second field `w` or `b` for the side
//! to move. Castling, en-passant and clock fields are not part of this
//! engine and are rejected.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Color, Piece, Position};

pub fn parse_placement(text: &str) -> ChessResult<(Board, Color)> {
    let mut parts = text.split_whitespace();

    let layout = parts
        .next()
        .ok_or_else(|| ChessError::InvalidPlacement("missing board layout".to_owned()))?;
    let side = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ChessError::InvalidPlacement(format!(
                "invalid side to move: {other}"
            )))
        }
    };
    if let Some(extra) = parts.next() {
        return Err(ChessError::InvalidPlacement(format!(
            "unexpected field: {extra}"
        )));
    }

    let rows: Vec<&str> = layout.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidPlacement(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0u8;
        for ch in row_text.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid empty run {ch} in row {row}"
                    )));
                }
                col += run as u8;
            } else {
                let piece = Piece::from_symbol(ch).ok_or_else(|| {
                    ChessError::InvalidPlacement(format!("invalid piece symbol {ch}"))
                })?;
                let position = Position::new(row as u8, col).ok_or_else(|| {
                    ChessError::InvalidPlacement(format!("row {row} is longer than 8 squares"))
                })?;
                board.set(position, Some(piece));
                col += 1;
            }

            if col > 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "row {row} is longer than 8 squares"
                )));
            }
        }

        if col != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "row {row} covers {col} squares"
            )));
        }
    }

    Ok((board, side))
}
