//! Captured-piece tracking.
//!
//! A captured piece is filed under its *own* color: when white takes a black
//! rook, the rook is appended to `black`. Both lists are append-only.
//!
//! # Material balance
//!
//! Positive means white has taken more material, negative means black has.
//! With a black rook and pawn captured and a white knight captured the
//! balance is (5 + 1) - 3 = +3.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Piece};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// White pieces that have been captured.
    pub white: Vec<Piece>,
    /// Black pieces that have been captured.
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub(crate) fn record(&mut self, captured: Piece) {
        match captured.color {
            Color::White => self.white.push(captured),
            Color::Black => self.black.push(captured),
        }
    }

    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    pub fn material_balance(&self) -> i32 {
        let taken_by_white: u32 = self.black.iter().map(|p| p.kind.material_value()).sum();
        let taken_by_black: u32 = self.white.iter().map(|p| p.kind.material_value()).sum();
        taken_by_white as i32 - taken_by_black as i32
    }
}
