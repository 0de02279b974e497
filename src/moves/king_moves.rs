//! King move targets.
//!
//! The eight neighbouring squares that are on the board and not occupied by
//! an own piece. No castling; whether the target is attacked is left to the
//! legality filter.

use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::rays::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}
