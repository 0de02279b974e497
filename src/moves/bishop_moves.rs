//! Bishop move targets.
//!
//! Slides along the four diagonals with the usual stop rule: stop before an
//! own piece, include an enemy square and stop.

use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::rays::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}
