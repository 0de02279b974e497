use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::rays::trace_rays;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
}
