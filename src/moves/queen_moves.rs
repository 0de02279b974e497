use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rays::trace_rays;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}
