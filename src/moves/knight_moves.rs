use crate::game_state::chess_types::{Board, Color, Position};
use crate::moves::rays::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
