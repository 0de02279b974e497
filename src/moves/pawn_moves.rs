use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, Position};

/// Pawn targets: one step forward onto an empty square, two steps from the
/// start row when both squares are empty, and forward diagonals onto enemy
/// pieces. No en passant, no promotion.
pub fn pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if board.is_enemy(target, color) {
            out.push(target);
        }
    }
}
