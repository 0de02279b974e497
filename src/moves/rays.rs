//! Shared target walkers for sliding and stepping pieces.
//!
//! Every square pushed into `out` is on the board and never holds a piece of
//! the mover's own color.

use crate::game_state::chess_types::{Board, Color, Position};

/// Walk from `from` in one direction until the edge, stopping before a
/// friendly piece and after an enemy piece.
pub fn trace_ray(
    board: &Board,
    from: Position,
    color: Color,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Position>,
) {
    let mut current = from;
    while let Some(target) = current.offset(d_row, d_col) {
        match board.color_at(target) {
            None => out.push(target),
            Some(occupant) if occupant != color => {
                out.push(target);
                break;
            }
            Some(_) => break,
        }
        current = target;
    }
}

pub fn trace_rays(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &direction in directions {
        trace_ray(board, from, color, direction, out);
    }
}

/// Single-step targets (knight jumps, king steps): on board and not friendly.
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if !board.is_friendly(target, color) {
            out.push(target);
        }
    }
}
