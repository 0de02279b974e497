//! Attack and check queries over a board.
//!
//! A piece attacks a square when that square is among its generated moves.
//! Pawns are the exception on empty squares: a forward step is a move but
//! never an attack, so they are tested by their diagonal geometry instead.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// True when `color`'s king is attacked. A missing king is not an error: it
/// simply cannot be in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

fn attacks(board: &Board, from: Position, piece: Piece, square: Position) -> bool {
    match piece.kind {
        PieceKind::Pawn => [-1i8, 1]
            .into_iter()
            .any(|d_col| from.offset(piece.color.forward(), d_col) == Some(square)),
        _ => pseudo_legal_moves(board, from).contains(&square),
    }
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| attacks(board, from, piece, square))
}

pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| attacks(board, from, piece, square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
