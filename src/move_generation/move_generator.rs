//! Move generator seam.
//!
//! Generators are pure functions of a board and a square: the mover's color
//! is read from the piece itself, never from whose turn it is. That keeps
//! them usable from read-only analysis such as check detection.

use crate::game_state::chess_types::{Board, PieceKind, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub trait MoveGenerator: Send + Sync {
    /// Destinations for the piece on `from`; empty when the square is empty.
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position>;
}

/// Movement-pattern generator: does not check whether the mover's own king
/// is left attacked.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position> {
        pseudo_legal_moves(board, from)
    }
}

pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece.color, &mut out),
    }
    out
}
