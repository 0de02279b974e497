//! Fully-legal move filter.
//!
//! Runs the pseudo-legal generator, plays each candidate on a scratch board
//! and drops the ones that leave the mover's own king attacked.

use crate::game_state::chess_types::{Board, Position};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, from: Position) -> Vec<Position> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };

        pseudo_legal_moves(board, from)
            .into_iter()
            .filter(|&to| match apply_move(board, from, to) {
                Ok(applied) => !is_king_in_check(&applied.board, piece.color),
                Err(_) => false,
            })
            .collect()
    }
}
