//! Board-level move application.
//!
//! Produces the successor board for a move without touching the input and
//! reports what was captured. Legality is the caller's concern.

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::{Board, Position};
use crate::game_state::move_history::MoveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub record: MoveRecord,
}

pub fn apply_move(board: &Board, from: Position, to: Position) -> Result<AppliedMove, MoveError> {
    let piece = board.get(from).ok_or(MoveError::NoPieceAtSource(from))?;
    let captured = board.get(to).filter(|target| target.color != piece.color);
    let next = board
        .with_move(from, to)
        .ok_or(MoveError::NoPieceAtSource(from))?;

    Ok(AppliedMove {
        board: next,
        record: MoveRecord {
            piece,
            from,
            to,
            captured,
        },
    })
}
