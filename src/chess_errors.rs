//! Errors used throughout the chess engine.
//!
//! Two enums cover every failure mode:
//! - `MoveError` explains why a move attempt was refused. The engine's
//!   boolean/no-op surface collapses it, `try_move` hands it to callers that
//!   want the reason for display or debugging.
//! - `ChessError` covers everything fallible outside the move path: parsing
//!   squares and placements, configuration, and snapshot storage.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};

/// Reason a requested move was not applied. A refused move never changes
/// any engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The source square is empty.
    #[error("no piece on {0}")]
    NoPieceAtSource(Position),

    /// The piece on the source square does not belong to the side to move.
    #[error("piece on {position} is {found}, but it is {expected}'s turn")]
    WrongTurn {
        position: Position,
        expected: Color,
        found: Color,
    },

    /// The destination is not among the piece's valid moves.
    #[error("{to} is not a valid destination from {from}")]
    IllegalDestination { from: Position, to: Position },
}

/// Unified error type for parsing, configuration and snapshot handling.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Row/column outside `0..=7`.
    #[error("position ({row}, {col}) is off the board")]
    InvalidPosition { row: u8, col: u8 },

    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A board placement string was malformed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid engine configuration: {0}")]
    Config(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("snapshot storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("no snapshot stored under key {0:?}")]
    SnapshotMissing(String),

    #[error("snapshot version {found} is not supported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },
}

pub type ChessResult<T> = Result<T, ChessError>;
