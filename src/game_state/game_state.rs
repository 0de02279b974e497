//! Session state record.
//!
//! `GameState` is the central model for the engine: the published board
//! snapshot plus turn, selection, status and the append-only logs. It is
//! plain data with no back references, so it serialises directly into a
//! snapshot.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessResult;
use crate::game_state::captured_pieces::CapturedPieces;
use crate::game_state::chess_types::{Board, Color, LastMove, Position};
use crate::game_state::move_history::MoveHistory;
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Waiting => "Waiting",
            GameStatus::Playing => "Playing",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
            GameStatus::Draw => "Draw",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Arc<Board>,
    pub current_turn: Color,
    pub selected: Option<Position>,
    pub status: GameStatus,
    pub history: MoveHistory,
    pub captured: CapturedPieces,
    pub last_move: Option<LastMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_status(GameStatus::Waiting)
    }
}

impl GameState {
    /// Starting position, white to move, nothing played yet.
    pub fn with_status(status: GameStatus) -> Self {
        Self::from_board(Board::standard(), Color::White, status)
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::with_status(GameStatus::Playing)
    }

    pub fn from_board(board: Board, current_turn: Color, status: GameStatus) -> Self {
        Self {
            board: Arc::new(board),
            current_turn,
            selected: None,
            status,
            history: MoveHistory::new(),
            captured: CapturedPieces::default(),
            last_move: None,
        }
    }

    /// Custom setup from a placement string such as `"k7/8/8/8/8/8/8/4K3 b"`.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        let (board, current_turn) = parse_placement(placement)?;
        Ok(Self::from_board(board, current_turn, GameStatus::Playing))
    }
}
