//! Single-session chess engine.
//!
//! `ChessEngine` owns one [`GameState`] and is the only thing that mutates
//! it. Every operation runs to completion synchronously. A successful move
//! publishes a brand-new board behind an `Arc`, so renderers holding the
//! previous snapshot keep a consistent view.
//!
//! Failure never mutates: a refused move leaves board, turn, history,
//! captures and last move exactly as they were.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::chess_errors::{ChessResult, MoveError};
use crate::engine::engine_config::EngineConfig;
use crate::game_state::captured_pieces::CapturedPieces;
use crate::game_state::chess_types::{Board, Color, GameStatus, LastMove, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::game_state::move_history::{MoveHistory, MoveRecord};
use crate::move_generation::game_end::evaluate_status;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{attackers_to_square, is_king_in_check};

/// What a square click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The clicked square is now the selection (first pick or re-pick).
    Selected(Position),
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
    /// The selected piece moved to the clicked square.
    Moved(MoveRecord),
    /// The move attempt was refused; the selection has been cleared.
    Rejected(MoveError),
}

#[derive(Debug, Clone, Default)]
pub struct ChessEngine {
    state: GameState,
    config: EngineConfig,
}

impl ChessEngine {
    /// Fresh engine in the `waiting` state with the pieces set up.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::default(),
            config,
        }
    }

    /// Engine over an existing state, e.g. a custom position or a restored
    /// snapshot.
    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        Self { state, config }
    }

    /// Engine over a placement string such as `"k7/8/8/8/8/8/8/4K3 w"`,
    /// status `playing`.
    pub fn from_placement(placement: &str, config: EngineConfig) -> ChessResult<Self> {
        let state = GameState::from_placement(placement)?;
        Ok(Self::from_state(state, config))
    }

    /// Standard starting position, status `playing`.
    pub fn initialize(&mut self) {
        self.state = GameState::new_game();
        info!(session = %self.config.session_key, "game initialized");
    }

    /// Standard starting position, status `waiting`.
    pub fn reset_game(&mut self) {
        self.state = GameState::with_status(GameStatus::Waiting);
        info!(session = %self.config.session_key, "game reset");
    }

    /// Two-phase click protocol: pick one of your pieces, then click a target.
    ///
    /// Clicking another own piece moves the selection. Any other click with a
    /// selection attempts the move and clears the selection, whether or not
    /// the move went through.
    pub fn select_square(&mut self, position: Position) -> SelectOutcome {
        let clicked_own = self.state.board.is_friendly(position, self.state.current_turn);

        let Some(selected) = self.state.selected else {
            if clicked_own {
                self.state.selected = Some(position);
                trace!(%position, "piece selected");
                return SelectOutcome::Selected(position);
            }
            return SelectOutcome::Ignored;
        };

        if clicked_own {
            self.state.selected = Some(position);
            trace!(from = %selected, to = %position, "selection moved");
            return SelectOutcome::Selected(position);
        }

        let result = self.try_move(selected, position);
        self.state.selected = None;
        match result {
            Ok(record) => SelectOutcome::Moved(record),
            Err(err) => SelectOutcome::Rejected(err),
        }
    }

    /// Boolean form of [`ChessEngine::try_move`].
    pub fn move_piece(&mut self, from: Position, to: Position) -> bool {
        self.try_move(from, to).is_ok()
    }

    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveRecord, MoveError> {
        let result = self.apply_checked_move(from, to);
        if let Err(err) = &result {
            trace!(%from, %to, error = %err, "move rejected");
        }
        result
    }

    fn apply_checked_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<MoveRecord, MoveError> {
        let mover = self.state.current_turn;
        let piece = self.state.board.get(from).ok_or(MoveError::NoPieceAtSource(from))?;
        if piece.color != mover {
            return Err(MoveError::WrongTurn {
                position: from,
                expected: mover,
                found: piece.color,
            });
        }
        if !self.valid_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let applied = apply_move(&self.state.board, from, to)?;
        let next_turn = mover.opposite();
        let status = evaluate_status(
            &applied.board,
            next_turn,
            self.config.legality.generator(),
            self.config.end_conditions(),
        );

        // Everything fallible is done; publish the new state in one go.
        let record = applied.record;
        if let Some(captured) = record.captured {
            self.state.captured.record(captured);
        }
        self.state.history.push(record);
        self.state.board = Arc::new(applied.board);
        self.state.last_move = Some(LastMove { from, to });
        self.state.current_turn = next_turn;

        debug!(
            notation = %record,
            captured = ?record.captured.map(|p| p.kind),
            "move applied"
        );
        if status != self.state.status && status != GameStatus::Playing {
            info!(%status, side = %next_turn, "status changed");
        }
        self.state.status = status;

        Ok(record)
    }

    /// Destinations for the piece on `position`, empty unless that piece
    /// belongs to the side to move.
    pub fn valid_moves(&self, position: Position) -> Vec<Position> {
        if !self.state.board.is_friendly(position, self.state.current_turn) {
            return Vec::new();
        }
        self.config
            .legality
            .generator()
            .generate_moves(&self.state.board, position)
    }

    /// Whether `color`'s king is attacked on the current board. Independent
    /// of whose turn it is.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state.board, color)
    }

    /// Enemy pieces currently attacking `color`'s king.
    pub fn checkers(&self, color: Color) -> Vec<(Position, PieceKind)> {
        match self.state.board.king_position(color) {
            Some(king) => attackers_to_square(&self.state.board, king, color.opposite()),
            None => Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Shared handle on the current board; stays valid after later moves.
    pub fn board_snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.state.board)
    }

    pub fn current_turn(&self) -> Color {
        self.state.current_turn
    }

    pub fn selected(&self) -> Option<Position> {
        self.state.selected
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_game_over(&self) -> bool {
        self.state.status.is_game_over()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.state.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.state.captured
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.state.last_move
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn replace_state(&mut self, state: GameState) {
        self.state = state;
    }
}
