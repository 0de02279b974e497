//! Crate root module declarations for the arcade chess engine.
//!
//! Exposes the rule engine (board model, per-piece movement, check and end
//! detection, the session engine) and the helpers around it so the terminal
//! driver, tests and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod captured_pieces;
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
    pub mod move_history;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_end;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
}

pub mod engine {
    pub mod chess_engine;
    pub mod engine_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod snapshot;
}

pub use chess_errors::{ChessError, ChessResult, MoveError};
pub use engine::chess_engine::{ChessEngine, SelectOutcome};
pub use engine::engine_config::{EngineConfig, MoveLegality};
pub use game_state::chess_types::{Board, Color, GameStatus, Piece, PieceKind, Position};
