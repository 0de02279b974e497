//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration and partial documents only override what they name.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::move_generation::game_end::EndConditions;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

/// Key the session snapshot is stored under.
pub const DEFAULT_SESSION_KEY: &str = "chess-game";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveLegality {
    /// Movement patterns only; a move may leave the mover's king attacked.
    #[default]
    PseudoLegal,
    /// Moves that leave the mover's king attacked are filtered out.
    Legal,
}

impl MoveLegality {
    pub fn generator(self) -> &'static dyn MoveGenerator {
        match self {
            MoveLegality::PseudoLegal => &PseudoLegalMoveGenerator,
            MoveLegality::Legal => &LegalMoveGenerator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub legality: MoveLegality,
    pub detect_stalemate: bool,
    pub detect_insufficient_material: bool,
    pub session_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            legality: MoveLegality::default(),
            detect_stalemate: true,
            detect_insufficient_material: true,
            session_key: DEFAULT_SESSION_KEY.to_owned(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChessError::Config(e.to_string()))?;
        if config.session_key.trim().is_empty() {
            return Err(ChessError::Config("session_key must not be empty".to_owned()));
        }
        Ok(config)
    }

    pub fn end_conditions(&self) -> EndConditions {
        EndConditions {
            stalemate: self.detect_stalemate,
            insufficient_material: self.detect_insufficient_material,
        }
    }
}
