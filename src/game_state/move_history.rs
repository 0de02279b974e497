//! Append-only move log.
//!
//! Each record keeps the structured move (piece, squares, capture) and
//! renders to the short notation shown in the history panel: the piece
//! initial followed by `from-to`, e.g. `Nb1-a3`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
}

impl MoveRecord {
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.piece.kind.initial(), self.from, self.to)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    pub fn notation(&self, index: usize) -> Option<String> {
        self.get(index).map(MoveRecord::notation)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Display lines: white's moves carry the move number, black's do not.
    pub fn numbered_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(ply, record)| {
                if ply % 2 == 0 {
                    format!("{}. {}", ply / 2 + 1, record)
                } else {
                    record.to_string()
                }
            })
            .collect()
    }
}
