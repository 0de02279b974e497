//! 8×8 mailbox board.
//!
//! The board is a plain `Copy` grid. Moves never edit a published board in
//! place: [`Board::with_move`] returns a fresh grid and the engine swaps it in.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard chess starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = back_rank_row(color) as usize;
            let pawns = pawn_start_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[home][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize][position.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize][position.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    #[inline]
    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.get(position).map(|piece| piece.color)
    }

    /// True when `position` holds a piece of the color opposing `color`.
    #[inline]
    pub fn is_enemy(&self, position: Position, color: Color) -> bool {
        self.color_at(position) == Some(color.opposite())
    }

    #[inline]
    pub fn is_friendly(&self, position: Position, color: Color) -> bool {
        self.color_at(position) == Some(color)
    }

    /// Copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is dropped. The moved piece is flagged as moved.
    /// Returns `None` when `from` is empty.
    pub fn with_move(&self, from: Position, to: Position) -> Option<Board> {
        let piece = self.get(from)?;
        let mut next = *self;
        next.set(from, None);
        next.set(to, Some(piece.moved()));
        Some(next)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .filter_map(move |position| self.get(position).map(|piece| (position, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}
