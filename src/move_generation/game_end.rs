//! Game status evaluation for the side to move.
//!
//! Check and checkmate always apply. Stalemate and insufficient-material
//! draws are switched by [`EndConditions`].

use crate::game_state::chess_types::{Board, Color, GameStatus, PieceKind, Position};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndConditions {
    pub stalemate: bool,
    pub insufficient_material: bool,
}

impl Default for EndConditions {
    fn default() -> Self {
        Self {
            stalemate: true,
            insufficient_material: true,
        }
    }
}

/// Scans all 64 squares and stops at the first piece of `color` that has a
/// move.
pub fn has_any_move(board: &Board, color: Color, generator: &dyn MoveGenerator) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !generator.generate_moves(board, from).is_empty())
}

/// Neither side can ever mate: bare kings, a single minor piece, or one
/// bishop each standing on the same square color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors: Vec<(Position, PieceKind, Color)> = Vec::new();

    for (position, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => {
                minors.push((position, piece.kind, piece.color))
            }
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match minors.as_slice() {
        [] | [_] => true,
        [(a, PieceKind::Bishop, a_color), (b, PieceKind::Bishop, b_color)] => {
            a_color != b_color && a.is_light_square() == b.is_light_square()
        }
        _ => false,
    }
}

pub fn evaluate_status(
    board: &Board,
    side_to_move: Color,
    generator: &dyn MoveGenerator,
    conditions: EndConditions,
) -> GameStatus {
    if is_king_in_check(board, side_to_move) {
        return if has_any_move(board, side_to_move, generator) {
            GameStatus::Check
        } else {
            GameStatus::Checkmate
        };
    }

    if conditions.stalemate && !has_any_move(board, side_to_move, generator) {
        return GameStatus::Stalemate;
    }

    if conditions.insufficient_material && is_insufficient_material(board) {
        return GameStatus::Draw;
    }

    GameStatus::Playing
}

#[cfg(test)]
mod tests {
    use super::{evaluate_status, has_any_move, is_insufficient_material, EndConditions};
    use crate::game_state::chess_types::{Board, Color, GameStatus, Piece, PieceKind, Position};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    fn put(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        let position = Position::new(row, col).expect("test square on board");
        board.set(position, Some(Piece::new(kind, color)));
    }

    /// Black king walled in on h1 by its own pawns, which are themselves stuck.
    fn smothered_corner() -> Board {
        let mut board = Board::empty();
        put(&mut board, 7, 7, PieceKind::King, Color::Black);
        put(&mut board, 7, 6, PieceKind::Pawn, Color::Black);
        put(&mut board, 6, 6, PieceKind::Pawn, Color::Black);
        put(&mut board, 6, 7, PieceKind::Pawn, Color::Black);
        put(&mut board, 0, 4, PieceKind::King, Color::White);
        board
    }

    #[test]
    fn startpos_is_playing() {
        let status = evaluate_status(
            &Board::standard(),
            Color::White,
            &PseudoLegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(status, GameStatus::Playing);
    }

    #[test]
    fn knight_check_on_walled_king_is_mate() {
        let mut board = smothered_corner();
        put(&mut board, 5, 6, PieceKind::Knight, Color::White);

        assert!(!has_any_move(&board, Color::Black, &PseudoLegalMoveGenerator));
        let status = evaluate_status(
            &board,
            Color::Black,
            &PseudoLegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(status, GameStatus::Checkmate);
    }

    #[test]
    fn walled_king_without_check_is_stalemate() {
        let mut board = smothered_corner();
        put(&mut board, 3, 3, PieceKind::Rook, Color::White);

        let status = evaluate_status(
            &board,
            Color::Black,
            &PseudoLegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(status, GameStatus::Stalemate);

        let disabled = EndConditions {
            stalemate: false,
            insufficient_material: true,
        };
        let status = evaluate_status(&board, Color::Black, &PseudoLegalMoveGenerator, disabled);
        assert_eq!(status, GameStatus::Playing);
    }

    #[test]
    fn escapable_check_is_check() {
        let mut board = Board::empty();
        put(&mut board, 0, 0, PieceKind::King, Color::Black);
        put(&mut board, 1, 1, PieceKind::Queen, Color::White);
        put(&mut board, 7, 4, PieceKind::King, Color::White);

        let status = evaluate_status(
            &board,
            Color::Black,
            &LegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(status, GameStatus::Check);
    }

    #[test]
    fn supported_queen_mates_under_legal_generation() {
        let mut board = Board::empty();
        put(&mut board, 0, 0, PieceKind::King, Color::Black);
        put(&mut board, 1, 1, PieceKind::Queen, Color::White);
        put(&mut board, 2, 2, PieceKind::King, Color::White);

        let legal = evaluate_status(
            &board,
            Color::Black,
            &LegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(legal, GameStatus::Checkmate);

        let pseudo = evaluate_status(
            &board,
            Color::Black,
            &PseudoLegalMoveGenerator,
            EndConditions::default(),
        );
        assert_eq!(pseudo, GameStatus::Check);
    }

    #[test]
    fn insufficient_material_cases() {
        let mut bare = Board::empty();
        put(&mut bare, 0, 0, PieceKind::King, Color::Black);
        put(&mut bare, 7, 7, PieceKind::King, Color::White);
        assert!(is_insufficient_material(&bare));

        let mut knight = bare;
        put(&mut knight, 4, 4, PieceKind::Knight, Color::White);
        assert!(is_insufficient_material(&knight));

        let mut same_color_bishops = bare;
        put(&mut same_color_bishops, 4, 4, PieceKind::Bishop, Color::White);
        put(&mut same_color_bishops, 2, 2, PieceKind::Bishop, Color::Black);
        assert!(is_insufficient_material(&same_color_bishops));

        let mut opposite_color_bishops = bare;
        put(&mut opposite_color_bishops, 4, 4, PieceKind::Bishop, Color::White);
        put(&mut opposite_color_bishops, 2, 3, PieceKind::Bishop, Color::Black);
        assert!(!is_insufficient_material(&opposite_color_bishops));

        let mut pawn = bare;
        put(&mut pawn, 6, 0, PieceKind::Pawn, Color::White);
        assert!(!is_insufficient_material(&pawn));

        assert!(!is_insufficient_material(&Board::standard()));
    }
}
