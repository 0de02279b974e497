//! Board-to-placement-string generator, the inverse of `fen_parser`.

use crate::game_state::chess_types::{Board, Color, Position};

pub fn generate_placement(board: &Board) -> String {
    let mut rows = Vec::with_capacity(8);

    for row in 0..8u8 {
        let mut text = String::new();
        let mut empty = 0u8;
        for col in 0..8u8 {
            let piece = Position::new(row, col).and_then(|position| board.get(position));
            match piece {
                Some(piece) => {
                    if empty > 0 {
                        text.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    text.push(piece.symbol());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            text.push(char::from(b'0' + empty));
        }
        rows.push(text);
    }

    rows.join("/")
}

pub fn generate_placement_with_side(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {side}", generate_placement(board))
}

#[cfg(test)]
mod tests {
    use super::{generate_placement, generate_placement_with_side};
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::game_state::chess_types::{Board, Color, Position};
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn standard_board_generates_starting_placement() {
        assert_eq!(generate_placement(&Board::standard()), STARTING_PLACEMENT);
    }

    #[test]
    fn generated_text_parses_back_to_the_same_board() {
        let e2 = Position::new(6, 4).expect("e2");
        let e4 = Position::new(4, 4).expect("e4");
        let board = Board::standard().with_move(e2, e4).expect("pawn on e2");

        let text = generate_placement_with_side(&board, Color::Black);
        assert_eq!(text, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");

        let (parsed, side) = parse_placement(&text).expect("generated placement parses");
        assert_eq!(side, Color::Black);
        // has_moved is not part of the placement syntax
        assert_eq!(parsed.get(e4).map(|p| p.kind), board.get(e4).map(|p| p.kind));
    }
}
