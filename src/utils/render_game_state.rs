//! Terminal-oriented Unicode board renderer.
//!
//! Draws row 0 at the top with rank and file labels, the way the board is
//! shown to the player, plus the captured-piece lists and the banner lines a
//! front end displays for check and end-of-game statuses.
//!
//! Squares are marked `[x]` for the selected piece, `(x)` for its valid
//! targets and `*x*` for both squares of the last move.

use crate::game_state::captured_pieces::CapturedPieces;
use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;

/// Board of `state` with selection, `targets` and last-move markers.
pub fn render_game(state: &GameState, targets: &[Position]) -> String {
    let last_move = state.last_move.map(|m| [m.from, m.to]);
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let Some(position) = Position::new(row, col) else {
                continue;
            };
            let glyph = state.board.get(position).map_or('·', piece_to_unicode);
            let (open, close) = if state.selected == Some(position) {
                ('[', ']')
            } else if targets.contains(&position) {
                ('(', ')')
            } else if last_move.is_some_and(|squares| squares.contains(&position)) {
                ('*', '*')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

/// Two lines listing captured pieces by their own color.
pub fn render_captured(captured: &CapturedPieces) -> String {
    let line = |color: Color| {
        let pieces = captured.of(color);
        if pieces.is_empty() {
            return format!("Captured {}: -", color.name().to_lowercase());
        }
        let glyphs: Vec<String> = pieces
            .iter()
            .map(|&piece| piece_to_unicode(piece).to_string())
            .collect();
        format!("Captured {}: {}", color.name().to_lowercase(), glyphs.join(" "))
    };
    format!("{}\n{}", line(Color::White), line(Color::Black))
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

/// Banner for statuses worth announcing; `None` while play just continues.
pub fn status_banner(status: GameStatus, side_to_move: Color) -> Option<String> {
    match status {
        GameStatus::Check => Some(format!("{side_to_move} is in check!")),
        GameStatus::Checkmate => Some(format!("Checkmate! {} wins!", side_to_move.opposite())),
        GameStatus::Stalemate => Some("Stalemate! The game is drawn.".to_owned()),
        GameStatus::Draw => Some("Draw by insufficient material.".to_owned()),
        GameStatus::Waiting | GameStatus::Playing => None,
    }
}
