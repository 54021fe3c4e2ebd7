//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 is printed first, so Black's home rows sit at the top and Red moves
//! up the screen.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{PieceKind, Position};

/// Render the board with row and column indices on every edge.
///
/// Light squares are blank, empty dark squares show a dot.
pub fn render_board(board: &Board) -> String {
    render_board_with_selection(board, None)
}

/// Same as [`render_board`], bracketing the selected square.
pub fn render_board_with_selection(board: &Board, selected: Option<Position>) -> String {
    let mut out = String::new();
    push_column_header(&mut out);

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let pos = Position::new(row as i8, col as i8);
            let glyph = square_glyph(board.piece_at(pos), pos.is_dark());
            if selected == Some(pos) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    push_column_header(&mut out);
    out
}

fn push_column_header(out: &mut String) {
    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push(char::from(b'0' + col as u8));
        out.push(' ');
    }
    out.push('\n');
}

fn square_glyph(piece: PieceKind, dark: bool) -> char {
    match piece {
        PieceKind::RedMan => '⛀',
        PieceKind::RedKing => '⛁',
        PieceKind::BlackMan => '⛂',
        PieceKind::BlackKing => '⛃',
        PieceKind::Empty if dark => '·',
        PieceKind::Empty => ' ',
    }
}
