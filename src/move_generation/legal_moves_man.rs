use crate::game_state::board::Board;
use crate::game_state::checkers_types::Position;
use crate::move_generation::capture_rules::{is_legal_capture, man_capture_directions};
use crate::move_generation::move_rules::{is_legal_move, man_move_directions};
use crate::moves::decision::{Decision, DecisionKind};

pub fn generate_man_captures(from: Position, board: &Board, out: &mut Vec<Decision>) {
    let piece = board.piece_at(from);
    for (d_row, d_col) in man_capture_directions(piece) {
        let to = from.offset(2 * d_row, 2 * d_col);
        if is_legal_capture(to, from, piece, board) {
            out.push(Decision::new(from, to, DecisionKind::Capture));
        }
    }
}

pub fn generate_man_moves(from: Position, board: &Board, out: &mut Vec<Decision>) {
    let piece = board.piece_at(from);
    for (d_row, d_col) in man_move_directions(piece) {
        let to = from.offset(d_row, d_col);
        if is_legal_move(to, from, piece, board) {
            out.push(Decision::new(from, to, DecisionKind::Move));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::PieceKind;

    #[test]
    fn lone_red_man_captures_single_black_man() {
        let mut board = Board::new_empty();
        board.set_piece(3, 4, PieceKind::RedMan);
        board.set_piece(2, 3, PieceKind::BlackMan);

        let mut out = Vec::new();
        generate_man_captures(Position::new(3, 4), &board, &mut out);
        assert_eq!(
            out,
            vec![Decision::new(
                Position::new(3, 4),
                Position::new(1, 2),
                DecisionKind::Capture
            )]
        );
    }

    #[test]
    fn edge_man_has_one_move() {
        let mut board = Board::new_empty();
        board.set_piece(5, 0, PieceKind::RedMan);

        let mut out = Vec::new();
        generate_man_moves(Position::new(5, 0), &board, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, Position::new(4, 1));
    }
}
