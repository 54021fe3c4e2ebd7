use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PieceKind, Position};

/// Crowns the piece on `pos` when `color` (the man kind it had before the move)
/// has reached its promotion row. Returns whether the board was written.
///
/// Passing a king kind, or calling again after crowning, changes nothing: the
/// square must still hold exactly `color` for anything to happen.
pub fn promote_if_needed(board: &mut Board, pos: Position, color: PieceKind) -> bool {
    if !color.is_man() {
        return false;
    }
    let Some(side) = color.color() else {
        return false;
    };
    if pos.row != side.promotion_row() || board.piece_at(pos) != color {
        return false;
    }
    board.set(pos, color.crowned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_man_on_row_zero_is_crowned_once() {
        let mut board = Board::new_empty();
        let pos = Position::new(0, 3);
        board.set(pos, PieceKind::RedMan);

        assert!(promote_if_needed(&mut board, pos, PieceKind::RedMan));
        assert_eq!(board.piece_at(pos), PieceKind::RedKing);

        assert!(!promote_if_needed(&mut board, pos, PieceKind::RedMan));
        assert_eq!(board.piece_at(pos), PieceKind::RedKing);
        assert!(!promote_if_needed(&mut board, pos, PieceKind::RedKing));
        assert_eq!(board.piece_at(pos), PieceKind::RedKing);
    }

    #[test]
    fn black_man_promotes_on_row_seven_only() {
        let mut board = Board::new_empty();
        board.set_piece(6, 1, PieceKind::BlackMan);
        assert!(!promote_if_needed(&mut board, Position::new(6, 1), PieceKind::BlackMan));
        assert_eq!(board.get_piece(6, 1), PieceKind::BlackMan);

        board.set_piece(7, 2, PieceKind::BlackMan);
        assert!(promote_if_needed(&mut board, Position::new(7, 2), PieceKind::BlackMan));
        assert_eq!(board.get_piece(7, 2), PieceKind::BlackKing);
    }

    #[test]
    fn red_man_on_black_back_rank_stays_a_man() {
        let mut board = Board::new_empty();
        board.set_piece(7, 0, PieceKind::RedMan);
        assert!(!promote_if_needed(&mut board, Position::new(7, 0), PieceKind::RedMan));
    }
}
