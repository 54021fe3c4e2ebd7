//! Diagonal geometry helpers.
//!
//! Pure predicates over coordinates; `is_path_clear` is the only one that
//! reads the board.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::Position;

#[inline]
pub fn is_valid_position(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}

#[inline]
pub fn is_on_board(pos: Position) -> bool {
    is_valid_position(pos.row, pos.col)
}

/// Two squares share a diagonal iff their row and column deltas are equal and non-zero.
#[inline]
pub fn is_on_same_diagonal(from: Position, to: Position) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    d_row == d_col && d_row != 0
}

/// Unit step from `from` toward `to`. Only meaningful for diagonal pairs.
#[inline]
pub fn direction(from: Position, to: Position) -> (i8, i8) {
    ((to.row - from.row).signum(), (to.col - from.col).signum())
}

/// Number of diagonal steps between two aligned squares.
#[inline]
pub fn diagonal_distance(from: Position, to: Position) -> i8 {
    (to.row - from.row).abs()
}

/// Walks the diagonal from `from` toward `to`, skipping both endpoints and the
/// square immediately before `to`. False as soon as a visited square is occupied.
pub fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    if !is_on_same_diagonal(from, to) {
        return false;
    }
    let (d_row, d_col) = direction(from, to);
    let last = to.offset(-d_row, -d_col);

    let mut cur = from.offset(d_row, d_col);
    while cur != to && cur != last {
        if !board.piece_at(cur).is_empty() {
            return false;
        }
        cur = cur.offset(d_row, d_col);
    }
    true
}

/// Every square strictly between `from` and `to` is empty.
pub fn is_full_path_clear(board: &Board, from: Position, to: Position) -> bool {
    if !is_on_same_diagonal(from, to) {
        return false;
    }
    let (d_row, d_col) = direction(from, to);
    let last = to.offset(-d_row, -d_col);
    is_path_clear(board, from, to) && (last == from || board.piece_at(last).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::PieceKind;

    #[test]
    fn bounds_are_inclusive_zero_to_seven() {
        assert!(is_valid_position(0, 0));
        assert!(is_valid_position(7, 7));
        assert!(!is_valid_position(-1, 3));
        assert!(!is_valid_position(3, 8));
    }

    #[test]
    fn diagonal_requires_equal_nonzero_deltas() {
        let a = Position::new(2, 2);
        assert!(is_on_same_diagonal(a, Position::new(5, 5)));
        assert!(is_on_same_diagonal(a, Position::new(0, 4)));
        assert!(!is_on_same_diagonal(a, a));
        assert!(!is_on_same_diagonal(a, Position::new(2, 5)));
        assert!(!is_on_same_diagonal(a, Position::new(4, 5)));
    }

    #[test]
    fn path_clear_ignores_square_before_destination() {
        let mut board = Board::new_empty();
        board.set_piece(3, 4, PieceKind::RedMan);
        assert!(is_path_clear(&board, Position::new(0, 1), Position::new(4, 5)));
        assert!(!is_full_path_clear(&board, Position::new(0, 1), Position::new(4, 5)));
        assert!(!is_path_clear(&board, Position::new(0, 1), Position::new(5, 6)));
    }

    #[test]
    fn adjacent_and_two_step_paths_are_trivially_clear() {
        let mut board = Board::new_empty();
        board.set_piece(1, 2, PieceKind::BlackMan);
        assert!(is_path_clear(&board, Position::new(0, 1), Position::new(1, 2)));
        assert!(is_path_clear(&board, Position::new(0, 1), Position::new(2, 3)));
        assert!(!is_full_path_clear(&board, Position::new(0, 1), Position::new(2, 3)));
        assert!(is_full_path_clear(&board, Position::new(0, 1), Position::new(1, 2)));
    }
}
