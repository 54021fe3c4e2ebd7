//! Non-capturing move legality.
//!
//! Men step one square diagonally forward; kings slide any distance along a
//! fully clear diagonal in all four directions.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::{PieceKind, Position, SidePieces};
use crate::moves::diagonal::{diagonal_distance, direction, is_full_path_clear, is_on_board};

/// Forward step directions for a man.
pub fn man_move_directions(piece: PieceKind) -> [(i8, i8); 2] {
    let forward = piece.color().map(|c| c.forward()).unwrap_or(0);
    [(forward, -1), (forward, 1)]
}

/// Whether the piece on `pos` has at least one plain move.
pub fn can_move(pos: Position, board: &Board) -> bool {
    let piece = board.piece_at(pos);
    if piece.is_empty() {
        return false;
    }
    let adjacent_empty =
        |(d_row, d_col): (i8, i8)| board.get(pos.offset(d_row, d_col)) == Some(PieceKind::Empty);

    if piece.is_king() {
        DIAGONALS.iter().copied().any(adjacent_empty)
    } else {
        man_move_directions(piece).iter().copied().any(adjacent_empty)
    }
}

pub fn is_legal_move(target: Position, source: Position, mover: PieceKind, board: &Board) -> bool {
    if mover.is_empty() || !is_on_board(target) || board.piece_at(target) != PieceKind::Empty {
        return false;
    }
    if !is_full_path_clear(board, source, target) {
        return false;
    }
    if mover.is_king() {
        return true;
    }

    let forward = mover.color().map(|c| c.forward()).unwrap_or(0);
    diagonal_distance(source, target) == 1 && direction(source, target).0 == forward
}

pub fn any_side_can_move(side: SidePieces, board: &Board) -> bool {
    board.squares_of(side).any(|pos| can_move(pos, board))
}
