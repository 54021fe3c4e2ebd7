//! Capture legality and existence checks.
//!
//! Men jump forward only, over an adjacent opposing piece onto the empty square
//! behind it. Kings slide along an empty diagonal up to a single opposing piece
//! and land on the square directly behind it.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::{PieceKind, Position, SidePieces};
use crate::moves::diagonal::{
    diagonal_distance, direction, is_on_board, is_on_same_diagonal, is_path_clear,
};

/// Whether the piece on `pos` has at least one capture available.
pub fn can_capture(pos: Position, board: &Board) -> bool {
    let piece = board.piece_at(pos);
    if piece.is_empty() {
        false
    } else if piece.is_king() {
        king_can_capture(pos, piece, board)
    } else {
        man_can_capture(pos, piece, board)
    }
}

/// Forward jump directions for a man.
pub fn man_capture_directions(piece: PieceKind) -> [(i8, i8); 2] {
    let forward = piece.color().map(|c| c.forward()).unwrap_or(0);
    [(forward, -1), (forward, 1)]
}

fn man_can_capture(pos: Position, piece: PieceKind, board: &Board) -> bool {
    man_capture_directions(piece).iter().any(|&(d_row, d_col)| {
        let over = pos.offset(d_row, d_col);
        let landing = over.offset(d_row, d_col);
        board.piece_at(over).is_opponent_of(piece) && board.get(landing) == Some(PieceKind::Empty)
    })
}

fn king_can_capture(pos: Position, piece: PieceKind, board: &Board) -> bool {
    DIAGONALS.iter().any(|&(d_row, d_col)| {
        let mut cur = pos.offset(d_row, d_col);
        while let Some(found) = board.get(cur) {
            if found.is_empty() {
                cur = cur.offset(d_row, d_col);
                continue;
            }
            if !found.is_opponent_of(piece) {
                return false;
            }
            return board.get(cur.offset(d_row, d_col)) == Some(PieceKind::Empty);
        }
        false
    })
}

/// Whether moving the piece `mover` from `source` to `target` is a legal single capture.
///
/// Returns the captured square when legal.
pub fn captured_square(
    target: Position,
    source: Position,
    mover: PieceKind,
    board: &Board,
) -> Option<Position> {
    if mover.is_empty()
        || !is_on_board(target)
        || board.piece_at(target) != PieceKind::Empty
        || !is_on_same_diagonal(source, target)
    {
        return None;
    }

    let (d_row, d_col) = direction(source, target);
    let before_target = target.offset(-d_row, -d_col);

    if mover.is_king() {
        if diagonal_distance(source, target) < 2 || !is_path_clear(board, source, target) {
            return None;
        }
    } else {
        let forward = mover.color().map(|c| c.forward()).unwrap_or(0);
        if diagonal_distance(source, target) != 2 || d_row != forward {
            return None;
        }
    }

    if board.piece_at(before_target).is_opponent_of(mover) {
        Some(before_target)
    } else {
        None
    }
}

#[inline]
pub fn is_legal_capture(
    target: Position,
    source: Position,
    mover: PieceKind,
    board: &Board,
) -> bool {
    captured_square(target, source, mover, board).is_some()
}

/// Mandatory-capture gate: any piece of `side` can capture.
pub fn any_side_can_capture(side: SidePieces, board: &Board) -> bool {
    board.squares_of(side).any(|pos| can_capture(pos, board))
}
