use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PieceKind, Position};
use crate::game_state::undo_state::UndoRecord;
use crate::moves::decision::Decision;
use crate::moves::diagonal::direction;

/// Square jumped by a capture: the one immediately before the landing square.
#[inline]
pub fn jumped_square(decision: &Decision) -> Position {
    let (d_row, d_col) = direction(decision.from, decision.to);
    decision.to.offset(-d_row, -d_col)
}

/// Executes `decision` on `board` in place. Promotion is left to the caller.
pub fn apply_decision(board: &mut Board, decision: &Decision) -> UndoRecord {
    let moved_piece = board.piece_at(decision.from);

    let captured = if decision.kind.is_capture() {
        let square = jumped_square(decision);
        let piece = board.piece_at(square);
        board.set(square, PieceKind::Empty);
        Some((square, piece))
    } else {
        None
    };

    board.set(decision.from, PieceKind::Empty);
    board.set(decision.to, moved_piece);

    UndoRecord {
        decision: *decision,
        moved_piece,
        captured,
    }
}

/// Applies `decision` to an owned copy, leaving `board` untouched.
pub fn apply_decision_to_copy(board: &Board, decision: &Decision) -> Board {
    let mut next = *board;
    apply_decision(&mut next, decision);
    next
}

/// Reverses `apply_decision`, restoring any captured piece.
///
/// The mover goes back as `undo.moved_piece`, its kind before the move, so a
/// crown added by `promote_if_needed` afterwards is removed as well.
pub fn undo_decision(board: &mut Board, undo: &UndoRecord) {
    board.set(undo.decision.to, PieceKind::Empty);
    board.set(undo.decision.from, undo.moved_piece);
    if let Some((square, piece)) = undo.captured {
        board.set(square, piece);
    }
}
