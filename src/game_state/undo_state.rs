use crate::game_state::checkers_types::{PieceKind, Position};
use crate::moves::decision::Decision;

/// Single undo record for `apply_decision` / `undo_decision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    pub decision: Decision,
    pub moved_piece: PieceKind,
    pub captured: Option<(Position, PieceKind)>,
}
