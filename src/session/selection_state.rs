use crate::game_state::checkers_types::Position;

/// Currently selected piece, owned by the input side of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<Position>,
}

impl SelectionState {
    #[inline]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[inline]
    pub fn select(&mut self, pos: Position) {
        self.selected = Some(pos);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
