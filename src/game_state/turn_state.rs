use crate::game_state::checkers_types::{Color, SidePieces};

/// Active side. Two states, one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    active: Color,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Color::Red)
    }
}

impl TurnState {
    #[inline]
    pub const fn new(first: Color) -> Self {
        Self { active: first }
    }

    #[inline]
    pub const fn active_color(&self) -> Color {
        self.active
    }

    /// Active (man, king) pair.
    #[inline]
    pub const fn active(&self) -> SidePieces {
        self.active.pieces()
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.active = self.active.opposite();
    }
}
