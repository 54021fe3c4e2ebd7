//! Decision value: one legal move or capture.

use std::fmt;

use crate::game_state::checkers_types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionKind {
    Move,
    Capture,
    KingCapture,
}

impl DecisionKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, DecisionKind::Capture | DecisionKind::KingCapture)
    }
}

/// One fully specified legal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decision {
    pub from: Position,
    pub to: Position,
    pub kind: DecisionKind,
}

impl Decision {
    #[inline]
    pub const fn new(from: Position, to: Position, kind: DecisionKind) -> Self {
        Self { from, to, kind }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.kind.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
