//! Core value types shared by the rule engine.
//!
//! Pieces are a small tagged enum; every rule predicate asks these
//! classification helpers instead of comparing raw codes.

pub use crate::game_state::board::Board;
pub use crate::game_state::undo_state::UndoRecord;

/// Side identity. Red moves toward row 0, Black toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn man(self) -> PieceKind {
        match self {
            Color::Red => PieceKind::RedMan,
            Color::Black => PieceKind::BlackMan,
        }
    }

    #[inline]
    pub const fn king(self) -> PieceKind {
        match self {
            Color::Red => PieceKind::RedKing,
            Color::Black => PieceKind::BlackKing,
        }
    }

    #[inline]
    pub const fn pieces(self) -> SidePieces {
        SidePieces {
            man: self.man(),
            king: self.king(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Empty,
    RedMan,
    BlackMan,
    RedKing,
    BlackKing,
}

impl PieceKind {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    #[inline]
    pub const fn is_red(self) -> bool {
        matches!(self, PieceKind::RedMan | PieceKind::RedKing)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, PieceKind::BlackMan | PieceKind::BlackKing)
    }

    #[inline]
    pub const fn is_red_king(self) -> bool {
        matches!(self, PieceKind::RedKing)
    }

    #[inline]
    pub const fn is_black_king(self) -> bool {
        matches!(self, PieceKind::BlackKing)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.is_red_king() || self.is_black_king()
    }

    #[inline]
    pub const fn is_man(self) -> bool {
        matches!(self, PieceKind::RedMan | PieceKind::BlackMan)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            PieceKind::RedMan | PieceKind::RedKing => Some(Color::Red),
            PieceKind::BlackMan | PieceKind::BlackKing => Some(Color::Black),
            PieceKind::Empty => None,
        }
    }

    /// True when both cells hold pieces of different colors.
    #[inline]
    pub fn is_opponent_of(self, other: PieceKind) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// King variant for a man; kings and empty cells map to themselves.
    #[inline]
    pub const fn crowned(self) -> PieceKind {
        match self {
            PieceKind::RedMan => PieceKind::RedKing,
            PieceKind::BlackMan => PieceKind::BlackKing,
            other => other,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::RedMan => 'r',
            PieceKind::BlackMan => 'b',
            PieceKind::RedKing => 'R',
            PieceKind::BlackKing => 'B',
        }
    }

    pub const fn from_char(ch: char) -> Option<PieceKind> {
        match ch {
            '.' | '_' | ' ' => Some(PieceKind::Empty),
            'r' => Some(PieceKind::RedMan),
            'b' => Some(PieceKind::BlackMan),
            'R' => Some(PieceKind::RedKing),
            'B' => Some(PieceKind::BlackKing),
            _ => None,
        }
    }
}

/// The (man, king) pair belonging to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SidePieces {
    pub man: PieceKind,
    pub king: PieceKind,
}

impl SidePieces {
    #[inline]
    pub fn owns(self, piece: PieceKind) -> bool {
        !piece.is_empty() && (piece == self.man || piece == self.king)
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        self.man.color()
    }
}

/// Board coordinate. Signed so that direction arithmetic can step off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 != 0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
