//! Mutable 8x8 checkers board.
//!
//! `Board` is a plain value: cloning yields an independent grid, which is how
//! speculative evaluation gets a scratch position without touching the live game.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_rules::{BLACK_START_ROWS, BOARD_SIZE, RED_START_ROWS};
use crate::game_state::checkers_types::{Color, PieceKind, Position, SidePieces};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    WrongRowCount(usize),
    WrongColumnCount { row: usize, found: usize },
    InvalidPiece { row: usize, col: usize, ch: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongRowCount(n) => write!(f, "expected 8 rows, found {n}"),
            BoardParseError::WrongColumnCount { row, found } => {
                write!(f, "row {row}: expected 8 cells, found {found}")
            }
            BoardParseError::InvalidPiece { row, col, ch } => {
                write!(f, "invalid piece '{ch}' at ({row},{col})")
            }
        }
    }
}

impl Error for BoardParseError {}

/// Row-major grid of piece kinds.
///
/// Games set up with `new_game` only ever occupy dark squares (`(row + col)` odd):
/// every move is diagonal, so square color is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[PieceKind; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening: Black on rows 0-2, Red on rows 5-7, dark squares only.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if BLACK_START_ROWS.contains(&row) {
                    board.cells[row][col] = PieceKind::BlackMan;
                } else if RED_START_ROWS.contains(&row) {
                    board.cells[row][col] = PieceKind::RedMan;
                }
            }
        }
        board
    }

    /// Bounds-aware lookup; `None` off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<PieceKind> {
        if !crate::moves::diagonal::is_valid_position(pos.row, pos.col) {
            return None;
        }
        Some(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Piece at `pos`, with off-board cells reading as empty.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> PieceKind {
        self.get(pos).unwrap_or(PieceKind::Empty)
    }

    #[inline]
    pub fn get_piece(&self, row: usize, col: usize) -> PieceKind {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return PieceKind::Empty;
        }
        self.cells[row][col]
    }

    /// Writes a cell from outside the rule engine. Off-board writes and pieces
    /// on light squares are refused.
    pub fn set_piece(&mut self, row: usize, col: usize, kind: PieceKind) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        let pos = Position::new(row as i8, col as i8);
        if !pos.is_dark() && !kind.is_empty() {
            return false;
        }
        self.set(pos, kind)
    }

    /// Raw cell write used by executors; only bounds are checked.
    pub fn set(&mut self, pos: Position, kind: PieceKind) -> bool {
        if !crate::moves::diagonal::is_valid_position(pos.row, pos.col) {
            return false;
        }
        self.cells[pos.row as usize][pos.col as usize] = kind;
        true
    }

    /// Occupied squares in row-major scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let piece = self.cells[row][col];
                if piece.is_empty() {
                    None
                } else {
                    Some((Position::new(row as i8, col as i8), piece))
                }
            })
        })
    }

    /// Squares holding a piece of `side`, row-major.
    pub fn squares_of(&self, side: SidePieces) -> impl Iterator<Item = Position> + '_ {
        self.occupied()
            .filter(move |(_, piece)| side.owns(*piece))
            .map(|(pos, _)| pos)
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.color() == Some(color))
            .count()
    }

    #[inline]
    pub fn count_red(&self) -> usize {
        self.count_color(Color::Red)
    }

    #[inline]
    pub fn count_black(&self) -> usize {
        self.count_color(Color::Black)
    }

    /// True once either side has no pieces left.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.count_red() == 0 || self.count_black() == 0
    }

    /// Parse an 8-line diagram: `.` empty, `r`/`b` men, `R`/`B` kings.
    /// Whitespace inside a line is ignored; blank lines are skipped.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongRowCount(rows.len()));
        }

        let mut board = Self::new_empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(BoardParseError::WrongColumnCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, ch) in cells.iter().enumerate() {
                let piece = PieceKind::from_char(*ch)
                    .ok_or(BoardParseError::InvalidPiece { row, col, ch: *ch })?;
                board.cells[row][col] = piece;
            }
        }

        Ok(board)
    }

    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in &self.cells {
            for piece in row {
                out.push(piece.to_char());
            }
            out.push('\n');
        }
        out
    }
}
