use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::decision_generator::has_any_decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status with `to_move` about to play: a side loses when it has no pieces
    /// left or nothing legal to do.
    pub fn evaluate(board: &Board, to_move: Color) -> Self {
        if board.count_red() == 0 {
            return GameStatus::Won(Color::Black);
        }
        if board.count_black() == 0 {
            return GameStatus::Won(Color::Red);
        }
        if !has_any_decision(to_move.pieces(), board) {
            return GameStatus::Won(to_move.opposite());
        }
        GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(color) => write!(f, "{color} wins"),
        }
    }
}
