//! Notification hooks for whatever front-end is drawing the game.

use crate::game_state::board::Board;
use crate::game_state::game_status::GameStatus;

pub trait SessionObserver {
    /// Called after every board mutation.
    fn refresh(&mut self, board: &Board);

    /// Called once when the game ends.
    fn game_over(&mut self, _status: GameStatus) {}
}

pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn refresh(&mut self, _board: &Board) {}
}
