//! Bot abstraction layer used by the game session and match harness.
//!
//! Defines the common output payload so different bot strategies can be
//! selected at runtime behind a single trait interface.

use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::moves::decision::Decision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    NoDecisions,
    IllegalDecision(String),
    WorkerUnavailable,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::NoDecisions => write!(f, "bot has no legal decision"),
            BotError::IllegalDecision(msg) => write!(f, "bot returned illegal decision: {msg}"),
            BotError::WorkerUnavailable => write!(f, "bot worker is not running"),
        }
    }
}

impl Error for BotError {}

#[derive(Debug, Clone, Default)]
pub struct BotOutput {
    pub best_decision: Option<Decision>,
    pub info_lines: Vec<String>,
}

pub trait Bot: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a decision for `side` on `board`. `best_decision` is `None` only
    /// when `side` has nothing legal to play.
    fn choose_decision(&mut self, board: &Board, side: Color) -> Result<BotOutput, BotError>;
}
