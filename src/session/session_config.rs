use std::time::Duration;

use crate::engines::engine_greedy::GreedyBot;
use crate::engines::engine_random::RandomBot;
use crate::engines::engine_trait::Bot;
use crate::game_state::checkers_types::Color;

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    Greedy,
    Random { seed: Option<u64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub human: Color,
    pub first_to_move: Color,
    /// Pause before the bot answers. Pacing only.
    pub bot_delay: Duration,
    pub bot: BotKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Color::Red,
            first_to_move: Color::Red,
            bot_delay: DEFAULT_BOT_DELAY,
            bot: BotKind::Greedy,
        }
    }
}

impl SessionConfig {
    pub fn build_bot(&self) -> Box<dyn Bot> {
        match self.bot {
            BotKind::Greedy => Box::new(GreedyBot::new()),
            BotKind::Random { seed: Some(seed) } => Box::new(RandomBot::with_seed(seed)),
            BotKind::Random { seed: None } => Box::new(RandomBot::new()),
        }
    }
}
