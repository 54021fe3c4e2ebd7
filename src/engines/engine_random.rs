//! Random-decision bot.
//!
//! Selects uniformly from legal decisions and is primarily used as a sparring
//! partner in bot-vs-bot series and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Bot, BotError, BotOutput};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::decision_generator::{DecisionGenerator, LegalDecisionGenerator};

pub struct RandomBot {
    decision_generator: LegalDecisionGenerator,
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            decision_generator: LegalDecisionGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible bot for tests and seeded series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            decision_generator: LegalDecisionGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_decision(&mut self, board: &Board, side: Color) -> Result<BotOutput, BotError> {
        let decisions = self
            .decision_generator
            .generate_decisions(side.pieces(), board);

        let mut out = BotOutput::default();
        out.info_lines.push(format!(
            "info string random_bot decisions {}",
            decisions.len()
        ));

        if decisions.is_empty() {
            out.best_decision = None;
            return Ok(out);
        }

        let picked = decisions
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(BotError::NoDecisions)?;

        out.best_decision = Some(*picked);
        Ok(out)
    }
}
