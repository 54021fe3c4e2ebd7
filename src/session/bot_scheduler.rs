//! Delayed bot turns on a worker thread.
//!
//! A dispatched turn waits out the pacing delay on a cancel channel, runs the
//! bot against an owned board copy, and posts the result back on the reply
//! channel. The worker never sees the live board; only the session applies
//! replies, so there is a single writer.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::engines::engine_trait::{Bot, BotError, BotOutput};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;

#[derive(Debug)]
pub struct BotReply {
    /// Session generation the turn was dispatched for.
    pub generation: u64,
    pub side: Color,
    pub output: Result<BotOutput, BotError>,
}

/// How often a blocked `wait_reply` checks whether the worker died.
const WORKER_CHECK_INTERVAL: Duration = Duration::from_millis(20);

struct PendingTurn {
    generation: u64,
    side: Color,
    // Dropping the sender wakes the worker early and aborts the turn.
    _cancel_tx: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct BotScheduler {
    bot: Arc<Mutex<Box<dyn Bot>>>,
    delay: Duration,
    reply_tx: Sender<BotReply>,
    reply_rx: Receiver<BotReply>,
    pending: Option<PendingTurn>,
}

impl BotScheduler {
    pub fn new(bot: Box<dyn Bot>, delay: Duration) -> Self {
        let (reply_tx, reply_rx) = channel();
        Self {
            bot: Arc::new(Mutex::new(bot)),
            delay,
            reply_tx,
            reply_rx,
            pending: None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reset the bot's per-game state. Cancels any pending turn first.
    pub fn new_game(&mut self) {
        self.cancel();
        self.bot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .new_game();
    }

    /// Schedule a bot turn for `side` on a copy of `board`. Replaces any pending turn.
    pub fn dispatch(&mut self, generation: u64, board: Board, side: Color) {
        self.cancel();

        let (cancel_tx, cancel_rx) = channel::<()>();
        let bot = Arc::clone(&self.bot);
        let reply_tx = self.reply_tx.clone();
        let delay = self.delay;

        let handle = thread::spawn(move || {
            match cancel_rx.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }

            // A bot that panicked on an earlier turn leaves the lock poisoned;
            // the bots keep no cross-turn state worth protecting.
            let output = bot
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .choose_decision(&board, side);
            // The session may be gone by now; nothing to report to.
            let _ = reply_tx.send(BotReply {
                generation,
                side,
                output,
            });
        });

        debug!(generation, side = %side, delay_ms = delay.as_millis() as u64, "bot turn scheduled");
        self.pending = Some(PendingTurn {
            generation,
            side,
            _cancel_tx: cancel_tx,
            handle,
        });
    }

    /// Abort the pending turn, if any. A reply already in flight is left in the
    /// channel and will be recognised as stale by its generation.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.generation, "bot turn cancelled");
        }
    }

    /// Non-blocking check for a finished turn.
    ///
    /// A worker that exited without replying is reported as
    /// `BotError::WorkerUnavailable` for its generation.
    pub fn try_reply(&mut self) -> Option<BotReply> {
        match self.reply_rx.try_recv() {
            Ok(reply) => Some(self.settle(reply)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => self.reap_dead_worker(),
        }
    }

    /// Block up to `timeout` for a finished turn.
    pub fn wait_reply(&mut self, timeout: Duration) -> Option<BotReply> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self
                .reply_rx
                .recv_timeout(remaining.min(WORKER_CHECK_INTERVAL))
            {
                Ok(reply) => return Some(self.settle(reply)),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    if let Some(reply) = self.reap_dead_worker() {
                        return Some(reply);
                    }
                    if remaining.is_zero() {
                        return None;
                    }
                }
            }
        }
    }

    /// Clears a pending turn whose worker has exited without a reply.
    fn reap_dead_worker(&mut self) -> Option<BotReply> {
        if !self
            .pending
            .as_ref()
            .is_some_and(|p| p.handle.is_finished())
        {
            return None;
        }
        // The reply is sent before the worker exits; pick it up if it is there.
        if let Ok(reply) = self.reply_rx.try_recv() {
            return Some(self.settle(reply));
        }

        let pending = self.pending.take()?;
        warn!(generation = pending.generation, "bot worker exited without a reply");
        Some(BotReply {
            generation: pending.generation,
            side: pending.side,
            output: Err(BotError::WorkerUnavailable),
        })
    }

    fn settle(&mut self, reply: BotReply) -> BotReply {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.generation == reply.generation)
        {
            self.pending = None;
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyBot;
    use crate::move_generation::decision_generator::generate_all_decisions_for_side;

    #[test]
    fn dispatched_turn_replies_with_legal_decision() {
        let board = Board::new_game();
        let mut scheduler = BotScheduler::new(Box::new(GreedyBot::new()), Duration::ZERO);
        scheduler.dispatch(1, board, Color::Black);
        assert!(scheduler.is_pending());

        let reply = scheduler
            .wait_reply(Duration::from_secs(5))
            .expect("bot should answer");
        assert_eq!(reply.generation, 1);
        assert!(!scheduler.is_pending());

        let decision = reply
            .output
            .expect("greedy bot should not fail")
            .best_decision
            .expect("black has moves");
        assert!(generate_all_decisions_for_side(Color::Black.pieces(), &board).contains(&decision));
    }

    #[test]
    fn cancelled_turn_never_replies() {
        let mut scheduler =
            BotScheduler::new(Box::new(GreedyBot::new()), Duration::from_secs(30));
        scheduler.dispatch(3, Board::new_game(), Color::Black);
        scheduler.cancel();
        assert!(!scheduler.is_pending());
        assert!(scheduler.wait_reply(Duration::from_millis(100)).is_none());
    }

    struct PanickingBot;

    impl Bot for PanickingBot {
        fn name(&self) -> &str {
            "panicking"
        }

        fn choose_decision(&mut self, _board: &Board, _side: Color) -> Result<BotOutput, BotError> {
            panic!("bot blew up");
        }
    }

    #[test]
    fn worker_that_dies_is_reported_and_cleared() {
        let mut scheduler = BotScheduler::new(Box::new(PanickingBot), Duration::ZERO);
        scheduler.dispatch(4, Board::new_game(), Color::Black);

        let reply = scheduler
            .wait_reply(Duration::from_secs(5))
            .expect("a dead worker should still produce a reply");
        assert_eq!(reply.generation, 4);
        assert_eq!(reply.side, Color::Black);
        assert_eq!(reply.output.unwrap_err(), BotError::WorkerUnavailable);
        assert!(!scheduler.is_pending());

        // The poisoned bot lock does not wedge later turns.
        scheduler.dispatch(5, Board::new_game(), Color::Black);
        let reply = scheduler
            .wait_reply(Duration::from_secs(5))
            .expect("second turn should also be reported");
        assert_eq!(reply.generation, 5);
    }

    #[test]
    fn redispatch_replaces_pending_turn() {
        let mut scheduler =
            BotScheduler::new(Box::new(GreedyBot::new()), Duration::from_millis(50));
        scheduler.dispatch(1, Board::new_game(), Color::Black);
        scheduler.dispatch(2, Board::new_game(), Color::Red);

        let reply = scheduler
            .wait_reply(Duration::from_secs(5))
            .expect("second turn should answer");
        assert_eq!(reply.generation, 2);
        assert_eq!(reply.side, Color::Red);
        assert!(scheduler.try_reply().is_none());
    }
}
