//! One human-vs-bot game.
//!
//! `GameSession` owns the live board and is its only writer. Human input
//! arrives as cell clicks; bot turns run on the scheduler's worker against a
//! board copy and come back as replies the session validates and applies.
//! Both paths funnel through the same `play` routine: apply, crown, switch
//! turn, re-evaluate the game status, and hand the turn to the bot if needed.

use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::engines::engine_trait::BotError;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Position};
use crate::game_state::game_status::GameStatus;
use crate::game_state::player_config::PlayerConfig;
use crate::game_state::turn_state::TurnState;
use crate::move_generation::capture_rules::{any_side_can_capture, is_legal_capture};
use crate::move_generation::decision_generator::generate_all_decisions_for_side;
use crate::move_generation::legal_move_apply::apply_decision;
use crate::move_generation::move_rules::is_legal_move;
use crate::move_generation::promotion::promote_if_needed;
use crate::moves::decision::{Decision, DecisionKind};
use crate::moves::diagonal::is_valid_position;
use crate::session::bot_scheduler::{BotReply, BotScheduler};
use crate::session::observer::{NullObserver, SessionObserver};
use crate::session::selection_state::SelectionState;
use crate::session::session_config::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// An own piece is now selected.
    Selected(Position),
    /// The selected piece played this decision.
    Played(Decision),
}

pub struct GameSession {
    config: SessionConfig,
    board: Board,
    players: PlayerConfig,
    turn: TurnState,
    selection: SelectionState,
    status: GameStatus,
    generation: u64,
    scheduler: BotScheduler,
    observer: Box<dyn SessionObserver>,
    started_at: DateTime<Local>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_observer(config, Box::new(NullObserver))
    }

    pub fn with_observer(config: SessionConfig, observer: Box<dyn SessionObserver>) -> Self {
        let mut session = Self {
            config,
            board: Board::new_game(),
            players: PlayerConfig::with_human(config.human),
            turn: TurnState::new(config.first_to_move),
            selection: SelectionState::default(),
            status: GameStatus::InProgress,
            generation: 0,
            scheduler: BotScheduler::new(config.build_bot(), config.bot_delay),
            observer,
            started_at: Local::now(),
        };
        session.new_game();
        session
    }

    /// Throw away the current game and set up the standard opening.
    pub fn new_game(&mut self) {
        let first = self.config.first_to_move;
        self.load_position(Board::new_game(), first);
    }

    /// Switch sides and restart.
    pub fn assign_human(&mut self, color: Color) {
        self.config.human = color;
        self.players.assign_human(color);
        self.new_game();
    }

    /// Start a game from an arbitrary position with `to_move` on turn.
    pub fn load_position(&mut self, board: Board, to_move: Color) {
        self.scheduler.new_game();
        self.generation = self.generation.wrapping_add(1);
        self.board = board;
        self.players = PlayerConfig::with_human(self.config.human);
        self.turn = TurnState::new(to_move);
        self.selection.clear();
        self.started_at = Local::now();
        info!(
            generation = self.generation,
            human = %self.players.human_color(),
            to_move = %to_move,
            "new game"
        );

        self.observer.refresh(&self.board);
        self.after_turn_change();
    }

    pub fn handle_click(&mut self, row: usize, col: usize) -> ClickOutcome {
        if self.status.is_over()
            || self.scheduler.is_pending()
            || self.turn.active_color() != self.players.human_color()
        {
            return ClickOutcome::Ignored;
        }
        if row > i8::MAX as usize || col > i8::MAX as usize {
            return ClickOutcome::Ignored;
        }
        let pos = Position::new(row as i8, col as i8);
        if !is_valid_position(pos.row, pos.col) {
            return ClickOutcome::Ignored;
        }

        let human = self.players.human();
        if human.owns(self.board.piece_at(pos)) {
            self.selection.select(pos);
            return ClickOutcome::Selected(pos);
        }

        let Some(from) = self.selection.selected() else {
            return ClickOutcome::Ignored;
        };
        let mover = self.board.piece_at(from);

        let decision = if is_legal_capture(pos, from, mover, &self.board) {
            let kind = if mover.is_king() {
                DecisionKind::KingCapture
            } else {
                DecisionKind::Capture
            };
            Decision::new(from, pos, kind)
        } else if !any_side_can_capture(human, &self.board)
            && is_legal_move(pos, from, mover, &self.board)
        {
            Decision::new(from, pos, DecisionKind::Move)
        } else {
            return ClickOutcome::Ignored;
        };

        self.play(&decision);
        ClickOutcome::Played(decision)
    }

    /// Apply a finished bot turn if one is waiting. Returns the decision played.
    pub fn poll_bot(&mut self) -> Result<Option<Decision>, BotError> {
        match self.scheduler.try_reply() {
            Some(reply) => self.apply_bot_reply(reply),
            None => Ok(None),
        }
    }

    /// Block up to `timeout` for the pending bot turn and apply it.
    pub fn wait_for_bot(&mut self, timeout: Duration) -> Result<Option<Decision>, BotError> {
        if !self.scheduler.is_pending() {
            return self.poll_bot();
        }
        match self.scheduler.wait_reply(timeout) {
            Some(reply) => self.apply_bot_reply(reply),
            None => Ok(None),
        }
    }

    /// Re-dispatch the bot after a failed reply.
    pub fn resume_bot(&mut self) {
        if !self.scheduler.is_pending() {
            self.after_turn_change();
        }
    }

    fn apply_bot_reply(&mut self, reply: BotReply) -> Result<Option<Decision>, BotError> {
        if reply.generation != self.generation {
            debug!(
                reply_generation = reply.generation,
                generation = self.generation,
                "stale bot reply dropped"
            );
            return Ok(None);
        }

        let output = reply.output?;
        for line in &output.info_lines {
            debug!(target: "plum_checkers::bot", "{line}");
        }

        let decision = output.best_decision.ok_or(BotError::NoDecisions)?;
        let legal = generate_all_decisions_for_side(self.players.bot(), &self.board);
        if reply.side != self.players.bot_color() || !legal.contains(&decision) {
            warn!(decision = %decision, "bot reply rejected");
            return Err(BotError::IllegalDecision(decision.to_string()));
        }

        self.play(&decision);
        Ok(Some(decision))
    }

    /// The one executor shared by human and bot turns.
    fn play(&mut self, decision: &Decision) {
        let undo = apply_decision(&mut self.board, decision);
        let promoted = promote_if_needed(&mut self.board, decision.to, undo.moved_piece);
        self.selection.clear();
        debug!(
            side = %self.turn.active_color(),
            decision = %decision,
            promoted,
            "decision applied"
        );
        self.observer.refresh(&self.board);

        self.turn.switch_turn();
        self.after_turn_change();
    }

    fn after_turn_change(&mut self) {
        self.status = GameStatus::evaluate(&self.board, self.turn.active_color());
        if self.status.is_over() {
            info!(status = %self.status, "game over");
            self.observer.game_over(self.status);
            return;
        }

        let bot_color = self.players.bot_color();
        if self.turn.active_color() == bot_color {
            self.scheduler
                .dispatch(self.generation, self.board, bot_color);
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &PlayerConfig {
        &self.players
    }

    #[inline]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[inline]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_bot_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::game_state::checkers_types::PieceKind;
    use crate::session::session_config::BotKind;

    const WAIT: Duration = Duration::from_secs(5);

    fn fast_config(human: Color) -> SessionConfig {
        SessionConfig {
            human,
            bot_delay: Duration::ZERO,
            ..SessionConfig::default()
        }
    }

    #[derive(Default)]
    struct Recorded {
        refreshes: usize,
        game_over: Option<GameStatus>,
    }

    struct RecordingObserver(Rc<RefCell<Recorded>>);

    impl SessionObserver for RecordingObserver {
        fn refresh(&mut self, _board: &Board) {
            self.0.borrow_mut().refreshes += 1;
        }

        fn game_over(&mut self, status: GameStatus) {
            self.0.borrow_mut().game_over = Some(status);
        }
    }

    #[test]
    fn human_move_flips_turn_and_dispatches_bot() {
        let mut session = GameSession::new(fast_config(Color::Red));
        assert_eq!(session.handle_click(5, 2), ClickOutcome::Selected(Position::new(5, 2)));

        let outcome = session.handle_click(4, 3);
        assert_eq!(
            outcome,
            ClickOutcome::Played(Decision::new(
                Position::new(5, 2),
                Position::new(4, 3),
                DecisionKind::Move
            ))
        );
        assert_eq!(session.turn().active_color(), Color::Black);
        assert!(session.selection().selected().is_none());
        assert!(session.is_bot_pending());

        let reply = session.wait_for_bot(WAIT).expect("bot reply should be legal");
        assert!(reply.is_some());
        assert_eq!(session.turn().active_color(), Color::Red);
        assert_eq!(session.board().count_black(), 12);
    }

    #[test]
    fn input_is_refused_while_bot_is_pending() {
        let mut session = GameSession::new(SessionConfig {
            bot_delay: Duration::from_secs(30),
            ..SessionConfig::default()
        });
        session.handle_click(5, 2);
        session.handle_click(4, 3);
        assert!(session.is_bot_pending());

        let before = *session.board();
        assert_eq!(session.handle_click(5, 4), ClickOutcome::Ignored);
        assert_eq!(session.handle_click(4, 5), ClickOutcome::Ignored);
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn illegal_clicks_change_nothing() {
        let mut session = GameSession::new(fast_config(Color::Red));
        let before = *session.board();

        assert_eq!(session.handle_click(4, 1), ClickOutcome::Ignored);
        assert_eq!(session.handle_click(2, 1), ClickOutcome::Ignored);
        session.handle_click(5, 0);
        assert_eq!(session.handle_click(3, 2), ClickOutcome::Ignored);
        assert_eq!(session.handle_click(5, 2), ClickOutcome::Selected(Position::new(5, 2)));
        assert_eq!(session.handle_click(4, 2), ClickOutcome::Ignored);
        assert_eq!(session.handle_click(9, 9), ClickOutcome::Ignored);

        assert_eq!(*session.board(), before);
        assert_eq!(session.turn().active_color(), Color::Red);
    }

    #[test]
    fn plain_move_refused_when_capture_is_mandatory() {
        let mut session = GameSession::new(fast_config(Color::Red));
        let board = Board::from_diagram(
            "........
             ........
             ...b....
             ....r...
             ........
             ..r.....
             ........
             b.......",
        )
        .expect("diagram parses");
        session.load_position(board, Color::Red);

        session.handle_click(5, 2);
        assert_eq!(session.handle_click(4, 1), ClickOutcome::Ignored);

        session.handle_click(3, 4);
        let outcome = session.handle_click(1, 2);
        assert!(matches!(outcome, ClickOutcome::Played(d) if d.kind == DecisionKind::Capture));
        assert_eq!(session.board().get_piece(2, 3), PieceKind::Empty);
    }

    #[test]
    fn man_reaching_back_rank_is_crowned() {
        let mut session = GameSession::new(fast_config(Color::Red));
        let board = Board::from_diagram(
            "........
             ..r.....
             ........
             ........
             ........
             ........
             ........
             b.......",
        )
        .expect("diagram parses");
        session.load_position(board, Color::Red);

        session.handle_click(1, 2);
        session.handle_click(0, 3);
        assert_eq!(session.board().get_piece(0, 3), PieceKind::RedKing);
    }

    #[test]
    fn bot_moves_first_when_it_owns_the_first_turn() {
        let mut session = GameSession::new(fast_config(Color::Black));
        assert!(session.is_bot_pending());
        assert_eq!(session.handle_click(2, 1), ClickOutcome::Ignored);

        let played = session
            .wait_for_bot(WAIT)
            .expect("bot reply should be legal")
            .expect("bot should have played");
        assert_eq!(played.from.row, 5);
        assert_eq!(session.turn().active_color(), Color::Black);
        assert_eq!(session.handle_click(2, 1), ClickOutcome::Selected(Position::new(2, 1)));
    }

    #[test]
    fn capturing_last_piece_ends_the_game_and_notifies() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut session = GameSession::with_observer(
            fast_config(Color::Red),
            Box::new(RecordingObserver(Rc::clone(&recorded))),
        );
        let board = Board::from_diagram(
            "........
             ........
             ...b....
             ....r...
             ........
             ........
             ........
             ........",
        )
        .expect("diagram parses");
        session.load_position(board, Color::Red);

        session.handle_click(3, 4);
        session.handle_click(1, 2);

        assert_eq!(session.status(), GameStatus::Won(Color::Red));
        assert!(!session.is_bot_pending());
        assert_eq!(recorded.borrow().game_over, Some(GameStatus::Won(Color::Red)));
        assert!(recorded.borrow().refreshes >= 3);
        assert_eq!(session.handle_click(1, 2), ClickOutcome::Ignored);
    }

    #[test]
    fn new_game_drops_reply_from_previous_game() {
        let mut session = GameSession::new(SessionConfig {
            human: Color::Black,
            bot_delay: Duration::ZERO,
            bot: BotKind::Random { seed: Some(9) },
            ..SessionConfig::default()
        });
        let old_generation = session.generation();
        // Give the first worker time to post its reply before restarting.
        std::thread::sleep(Duration::from_millis(200));
        session.new_game();
        assert_ne!(session.generation(), old_generation);

        // The first reply still in the channel belongs to the abandoned game.
        let played = match session.wait_for_bot(WAIT).expect("replies should be legal") {
            Some(decision) => Some(decision),
            None => session.wait_for_bot(WAIT).expect("replies should be legal"),
        };
        assert!(played.is_some());
        assert!(!session.is_bot_pending());
        assert_eq!(session.turn().active_color(), Color::Black);
        assert_eq!(session.board().count_red(), 12);
    }
}
