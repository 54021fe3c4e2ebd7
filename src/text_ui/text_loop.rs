//! Line-oriented terminal front-end.
//!
//! Reads commands from stdin, forwards clicks to the game session, and prints
//! the board whenever the session reports a change. Bot turns are awaited
//! right after the command that handed the turn over.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::decision_generator::generate_all_decisions_for_side;
use crate::session::game_session::{ClickOutcome, GameSession};
use crate::session::observer::SessionObserver;
use crate::session::session_config::SessionConfig;
use crate::utils::render_board::render_board_with_selection;

/// Slack on top of the pacing delay when blocking for a bot reply.
const BOT_REPLY_GRACE: Duration = Duration::from_secs(5);

const HELP: &str = "commands: new [red|black] | click <row> <col> | show | moves | wait | quit";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut ui = TextUi::new(config);

    ui.flush_notices(&mut stdout)?;
    writeln!(stdout, "{HELP}")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = ui.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

#[derive(Default)]
struct Notices {
    board_changed: bool,
    game_over: Option<GameStatus>,
}

struct TextObserver(Rc<RefCell<Notices>>);

impl SessionObserver for TextObserver {
    fn refresh(&mut self, _board: &Board) {
        self.0.borrow_mut().board_changed = true;
    }

    fn game_over(&mut self, status: GameStatus) {
        self.0.borrow_mut().game_over = Some(status);
    }
}

pub struct TextUi {
    session: GameSession,
    notices: Rc<RefCell<Notices>>,
}

impl TextUi {
    pub fn new(config: SessionConfig) -> Self {
        let notices = Rc::new(RefCell::new(Notices::default()));
        let session =
            GameSession::with_observer(config, Box::new(TextObserver(Rc::clone(&notices))));
        Self { session, notices }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "new" => match parts.next() {
                None => self.session.new_game(),
                Some(side) => match parse_color(side) {
                    Some(color) => self.session.assign_human(color),
                    None => writeln!(out, "error: unknown side '{side}'")?,
                },
            },
            "click" => {
                let row = parts.next().and_then(|t| t.parse::<usize>().ok());
                let col = parts.next().and_then(|t| t.parse::<usize>().ok());
                match (row, col) {
                    (Some(row), Some(col)) => match self.session.handle_click(row, col) {
                        ClickOutcome::Ignored => writeln!(out, "ignored")?,
                        ClickOutcome::Selected(pos) => {
                            writeln!(out, "selected {pos}")?;
                            self.notices.borrow_mut().board_changed = true;
                        }
                        ClickOutcome::Played(decision) => writeln!(out, "played {decision}")?,
                    },
                    _ => writeln!(out, "error: usage click <row> <col>")?,
                }
            }
            "show" => {
                self.notices.borrow_mut().board_changed = true;
            }
            "moves" => {
                let human = self.session.players().human();
                let decisions = generate_all_decisions_for_side(human, self.session.board());
                if decisions.is_empty() {
                    writeln!(out, "no legal decisions")?;
                }
                for decision in decisions {
                    writeln!(out, "{decision}")?;
                }
            }
            "wait" => {
                self.session.resume_bot();
            }
            "help" => {
                writeln!(out, "{HELP}")?;
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "error: unknown command '{cmd}' ({HELP})")?;
            }
        }

        self.flush_notices(out)?;
        self.await_bot(out)?;
        Ok(false)
    }

    fn await_bot(&mut self, out: &mut impl Write) -> io::Result<()> {
        let deadline = Instant::now() + self.session.config().bot_delay + BOT_REPLY_GRACE;
        while self.session.is_bot_pending() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.session.wait_for_bot(remaining) {
                Ok(Some(decision)) => writeln!(out, "bot played {decision}")?,
                // Stale replies also land here; only give up once the deadline passed.
                Ok(None) if Instant::now() >= deadline => {
                    if self.session.is_bot_pending() {
                        warn!("bot turn timed out");
                        writeln!(out, "bot is still thinking (type 'wait' to keep waiting)")?;
                    }
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "bot turn failed");
                    writeln!(out, "error: {err} (type 'wait' to retry)")?;
                    break;
                }
            }
            self.flush_notices(out)?;
        }
        Ok(())
    }

    fn flush_notices(&mut self, out: &mut impl Write) -> io::Result<()> {
        let (board_changed, game_over) = {
            let mut notices = self.notices.borrow_mut();
            (
                std::mem::take(&mut notices.board_changed),
                notices.game_over.take(),
            )
        };

        if board_changed {
            let selected = self.session.selection().selected();
            write!(
                out,
                "{}",
                render_board_with_selection(self.session.board(), selected)
            )?;
            if !self.session.status().is_over() {
                writeln!(out, "{} to move", self.session.turn().active_color())?;
            }
        }
        if let Some(status) = game_over {
            writeln!(out, "game over: {status}")?;
        }
        Ok(())
    }
}

fn parse_color(token: &str) -> Option<Color> {
    match token.to_ascii_lowercase().as_str() {
        "red" | "r" => Some(Color::Red),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}
