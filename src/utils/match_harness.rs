//! Minimal head-to-head bot match harness for local testing.
//!
//! Runs two `Bot` implementations against each other without the session or
//! its pacing delay, with an optional seeded random opening prefix.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Bot, BotError};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::decision_generator::generate_all_decisions_for_side;
use crate::move_generation::legal_move_apply::apply_decision;
use crate::move_generation::promotion::promote_if_needed;
use crate::moves::decision::Decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub first_to_move: Color,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            first_to_move: Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening: Vec<Decision>,
    pub played: Vec<Decision>,
    pub red_move_count: u32,
    pub black_move_count: u32,
    pub red_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub started_at: Option<DateTime<Local>>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let started = self
            .started_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_owned());
        format!(
            "started={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            started,
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded match. `red` plays Red, `black` plays Black.
pub fn play_bot_match(
    red: &mut dyn Bot,
    black: &mut dyn Bot,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, BotError> {
    let (board, to_move, opening) = apply_seeded_random_opening(
        Board::new_game(),
        config.first_to_move,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );
    play_bot_match_from(red, black, board, to_move, opening, config.max_plies)
}

/// Play from a caller-provided position with no random opening.
pub fn play_bot_match_from_board(
    red: &mut dyn Bot,
    black: &mut dyn Bot,
    board: Board,
    to_move: Color,
    max_plies: u16,
) -> Result<MatchResult, BotError> {
    play_bot_match_from(red, black, board, to_move, Vec::new(), max_plies)
}

fn play_bot_match_from(
    red: &mut dyn Bot,
    black: &mut dyn Bot,
    mut board: Board,
    mut to_move: Color,
    opening: Vec<Decision>,
    max_plies: u16,
) -> Result<MatchResult, BotError> {
    red.new_game();
    black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: board,
        opening,
        played: Vec::new(),
        red_move_count: 0,
        black_move_count: 0,
        red_total_time_ns: 0,
        black_total_time_ns: 0,
        started_at: Local::now(),
    };

    for _ in 0..max_plies {
        if let GameStatus::Won(winner) = GameStatus::evaluate(&board, to_move) {
            result.outcome = match winner {
                Color::Red => MatchOutcome::RedWin,
                Color::Black => MatchOutcome::BlackWin,
            };
            break;
        }

        let started = Instant::now();
        let out = match to_move {
            Color::Red => red.choose_decision(&board, to_move)?,
            Color::Black => black.choose_decision(&board, to_move)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match to_move {
            Color::Red => {
                result.red_move_count = result.red_move_count.saturating_add(1);
                result.red_total_time_ns = result.red_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns =
                    result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_decision.ok_or(BotError::NoDecisions)?;
        if !generate_all_decisions_for_side(to_move.pieces(), &board).contains(&chosen) {
            return Err(BotError::IllegalDecision(chosen.to_string()));
        }

        play(&mut board, &chosen);
        result.played.push(chosen);
        to_move = to_move.opposite();
    }

    // The final ply may have ended the game on the last iteration.
    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let GameStatus::Won(winner) = GameStatus::evaluate(&board, to_move) {
            result.outcome = match winner {
                Color::Red => MatchOutcome::RedWin,
                Color::Black => MatchOutcome::BlackWin,
            };
        }
    }

    result.final_board = board;
    debug!(
        outcome = ?result.outcome,
        plies = result.played.len(),
        "match finished"
    );
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game, deterministically from `base_seed`.
pub fn play_bot_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, BotError>
where
    F1: Fn() -> Box<dyn Bot>,
    F2: Fn() -> Box<dyn Bot>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        started_at: Some(Local::now()),
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0x5EED_C0DE_2468_ACE0);

    for i in 0..config.games {
        let player1_is_red = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        if config.verbose {
            let (red, black) = if player1_is_red {
                (player1.name(), player2.name())
            } else {
                (player2.name(), player1.name())
            };
            info!(game = i + 1, seed, red, black, "series game starting");
        }

        let result = if player1_is_red {
            play_bot_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_bot_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_red {
            (
                result.red_move_count,
                result.red_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.red_move_count,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_color = match result.outcome {
            MatchOutcome::RedWin => Some(Color::Red),
            MatchOutcome::BlackWin => Some(Color::Black),
            MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_color {
            Some(color) => {
                let player = if (color == Color::Red) == player1_is_red {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                result = ?mapped,
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "series game finished"
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn play(board: &mut Board, decision: &Decision) {
    let undo = apply_decision(board, decision);
    promote_if_needed(board, decision.to, undo.moved_piece);
}

fn apply_seeded_random_opening(
    mut board: Board,
    mut to_move: Color,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Color, Vec<Decision>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let decisions = generate_all_decisions_for_side(to_move.pieces(), &board);
        if decisions.is_empty() {
            break;
        }
        let chosen = decisions[rng.random_range(0..decisions.len())];
        play(&mut board, &chosen);
        opening.push(chosen);
        to_move = to_move.opposite();
    }

    (board, to_move, opening)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyBot;
    use crate::engines::engine_random::RandomBot;

    #[test]
    fn match_harness_runs_random_vs_greedy() {
        let mut red = RandomBot::with_seed(1);
        let mut black = GreedyBot::new();
        let result = play_bot_match(
            &mut red,
            &mut black,
            42,
            MatchConfig {
                max_plies: 60,
                opening_min_plies: 2,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(result.opening.len() >= 2);
        assert_eq!(
            (result.red_move_count + result.black_move_count) as usize,
            result.played.len()
        );
        assert!(result.played.len() <= 60);
    }

    #[test]
    fn same_seed_gives_same_opening() {
        let config = MatchConfig {
            max_plies: 0,
            opening_min_plies: 3,
            opening_max_plies: 6,
            ..MatchConfig::default()
        };
        let a = play_bot_match(&mut GreedyBot::new(), &mut GreedyBot::new(), 7, config)
            .expect("match should run");
        let b = play_bot_match(&mut GreedyBot::new(), &mut GreedyBot::new(), 7, config)
            .expect("match should run");
        assert_eq!(a.opening, b.opening);
        assert_eq!(a.final_board, b.final_board);
    }

    #[test]
    fn side_without_pieces_loses_immediately() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ..r.....
             ........
             ........",
        )
        .expect("diagram parses");
        let result = play_bot_match_from_board(
            &mut GreedyBot::new(),
            &mut GreedyBot::new(),
            board,
            Color::Black,
            10,
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::RedWin);
        assert!(result.played.is_empty());
    }

    #[test]
    fn last_capture_is_scored_as_a_win() {
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
        let result = play_bot_match_from_board(
            &mut GreedyBot::new(),
            &mut GreedyBot::new(),
            board,
            Color::Red,
            1,
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::RedWin);
        assert_eq!(result.final_board.count_black(), 0);
    }

    #[test]
    fn series_aggregates_every_game() {
        let stats = play_bot_match_series(
            || Box::new(GreedyBot::new()),
            || Box::new(RandomBot::with_seed(5)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 30,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_avg_move_time_ms >= 0.0);
        assert!(stats.report().contains("games=3"));
    }
}
