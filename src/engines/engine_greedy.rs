//! Single-ply greedy bot.
//!
//! Scores every legal decision on a scratch board and plays the best one.
//! Ties go to the decision generated last.

use crate::engines::engine_trait::{Bot, BotError, BotOutput};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::decision_generator::{DecisionGenerator, LegalDecisionGenerator};
use crate::moves::decision::Decision;
use crate::search::board_scoring::{DecisionScorer, ThreatScorer};

pub struct GreedyBot<S: DecisionScorer = ThreatScorer> {
    decision_generator: LegalDecisionGenerator,
    scorer: S,
}

impl GreedyBot<ThreatScorer> {
    pub fn new() -> Self {
        Self::with_scorer(ThreatScorer)
    }
}

impl Default for GreedyBot<ThreatScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DecisionScorer> GreedyBot<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            decision_generator: LegalDecisionGenerator,
            scorer,
        }
    }
}

/// Highest-scoring decision and its score.
///
/// A later candidate replaces the running best on `>=`, so the last of several
/// equal scores wins.
///
/// # Panics
/// Panics when `decisions` is empty. Callers must only ask for a decision when
/// the side to move has one.
pub fn choose_best_decision<S: DecisionScorer + ?Sized>(
    decisions: &[Decision],
    board: &Board,
    mover: Color,
    scorer: &S,
) -> (Decision, i32) {
    assert!(
        !decisions.is_empty(),
        "choose_best_decision called with no decisions"
    );

    let mut best_score = i32::MIN;
    let mut best = decisions[0];
    for decision in decisions {
        let score = scorer.score(board, decision, mover);
        if score >= best_score {
            best_score = score;
            best = *decision;
        }
    }
    (best, best_score)
}

impl<S: DecisionScorer> Bot for GreedyBot<S> {
    fn name(&self) -> &str {
        "PlumCheckers Greedy"
    }

    fn choose_decision(&mut self, board: &Board, side: Color) -> Result<BotOutput, BotError> {
        let decisions = self
            .decision_generator
            .generate_decisions(side.pieces(), board);

        let mut out = BotOutput::default();
        out.info_lines.push(format!(
            "info string greedy_bot decisions {}",
            decisions.len()
        ));

        if decisions.is_empty() {
            return Ok(out);
        }

        let (best, best_score) = choose_best_decision(&decisions, board, side, &self.scorer);
        out.info_lines
            .push(format!("info string greedy_bot best_score {best_score}"));
        out.best_decision = Some(best);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{PieceKind, Position};
    use crate::moves::decision::DecisionKind;

    struct FixedScorer(Vec<(Decision, i32)>);

    impl DecisionScorer for FixedScorer {
        fn score(&self, _board: &Board, decision: &Decision, _mover: Color) -> i32 {
            self.0
                .iter()
                .find(|(d, _)| d == decision)
                .map(|(_, s)| *s)
                .unwrap_or(0)
        }
    }

    fn mv(from: (i8, i8), to: (i8, i8)) -> Decision {
        Decision::new(
            Position::new(from.0, from.1),
            Position::new(to.0, to.1),
            DecisionKind::Move,
        )
    }

    #[test]
    fn single_candidate_is_returned_whatever_its_score() {
        let only = mv((5, 0), (4, 1));
        let scorer = FixedScorer(vec![(only, -1000)]);
        let (best, score) = choose_best_decision(&[only], &Board::new_game(), Color::Red, &scorer);
        assert_eq!(best, only);
        assert_eq!(score, -1000);
    }

    #[test]
    fn ties_go_to_the_later_candidate() {
        let first = mv((5, 0), (4, 1));
        let second = mv((5, 2), (4, 3));
        let third = mv((5, 4), (4, 5));
        let scorer = FixedScorer(vec![(first, 5), (second, 5), (third, 1)]);
        let (best, _) = choose_best_decision(
            &[first, second, third],
            &Board::new_game(),
            Color::Red,
            &scorer,
        );
        assert_eq!(best, second);
    }

    #[test]
    #[should_panic(expected = "no decisions")]
    fn empty_candidate_list_is_a_contract_violation() {
        choose_best_decision(&[], &Board::new_game(), Color::Red, &ThreatScorer);
    }

    #[test]
    fn greedy_bot_takes_forced_capture() {
        let mut board = Board::new_empty();
        board.set_piece(3, 4, PieceKind::RedMan);
        board.set_piece(2, 3, PieceKind::BlackMan);
        board.set_piece(6, 1, PieceKind::RedMan);

        let out = GreedyBot::new()
            .choose_decision(&board, Color::Red)
            .expect("greedy bot should not fail");
        let best = out.best_decision.expect("a capture is available");
        assert_eq!(best.kind, DecisionKind::Capture);
        assert_eq!(best.to, Position::new(1, 2));
    }

    #[test]
    fn greedy_bot_avoids_handing_over_a_capture() {
        let mut board = Board::new_empty();
        board.set_piece(5, 4, PieceKind::RedMan);
        board.set_piece(3, 2, PieceKind::BlackMan);
        board.set_piece(0, 7, PieceKind::BlackMan);

        // (4,3) walks next to the black man with (5,4) vacated behind it.
        let out = GreedyBot::new()
            .choose_decision(&board, Color::Red)
            .expect("greedy bot should not fail");
        assert_eq!(out.best_decision, Some(mv((5, 4), (4, 5))));
    }

    #[test]
    fn greedy_bot_reports_no_decision_when_blocked() {
        let mut board = Board::new_empty();
        board.set_piece(7, 0, PieceKind::RedMan);
        board.set_piece(6, 1, PieceKind::BlackMan);
        board.set_piece(5, 2, PieceKind::BlackMan);

        let out = GreedyBot::new()
            .choose_decision(&board, Color::Red)
            .expect("greedy bot should not fail");
        assert!(out.best_decision.is_none());
    }
}
