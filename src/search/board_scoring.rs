//! Pluggable decision scoring.
//!
//! A scorer looks at the position a decision would produce (on a scratch copy)
//! and returns a score from the mover's point of view. Higher is better.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::capture_rules::any_side_can_capture;
use crate::move_generation::legal_move_apply::apply_decision_to_copy;
use crate::moves::decision::Decision;

pub const KING_EXPOSED_PENALTY: i32 = -30;
pub const PIECE_EXPOSED_PENALTY: i32 = -20;
pub const CAPTURE_THREAT_BONUS: i32 = 10;
pub const PROMOTION_CHANCE_BONUS: i32 = 15;

pub trait DecisionScorer: Send + Sync {
    fn score(&self, board: &Board, decision: &Decision, mover: Color) -> i32;
}

/// One-ply threat heuristic: avoid handing the opponent a capture, prefer
/// creating capture threats and reaching the promotion row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatScorer;

impl DecisionScorer for ThreatScorer {
    fn score(&self, board: &Board, decision: &Decision, mover: Color) -> i32 {
        let moved_king = board.piece_at(decision.from).is_king();
        let scratch = apply_decision_to_copy(board, decision);

        let mut score = 0;

        if any_side_can_capture(mover.opposite().pieces(), &scratch) {
            score += if moved_king {
                KING_EXPOSED_PENALTY
            } else {
                PIECE_EXPOSED_PENALTY
            };
        }

        if any_side_can_capture(mover.pieces(), &scratch) {
            score += CAPTURE_THREAT_BONUS;
        }

        // Any man of the mover's color on its crowning row counts, not only the moved one.
        if !moved_king && has_man_on_promotion_row(&scratch, mover) {
            score += PROMOTION_CHANCE_BONUS;
        }

        score
    }
}

/// True when a man of `color` sits on the row where it would be crowned.
pub fn has_man_on_promotion_row(board: &Board, color: Color) -> bool {
    let row = color.promotion_row();
    board
        .occupied()
        .any(|(pos, piece)| pos.row == row && piece == color.man())
}
