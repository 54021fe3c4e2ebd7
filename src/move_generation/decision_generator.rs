//! Full decision generation for one side.
//!
//! Evaluates the mandatory-capture gate once, then scans the board row-major
//! and asks each own piece for either its captures or its plain moves.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Position, SidePieces};
use crate::move_generation::capture_rules::any_side_can_capture;
use crate::move_generation::legal_moves_king::{generate_king_captures, generate_king_moves};
use crate::move_generation::legal_moves_man::{generate_man_captures, generate_man_moves};
use crate::moves::decision::Decision;

pub trait DecisionGenerator: Send + Sync {
    fn generate_decisions(&self, side: SidePieces, board: &Board) -> Vec<Decision>;
}

pub struct LegalDecisionGenerator;

impl DecisionGenerator for LegalDecisionGenerator {
    fn generate_decisions(&self, side: SidePieces, board: &Board) -> Vec<Decision> {
        generate_all_decisions_for_side(side, board)
    }
}

pub fn generate_captures(from: Position, board: &Board) -> Vec<Decision> {
    let mut out = Vec::new();
    if board.piece_at(from).is_king() {
        generate_king_captures(from, board, &mut out);
    } else {
        generate_man_captures(from, board, &mut out);
    }
    out
}

pub fn generate_moves(from: Position, board: &Board) -> Vec<Decision> {
    let mut out = Vec::new();
    if board.piece_at(from).is_king() {
        generate_king_moves(from, board, &mut out);
    } else {
        generate_man_moves(from, board, &mut out);
    }
    out
}

/// Every legal decision for `side`: captures only when any capture exists, moves otherwise.
pub fn generate_all_decisions_for_side(side: SidePieces, board: &Board) -> Vec<Decision> {
    let mandatory = any_side_can_capture(side, board);
    let mut out = Vec::with_capacity(32);

    for from in board.squares_of(side) {
        let piece = board.piece_at(from);
        match (mandatory, piece.is_king()) {
            (true, true) => generate_king_captures(from, board, &mut out),
            (true, false) => generate_man_captures(from, board, &mut out),
            (false, true) => generate_king_moves(from, board, &mut out),
            (false, false) => generate_man_moves(from, board, &mut out),
        }
    }

    out
}

#[inline]
pub fn has_any_decision(side: SidePieces, board: &Board) -> bool {
    !generate_all_decisions_for_side(side, board).is_empty()
}
