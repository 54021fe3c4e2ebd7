//! King decision generation.
//!
//! Each of the four diagonals is walked outward one square at a time until it
//! leaves the board. Captures are recorded at every distance that passes
//! `is_legal_capture`; plain moves stop at the first blocked square.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::Position;
use crate::move_generation::capture_rules::is_legal_capture;
use crate::move_generation::move_rules::is_legal_move;
use crate::moves::decision::{Decision, DecisionKind};
use crate::moves::diagonal::is_on_board;

pub fn generate_king_captures(from: Position, board: &Board, out: &mut Vec<Decision>) {
    let piece = board.piece_at(from);
    for (d_row, d_col) in DIAGONALS {
        let mut to = from.offset(d_row, d_col);
        while is_on_board(to) {
            // `is_legal_capture` already requires a clear run up to the captured piece.
            if is_legal_capture(to, from, piece, board) {
                out.push(Decision::new(from, to, DecisionKind::KingCapture));
            }
            to = to.offset(d_row, d_col);
        }
    }
}

pub fn generate_king_moves(from: Position, board: &Board, out: &mut Vec<Decision>) {
    let piece = board.piece_at(from);
    for (d_row, d_col) in DIAGONALS {
        let mut to = from.offset(d_row, d_col);
        while is_legal_move(to, from, piece, board) {
            out.push(Decision::new(from, to, DecisionKind::Move));
            to = to.offset(d_row, d_col);
        }
    }
}
