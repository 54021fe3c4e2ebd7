use std::sync::Arc;
use std::thread;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::decision_generator::DecisionGenerator;
use crate::move_generation::legal_move_apply::apply_decision;
use crate::move_generation::promotion::promote_if_needed;
use crate::moves::decision::{Decision, DecisionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub king_captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
        self.promotions += rhs.promotions;
    }
}

/// One ply: apply, crown, and hand the move to the other side.
fn play(board: &Board, decision: &Decision) -> (Board, bool) {
    let mut next = *board;
    let undo = apply_decision(&mut next, decision);
    let promoted = promote_if_needed(&mut next, decision.to, undo.moved_piece);
    (next, promoted)
}

pub fn perft<G: DecisionGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for decision in generator.generate_decisions(side.pieces(), board) {
        perft_recurse(generator, board, &decision, side, depth, 1, &mut total);
    }
    total
}

pub fn perft_multi_threaded(
    generator: Arc<dyn DecisionGenerator>,
    board: &Board,
    side: Color,
    depth: u8,
) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root = generator.generate_decisions(side.pieces(), board);
    let mut handles = Vec::with_capacity(root.len());

    for decision in root {
        let generator_ref = Arc::clone(&generator);
        let board = *board;
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(
                generator_ref.as_ref(),
                &board,
                &decision,
                side,
                depth,
                1,
                &mut local,
            );
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: DecisionGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    decision: &Decision,
    side: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let (next, promoted) = play(board, decision);

    if current_depth == search_depth {
        counts.nodes += 1;
        match decision.kind {
            DecisionKind::Capture => counts.captures += 1,
            DecisionKind::KingCapture => counts.king_captures += 1,
            DecisionKind::Move => {}
        }
        if promoted {
            counts.promotions += 1;
        }
        return;
    }

    let reply_side = side.opposite();
    for reply in generator.generate_decisions(reply_side.pieces(), &next) {
        perft_recurse(
            generator,
            &next,
            &reply,
            reply_side,
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}
