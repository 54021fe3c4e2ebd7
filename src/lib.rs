//! Crate root module declarations for the Plum Checkers rule engine.
//!
//! Exposes the board and rule types, decision generation, the greedy bot,
//! the game session with its delayed bot scheduler, and the terminal
//! front-end so binaries, benches, and tests share stable module paths.

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_status;
    pub mod player_config;
    pub mod turn_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod decision;
    pub mod diagonal;
}

pub mod move_generation {
    pub mod capture_rules;
    pub mod decision_generator;
    pub mod legal_move_apply;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_rules;
    pub mod perft;
    pub mod promotion;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod bot_scheduler;
    pub mod game_session;
    pub mod observer;
    pub mod selection_state;
    pub mod session_config;
}

pub mod text_ui {
    pub mod text_loop;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_board;
}
