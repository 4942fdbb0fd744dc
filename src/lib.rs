//! Crate root module declarations for the Makruk engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! computer opponents, and utility helpers) so the play binary, tests, and
//! external tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod engines {
    pub mod engine_match_harness;
    pub mod engine_random;
    pub mod engine_selector;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
