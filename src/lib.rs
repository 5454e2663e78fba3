//! Crate root module declarations for the Plum Gammon rules engine.
//!
//! This file exposes all top-level subsystems (game state, movement path
//! tables, legal move generation, endgame classification, engines, and
//! utility helpers) so binaries, tests, and host applications can import
//! stable module paths.

pub mod game_state {
    pub mod endgame;
    pub mod game_state;
    pub mod gammon_types;
}

pub mod tables {
    pub mod paths;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bar;
    pub mod legal_moves_combined;
    pub mod legal_moves_doubles;
    pub mod legal_moves_single;
    pub mod move_generator;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod dice;
    pub mod match_harness;
    pub mod position_notation;
    pub mod render_game_state;
}
