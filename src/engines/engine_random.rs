//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! self-play invariant testing, and the demo binary.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Seeded variant so test runs replay identically.
    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumGammon Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let legal_moves = self
            .move_generator
            .generate_legal_moves(game_state)
            .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.chosen_move = None;
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.chosen_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::gammon_types::Player;

    #[test]
    fn seeded_engines_pick_the_same_move() {
        let mut game = GameState::new_game();
        game.turn = Player::White;
        game.set_roll(&[6, 2]);

        let mut first = RandomEngine::seeded(99);
        let mut second = RandomEngine::seeded(99);
        let a = first.choose_move(&game).expect("engine should choose");
        let b = second.choose_move(&game).expect("engine should choose");
        assert_eq!(a.chosen_move, b.chosen_move);
        assert!(a.chosen_move.is_some());
    }

    #[test]
    fn no_legal_moves_yields_no_choice() {
        let mut game = GameState::new_game();
        game.turn = Player::White;
        // No roll recorded, so no moves exist.
        let mut engine = RandomEngine::seeded(1);
        let out = engine.choose_move(&game).expect("engine should answer");
        assert!(out.chosen_move.is_none());
    }
}
