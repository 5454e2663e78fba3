//! Full legal move generation pipeline.
//!
//! Orchestrates the bar re-entry preemption and the union of the three board
//! generators (single die, combined two-dice, chained doubles). The output
//! is deterministic for identical snapshots; an empty list means the turn
//! must be forfeited by the caller.
//!
//! Combined moves keep the stricter rule interpretation: the pair of dice
//! may only travel together when one of the two intermediate landings is an
//! open point.

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::GammonMove;
use crate::move_generation::legal_moves_bar::generate_bar_entry_moves;
use crate::move_generation::legal_moves_combined::generate_combined_moves;
use crate::move_generation::legal_moves_doubles::generate_doubles_chain_moves;
use crate::move_generation::legal_moves_single::generate_single_die_moves;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerationError, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GammonMove>> {
        let mut moves = Vec::<GammonMove>::with_capacity(32);

        if !game_state.has_rolled || game_state.remaining.is_empty() {
            return Ok(moves);
        }
        validate_dice(game_state)?;

        // Mandatory re-entry preempts every other move.
        if game_state.bar.pieces[game_state.turn.index()] > 0 {
            generate_bar_entry_moves(game_state, &mut moves);
            return Ok(moves);
        }

        generate_single_die_moves(game_state, &mut moves);
        generate_combined_moves(game_state, &mut moves);
        generate_doubles_chain_moves(game_state, &mut moves);

        Ok(moves)
    }
}

/// Convenience entry point for callers that do not hold a generator.
pub fn legal_moves(game_state: &GameState) -> MoveGenResult<Vec<GammonMove>> {
    LegalMoveGenerator.generate_legal_moves(game_state)
}

/// The remaining dice must be die faces and a sub-multiset of the roll; a
/// snapshot violating that is corrupted caller state, not a forfeit.
fn validate_dice(game_state: &GameState) -> MoveGenResult<()> {
    let mut pool = game_state.roll.clone();
    for &die in &game_state.remaining {
        if !(1..=6).contains(&die) {
            return Err(MoveGenerationError::InvalidState(format!(
                "die value {die} is out of range"
            )));
        }
        let Some(position) = pool.iter().position(|&d| d == die) else {
            return Err(MoveGenerationError::InvalidState(
                "remaining dice are not a subset of the roll".to_owned(),
            ));
        };
        pool.swap_remove(position);
    }
    Ok(())
}
