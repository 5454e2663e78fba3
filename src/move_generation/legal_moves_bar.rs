//! Bar re-entry generation.
//!
//! While the mover has pieces on the bar this generator alone defines the
//! legal-move set; the orchestrator never runs the board generators until
//! the bar is empty.

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::{GammonMove, BAR};
use crate::move_generation::legal_move_checks::is_open_point;
use crate::move_generation::legal_move_shared::distinct_dice;
use crate::tables::paths::entry_point;

pub fn generate_bar_entry_moves(game_state: &GameState, moves: &mut Vec<GammonMove>) {
    let player = game_state.turn;

    for die in distinct_dice(&game_state.remaining) {
        let Some(entry) = entry_point(player, die) else {
            continue;
        };
        if is_open_point(&game_state.board, player, entry) {
            moves.push(GammonMove {
                from: BAR,
                to: entry,
                die,
                dice_used: 1,
                uses_both_dice: false,
            });
        }
    }
}
