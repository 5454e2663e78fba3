//! Single-die move generation.

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::{GammonMove, OFF};
use crate::move_generation::legal_move_checks::{
    can_bear_off, is_open_point, may_bear_off_from,
};
use crate::move_generation::legal_move_shared::{distinct_dice, occupied_points};
use crate::tables::paths::step;

/// One move per available die value and occupied origin whose destination is
/// an open point, or a legal bear-off when the step runs past the exit.
pub fn generate_single_die_moves(game_state: &GameState, moves: &mut Vec<GammonMove>) {
    let player = game_state.turn;
    let may_exit = can_bear_off(&game_state.board, &game_state.bar, player);

    for die in distinct_dice(&game_state.remaining) {
        for origin in occupied_points(&game_state.board, player) {
            match step(player, origin, die) {
                Some(dest) => {
                    if is_open_point(&game_state.board, player, dest) {
                        moves.push(GammonMove {
                            from: origin,
                            to: dest,
                            die,
                            dice_used: 1,
                            uses_both_dice: false,
                        });
                    }
                }
                None => {
                    if may_exit && may_bear_off_from(&game_state.board, player, origin, die) {
                        moves.push(GammonMove {
                            from: origin,
                            to: OFF,
                            die,
                            dice_used: 1,
                            uses_both_dice: false,
                        });
                    }
                }
            }
        }
    }
}
