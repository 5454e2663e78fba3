//! Combined moves that play two different dice as one unit.
//!
//! A combined move is only legal when it could be played as two sequential
//! single-die moves, so at least one ordering must give an open intermediate
//! point (the stricter rule interpretation; see `legal_move_generator`).

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::GammonMove;
use crate::move_generation::legal_move_checks::is_open_point;
use crate::move_generation::legal_move_shared::occupied_points;
use crate::tables::paths::step;

pub fn generate_combined_moves(game_state: &GameState, moves: &mut Vec<GammonMove>) {
    if game_state.remaining.len() != 2 {
        return;
    }
    let (first, second) = (game_state.remaining[0], game_state.remaining[1]);
    if first == second {
        return;
    }

    let player = game_state.turn;
    let sum = first + second;

    for origin in occupied_points(&game_state.board, player) {
        let Some(dest) = step(player, origin, sum) else {
            continue;
        };
        if !is_open_point(&game_state.board, player, dest) {
            continue;
        }

        let intermediate_open = [first, second].iter().any(|&die| {
            step(player, origin, die)
                .is_some_and(|mid| is_open_point(&game_state.board, player, mid))
        });
        if intermediate_open {
            moves.push(GammonMove {
                from: origin,
                to: dest,
                die: sum,
                dice_used: 2,
                uses_both_dice: true,
            });
        }
    }
}
