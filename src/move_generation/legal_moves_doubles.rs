//! Compound chains for doubles rolls.
//!
//! With identical dice remaining, one piece may walk 2-4 steps of the same
//! value as a single move. Each candidate chain is validated on a disposable
//! board clone so the caller's snapshot is never speculatively mutated; a
//! hit along the way is simulated by overwriting the blot (the real applier
//! moves it to the bar when the chosen chain is committed).

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::{Board, GammonMove, Player, PointIndex, PointState, OFF};
use crate::move_generation::legal_move_checks::{
    can_bear_off, is_open_point, may_bear_off_from,
};
use crate::move_generation::legal_move_shared::occupied_points;
use crate::tables::paths::step;

pub fn generate_doubles_chain_moves(game_state: &GameState, moves: &mut Vec<GammonMove>) {
    let remaining = &game_state.remaining;
    if remaining.len() < 2 {
        return;
    }
    let die = remaining[0];
    if remaining.iter().any(|&d| d != die) {
        return;
    }

    let player = game_state.turn;
    let max_uses = remaining.len() as u8;

    for origin in occupied_points(&game_state.board, player) {
        let mut sim = game_state.board.clone();
        let mut current = origin;

        for uses in 1..=max_uses {
            match step(player, current, die) {
                Some(dest) => {
                    if !is_open_point(&sim, player, dest) {
                        break;
                    }
                    simulate_step(&mut sim, player, current, dest);
                    // Length-1 chains are the single-die generator's output.
                    if uses >= 2 {
                        moves.push(GammonMove {
                            from: origin,
                            to: dest,
                            die,
                            dice_used: uses,
                            uses_both_dice: false,
                        });
                    }
                    current = dest;
                }
                None => {
                    if uses >= 2
                        && can_bear_off(&sim, &game_state.bar, player)
                        && may_bear_off_from(&sim, player, current, die)
                    {
                        moves.push(GammonMove {
                            from: origin,
                            to: OFF,
                            die,
                            dice_used: uses,
                            uses_both_dice: false,
                        });
                    }
                    break;
                }
            }
        }
    }
}

fn simulate_step(board: &mut Board, player: Player, from: PointIndex, to: PointIndex) {
    let origin = board.point_mut(from);
    origin.count -= 1;
    if origin.count == 0 {
        origin.owner = None;
    }

    let dest = board.point_mut(to);
    if dest.owner == Some(player) {
        dest.count += 1;
    } else {
        // Empty point or a hit blot; either way the mover holds it alone.
        *dest = PointState {
            owner: Some(player),
            count: 1,
        };
    }
}
