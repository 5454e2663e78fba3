//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from a snapshot for debugging, tests,
//! and diagnostics in text environments. The top row runs 13..24 left to
//! right, the bottom row 12..1, with the bar and borne-off pools below.

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::{Player, PointIndex, PointState};

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    let top: Vec<PointIndex> = (13..=24).collect();
    let bottom: Vec<PointIndex> = (1..=12).rev().collect();

    push_index_row(&mut out, &top);
    push_point_row(&mut out, game_state, &top);
    push_point_row(&mut out, game_state, &bottom);
    push_index_row(&mut out, &bottom);

    out.push_str(&format!(
        "bar: W{} B{}  off: W{} B{}  turn: {}\n",
        game_state.bar.pieces[Player::White.index()],
        game_state.bar.pieces[Player::Black.index()],
        game_state.borne_off.pieces[Player::White.index()],
        game_state.borne_off.pieces[Player::Black.index()],
        player_letter(game_state.turn),
    ));

    if game_state.has_rolled {
        out.push_str(&format!("dice remaining: {:?}\n", game_state.remaining));
    }

    out
}

fn push_index_row(out: &mut String, points: &[PointIndex]) {
    for point in points {
        out.push_str(&format!("{point:>4}"));
    }
    out.push('\n');
}

fn push_point_row(out: &mut String, game_state: &GameState, points: &[PointIndex]) {
    for &point in points {
        out.push_str(&point_cell(game_state.board.point(point)));
    }
    out.push('\n');
}

fn point_cell(state: PointState) -> String {
    match state.owner {
        Some(player) if state.count > 0 => {
            format!(" {}{:<2}", player_letter(player), state.count)
        }
        _ => "  · ".to_owned(),
    }
}

fn player_letter(player: Player) -> char {
    match player {
        Player::White => 'W',
        Player::Black => 'B',
    }
}
