//! Compact textual position notation for fixtures and diagnostics.
//!
//! A position is a space-separated token list: `w<point>:<count>` and
//! `b<point>:<count>` for occupied points, plus optional `wbar`/`bbar` and
//! `woff`/`boff` tokens for non-zero bar and borne-off counts, e.g.
//! `"w1:2 w12:5 w17:3 w19:5 b6:5 b8:3 b13:5 b24:2"` for the opening layout.

use crate::game_state::gammon_types::{
    Bar, Board, BorneOff, Player, PointState, FIRST_POINT, LAST_POINT,
};

pub const OPENING_POSITION: &str = "w1:2 w12:5 w17:3 w19:5 b6:5 b8:3 b13:5 b24:2";

pub fn parse_position(text: &str) -> Result<(Board, Bar, BorneOff), String> {
    let mut board = Board::empty();
    let mut bar = Bar::default();
    let mut borne_off = BorneOff::default();

    for token in text.split_ascii_whitespace() {
        let (head, count_text) = token
            .split_once(':')
            .ok_or_else(|| format!("token '{token}' is missing ':'"))?;
        let count: u8 = count_text
            .parse()
            .map_err(|_| format!("bad count in token '{token}'"))?;

        let (player, rest) = if let Some(rest) = head.strip_prefix('w') {
            (Player::White, rest)
        } else if let Some(rest) = head.strip_prefix('b') {
            (Player::Black, rest)
        } else {
            return Err(format!("token '{token}' must start with 'w' or 'b'"));
        };

        match rest {
            "bar" => bar.pieces[player.index()] = count,
            "off" => borne_off.pieces[player.index()] = count,
            _ => {
                let point: u8 = rest
                    .parse()
                    .map_err(|_| format!("bad point in token '{token}'"))?;
                if !(FIRST_POINT..=LAST_POINT).contains(&point) {
                    return Err(format!("point {point} is out of range in '{token}'"));
                }
                if count == 0 {
                    return Err(format!("zero count on point {point}"));
                }
                if !board.point(point).is_empty() {
                    return Err(format!("point {point} is listed twice"));
                }
                *board.point_mut(point) = PointState {
                    owner: Some(player),
                    count,
                };
            }
        }
    }

    Ok((board, bar, borne_off))
}

/// Inverse of [`parse_position`]; token order is fixed so equal states
/// always format identically.
pub fn format_position(board: &Board, bar: &Bar, borne_off: &BorneOff) -> String {
    let mut tokens = Vec::<String>::new();

    for player in [Player::White, Player::Black] {
        let prefix = match player {
            Player::White => 'w',
            Player::Black => 'b',
        };
        for point in FIRST_POINT..=LAST_POINT {
            let state = board.point(point);
            if state.owner == Some(player) && state.count > 0 {
                tokens.push(format!("{prefix}{point}:{}", state.count));
            }
        }
        if bar.pieces[player.index()] > 0 {
            tokens.push(format!("{prefix}bar:{}", bar.pieces[player.index()]));
        }
        if borne_off.pieces[player.index()] > 0 {
            tokens.push(format!("{prefix}off:{}", borne_off.pieces[player.index()]));
        }
    }

    tokens.join(" ")
}
