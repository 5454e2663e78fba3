//! Endgame detection and win classification.
//!
//! The engine reports the win category only; point values per category are
//! the caller's scoring policy.

use crate::game_state::gammon_types::{
    Bar, Board, BorneOff, Player, FIRST_POINT, LAST_POINT, PIECES_PER_PLAYER,
};
use crate::tables::paths::home_range;

/// Bonus classification of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinKind {
    /// The loser bore off at least one piece.
    Single,
    /// The loser bore off nothing.
    Gammon,
    /// The loser bore off nothing and still has a piece on the bar or
    /// outside their own home board.
    Backgammon,
}

/// The game ends the instant a player's borne-off count reaches 15.
pub fn game_winner(borne_off: &BorneOff) -> Option<Player> {
    for player in [Player::White, Player::Black] {
        if borne_off.pieces[player.index()] >= PIECES_PER_PLAYER {
            return Some(player);
        }
    }
    None
}

pub fn classify_win(board: &Board, bar: &Bar, borne_off: &BorneOff, winner: Player) -> WinKind {
    let loser = winner.opposite();
    if borne_off.pieces[loser.index()] > 0 {
        return WinKind::Single;
    }

    let home = home_range(loser);
    let outside_home = bar.pieces[loser.index()] > 0
        || (FIRST_POINT..=LAST_POINT).any(|p| {
            let state = board.point(p);
            state.owner == Some(loser) && state.count > 0 && !home.contains(&p)
        });

    if outside_home {
        WinKind::Backgammon
    } else {
        WinKind::Gammon
    }
}
