//! Landing and bear-off legality predicates shared by the generators and by
//! UI highlighting.

use crate::game_state::gammon_types::{Bar, Board, Player, PointIndex, FIRST_POINT, LAST_POINT};
use crate::tables::paths::{exit_distance, home_range};

/// A destination is open when it is empty, held by the mover, or held by a
/// single opposing piece (a blot). Two or more opposing pieces block it.
#[inline]
pub fn is_open_point(board: &Board, player: Player, point: PointIndex) -> bool {
    if !(FIRST_POINT..=LAST_POINT).contains(&point) {
        return false;
    }
    let state = board.point(point);
    match state.owner {
        None => true,
        Some(owner) if owner == player => true,
        Some(_) => state.count <= 1,
    }
}

/// True when every one of `player`'s on-board pieces sits inside their
/// home-board range. Pieces on the bar are checked separately.
pub fn all_pieces_home(board: &Board, player: Player) -> bool {
    let home = home_range(player);
    (FIRST_POINT..=LAST_POINT).all(|p| {
        let state = board.point(p);
        state.owner != Some(player) || state.count == 0 || home.contains(&p)
    })
}

/// Bearing off requires every piece home and none waiting on the bar.
pub fn can_bear_off(board: &Board, bar: &Bar, player: Player) -> bool {
    bar.pieces[player.index()] == 0 && all_pieces_home(board, player)
}

/// Whether a piece on `point` may leave the board with `die`.
///
/// An exact match is always legal. A larger die is legal only when no piece
/// of the player sits strictly farther from the exit; callers must have
/// already established [`can_bear_off`].
pub fn may_bear_off_from(board: &Board, player: Player, point: PointIndex, die: u8) -> bool {
    let Some(distance) = exit_distance(player, point) else {
        return false;
    };
    if die == distance {
        return true;
    }
    if die < distance {
        return false;
    }
    !(FIRST_POINT..=LAST_POINT).any(|p| {
        let state = board.point(p);
        state.owner == Some(player)
            && state.count > 0
            && exit_distance(player, p).is_some_and(|d| d > distance)
    })
}
