use crate::game_state::gammon_types::{Board, Player, PointIndex, FIRST_POINT, LAST_POINT};

/// Distinct die values in first-occurrence order, so duplicate dice never
/// produce duplicate moves and output order stays deterministic.
#[inline]
pub fn distinct_dice(remaining: &[u8]) -> Vec<u8> {
    let mut dice = Vec::with_capacity(remaining.len());
    for &die in remaining {
        if !dice.contains(&die) {
            dice.push(die);
        }
    }
    dice
}

/// Board points holding at least one of `player`'s pieces, in ascending
/// point order.
#[inline]
pub fn occupied_points(board: &Board, player: Player) -> Vec<PointIndex> {
    (FIRST_POINT..=LAST_POINT)
        .filter(|&p| {
            let state = board.point(p);
            state.owner == Some(player) && state.count > 0
        })
        .collect()
}
