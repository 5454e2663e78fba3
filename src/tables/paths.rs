//! Static per-player movement tables.
//!
//! Each player traverses the 24 points in a fixed direction; keeping the
//! directed paths, home ranges, and bar-entry mappings as constant tables
//! indexed by [`Player`] avoids sign-flipping arithmetic in the generators.

use std::ops::RangeInclusive;

use crate::game_state::gammon_types::{Player, PointIndex, BOARD_POINTS};

/// Directed point sequences from entry side to exit side, indexed by
/// [`Player::index`]. White walks `1 -> 24`, Black walks `24 -> 1`.
pub const PLAYER_PATHS: [[PointIndex; BOARD_POINTS]; 2] = [
    [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    ],
    [
        24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
    ],
];

/// Six home-board points nearest each player's exit (inclusive bounds).
pub const HOME_RANGES: [(PointIndex, PointIndex); 2] = [(19, 24), (1, 6)];

/// Bar re-entry points by die value (`die - 1` indexes the inner array).
/// Each player enters in the opponent's home board.
pub const ENTRY_POINTS: [[PointIndex; 6]; 2] = [
    [1, 2, 3, 4, 5, 6],
    [24, 23, 22, 21, 20, 19],
];

/// Offset of `point` in the player's directed path.
#[inline]
pub fn path_index(player: Player, point: PointIndex) -> Option<usize> {
    PLAYER_PATHS[player.index()].iter().position(|&p| p == point)
}

/// Destination of a single die-step from `point`, or `None` when the step
/// runs past the end of the path (a bear-off candidate).
#[inline]
pub fn step(player: Player, point: PointIndex, die: u8) -> Option<PointIndex> {
    let start = path_index(player, point)?;
    let target = start + die as usize;
    if target < BOARD_POINTS {
        Some(PLAYER_PATHS[player.index()][target])
    } else {
        None
    }
}

/// Exact die value needed to bear off from `point` (the number of path steps
/// remaining to the exit).
#[inline]
pub fn exit_distance(player: Player, point: PointIndex) -> Option<u8> {
    path_index(player, point).map(|idx| (BOARD_POINTS - idx) as u8)
}

/// Re-entry point for a die value, or `None` for a die outside `1..=6`.
#[inline]
pub fn entry_point(player: Player, die: u8) -> Option<PointIndex> {
    if (1..=6).contains(&die) {
        Some(ENTRY_POINTS[player.index()][(die - 1) as usize])
    } else {
        None
    }
}

#[inline]
pub fn home_range(player: Player) -> RangeInclusive<PointIndex> {
    let (low, high) = HOME_RANGES[player.index()];
    low..=high
}
