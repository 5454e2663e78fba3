/// Core data model for the backgammon rules engine.
/// Board points, bar, and borne-off pools share one addressing scheme so the
/// generators and the applier never branch on nullable origins/destinations.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

/// Board point index (`1..=24`), plus two sentinel values: [`BAR`] as a move
/// origin for re-entry and [`OFF`] as a bear-off destination.
pub type PointIndex = u8;

/// Sentinel origin for pieces entering from the bar.
pub const BAR: PointIndex = 0;
/// Sentinel destination for pieces borne off the board.
pub const OFF: PointIndex = 25;

pub const FIRST_POINT: PointIndex = 1;
pub const LAST_POINT: PointIndex = 24;
pub const BOARD_POINTS: usize = 24;
pub const PIECES_PER_PLAYER: u8 = 15;

/// Occupancy of one board point. A point is owned by at most one player;
/// `count == 0` implies `owner == None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointState {
    pub owner: Option<Player>,
    pub count: u8,
}

impl PointState {
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// A lone opposing piece is a blot and may be hit.
    #[inline]
    pub fn is_blot_of(self, opponent: Player) -> bool {
        self.owner == Some(opponent) && self.count == 1
    }
}

/// The 24 playing points. Slots `0` and `25` exist only so sentinel indices
/// stay in range; they are never occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub points: [PointState; BOARD_POINTS + 2],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            points: [PointState::default(); BOARD_POINTS + 2],
        }
    }

    #[inline]
    pub fn point(&self, index: PointIndex) -> PointState {
        self.points[index as usize]
    }

    #[inline]
    pub fn point_mut(&mut self, index: PointIndex) -> &mut PointState {
        &mut self.points[index as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Per-player count of pieces waiting to re-enter, indexed by
/// [`Player::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bar {
    pub pieces: [u8; 2],
}

/// Per-player count of pieces that have permanently left the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorneOff {
    pub pieces: [u8; 2],
}

/// One proposed or applied transition.
///
/// `from` is a board point or [`BAR`]; `to` is a board point or [`OFF`].
/// `die` is the consumed value (the sum of both dice for a combined move),
/// and `dice_used` how many die-uses the move represents (1, 2 for a
/// combined move, 2-4 for a chained-doubles move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammonMove {
    pub from: PointIndex,
    pub to: PointIndex,
    pub die: u8,
    pub dice_used: u8,
    pub uses_both_dice: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blot_detection_respects_owner_and_count() {
        let blot = PointState {
            owner: Some(Player::White),
            count: 1,
        };
        assert!(blot.is_blot_of(Player::White));
        assert!(!blot.is_blot_of(Player::Black));

        let stack = PointState {
            owner: Some(Player::White),
            count: 2,
        };
        assert!(!stack.is_blot_of(Player::White));
    }

    #[test]
    fn sentinel_indices_stay_inside_board_storage() {
        let board = Board::empty();
        assert!(board.point(BAR).is_empty());
        assert!(board.point(OFF).is_empty());
    }
}
