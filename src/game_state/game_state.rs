use crate::game_state::gammon_types::*;

/// Fixed opening layout, per player: 2 pieces on the entry point, 5 on the
/// mid point, 3 in the outer board, 5 on the home-board anchor.
const OPENING_LAYOUT: [(Player, PointIndex, u8); 8] = [
    (Player::White, 1, 2),
    (Player::White, 12, 5),
    (Player::White, 17, 3),
    (Player::White, 19, 5),
    (Player::Black, 24, 2),
    (Player::Black, 13, 5),
    (Player::Black, 8, 3),
    (Player::Black, 6, 5),
];

pub fn initial_board() -> Board {
    let mut board = Board::empty();
    for (player, point, count) in OPENING_LAYOUT {
        *board.point_mut(point) = PointState {
            owner: Some(player),
            count,
        };
    }
    board
}

pub fn initial_bar() -> Bar {
    Bar::default()
}

pub fn initial_borne_off() -> BorneOff {
    BorneOff::default()
}

/// One turn's snapshot. The engine treats this as an immutable input per
/// call; the turn controller owns advancing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub bar: Bar,
    pub borne_off: BorneOff,
    pub turn: Player,
    /// The original roll for the turn: two values, or four identical values
    /// when the caller has expanded doubles.
    pub roll: Vec<u8>,
    /// Unconsumed sub-multiset of `roll`.
    pub remaining: Vec<u8>,
    pub has_rolled: bool,
    pub must_use_all_dice: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        GameState {
            board: initial_board(),
            bar: initial_bar(),
            borne_off: initial_borne_off(),
            turn: Player::White,
            roll: Vec::new(),
            remaining: Vec::new(),
            has_rolled: false,
            must_use_all_dice: true,
        }
    }

    /// Record a fresh roll for the side to move. Doubles must already be
    /// expanded to four values by the caller.
    pub fn set_roll(&mut self, dice: &[u8]) {
        self.roll = dice.to_vec();
        self.remaining = dice.to_vec();
        self.has_rolled = true;
    }

    /// Sum of a player's pieces on the board, the bar, and the borne-off
    /// pool. Always 15 for a well-formed state.
    pub fn piece_total(&self, player: Player) -> u8 {
        let on_board: u8 = (FIRST_POINT..=LAST_POINT)
            .map(|p| {
                let state = self.board.point(p);
                if state.owner == Some(player) {
                    state.count
                } else {
                    0
                }
            })
            .sum();
        on_board + self.bar.pieces[player.index()] + self.borne_off.pieces[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_new_game() {
        let dut = GameState::new_game();
        assert_eq!(dut.piece_total(Player::White), PIECES_PER_PLAYER);
        assert_eq!(dut.piece_total(Player::Black), PIECES_PER_PLAYER);
        assert!(!dut.has_rolled);
        assert!(dut.remaining.is_empty());

        // No point is shared and counts imply ownership.
        for point in FIRST_POINT..=LAST_POINT {
            let state = dut.board.point(point);
            assert_eq!(state.count == 0, state.owner.is_none());
        }
    }

    #[test]
    fn opening_layout_places_expected_anchors() {
        let board = initial_board();
        assert_eq!(board.point(1).owner, Some(Player::White));
        assert_eq!(board.point(1).count, 2);
        assert_eq!(board.point(19).count, 5);
        assert_eq!(board.point(24).owner, Some(Player::Black));
        assert_eq!(board.point(6).count, 5);
    }

    #[test]
    fn set_roll_keeps_original_and_remaining_in_sync() {
        let mut dut = GameState::new_game();
        dut.set_roll(&[4, 4, 4, 4]);
        assert!(dut.has_rolled);
        assert_eq!(dut.roll, vec![4, 4, 4, 4]);
        assert_eq!(dut.remaining, dut.roll);
    }
}
