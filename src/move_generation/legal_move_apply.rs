use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::{
    Bar, Board, BorneOff, GammonMove, Player, PointIndex, PointState, BAR, FIRST_POINT,
    LAST_POINT, OFF,
};

/// Apply one accepted move and return the new board/bar/borne-off triple.
///
/// Callers must only apply moves drawn from the legal-move list; violations
/// of the piece-count invariants (for example a zero-count origin) are
/// programmer errors and reported as `Err`.
pub fn apply_move(
    board: &Board,
    bar: &Bar,
    borne_off: &BorneOff,
    player: Player,
    gammon_move: &GammonMove,
) -> Result<(Board, Bar, BorneOff), String> {
    let mut next_board = board.clone();
    let mut next_bar = *bar;
    let mut next_off = *borne_off;

    if gammon_move.from == BAR {
        if next_bar.pieces[player.index()] == 0 {
            return Err("no piece on the bar to enter with".to_owned());
        }
        next_bar.pieces[player.index()] -= 1;
        land_on_point(&mut next_board, &mut next_bar, player, gammon_move.to)?;
    } else {
        lift_from_point(&mut next_board, player, gammon_move.from)?;
        if gammon_move.to == OFF {
            next_off.pieces[player.index()] += 1;
        } else {
            land_on_point(&mut next_board, &mut next_bar, player, gammon_move.to)?;
        }
    }

    Ok((next_board, next_bar, next_off))
}

/// Apply a move to a full snapshot, consuming the dice it used from
/// `remaining`.
pub fn apply_move_to_state(
    game_state: &GameState,
    gammon_move: &GammonMove,
) -> Result<GameState, String> {
    let (board, bar, borne_off) = apply_move(
        &game_state.board,
        &game_state.bar,
        &game_state.borne_off,
        game_state.turn,
        gammon_move,
    )?;

    let mut next = game_state.clone();
    next.board = board;
    next.bar = bar;
    next.borne_off = borne_off;
    consume_dice(&mut next.remaining, gammon_move)?;
    Ok(next)
}

fn lift_from_point(board: &mut Board, player: Player, point: PointIndex) -> Result<(), String> {
    if !(FIRST_POINT..=LAST_POINT).contains(&point) {
        return Err(format!("move origin {point} is not a board point"));
    }
    let origin = board.point_mut(point);
    if origin.owner != Some(player) || origin.count == 0 {
        return Err(format!("no piece of the mover on point {point}"));
    }
    origin.count -= 1;
    if origin.count == 0 {
        origin.owner = None;
    }
    Ok(())
}

fn land_on_point(
    board: &mut Board,
    bar: &mut Bar,
    player: Player,
    point: PointIndex,
) -> Result<(), String> {
    if !(FIRST_POINT..=LAST_POINT).contains(&point) {
        return Err(format!("move destination {point} is not a board point"));
    }
    let dest = board.point_mut(point);
    match dest.owner {
        Some(owner) if owner == player => {
            dest.count += 1;
        }
        Some(opponent) => {
            if dest.count > 1 {
                return Err(format!("destination point {point} is blocked"));
            }
            // Hit: the blot goes to the opponent's bar.
            bar.pieces[opponent.index()] += 1;
            *dest = PointState {
                owner: Some(player),
                count: 1,
            };
        }
        None => {
            *dest = PointState {
                owner: Some(player),
                count: 1,
            };
        }
    }
    Ok(())
}

fn consume_dice(remaining: &mut Vec<u8>, gammon_move: &GammonMove) -> Result<(), String> {
    if gammon_move.uses_both_dice {
        if remaining.len() != 2 {
            return Err("combined move applied without exactly two dice".to_owned());
        }
        remaining.clear();
        return Ok(());
    }
    for _ in 0..gammon_move.dice_used {
        let position = remaining
            .iter()
            .position(|&d| d == gammon_move.die)
            .ok_or_else(|| format!("die {} is not available", gammon_move.die))?;
        remaining.remove(position);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::gammon_types::PIECES_PER_PLAYER;
    use crate::move_generation::legal_move_generator::legal_moves;

    fn board_with(points: &[(Player, PointIndex, u8)]) -> Board {
        let mut board = Board::empty();
        for &(player, point, count) in points {
            *board.point_mut(point) = PointState {
                owner: Some(player),
                count,
            };
        }
        board
    }

    #[test]
    fn board_to_board_move_restacks_the_piece() {
        let board = board_with(&[(Player::White, 12, 5), (Player::White, 15, 1)]);
        let mv = GammonMove {
            from: 12,
            to: 15,
            die: 3,
            dice_used: 1,
            uses_both_dice: false,
        };
        let (next, bar, off) =
            apply_move(&board, &Bar::default(), &BorneOff::default(), Player::White, &mv)
                .expect("apply should succeed");
        assert_eq!(next.point(12).count, 4);
        assert_eq!(next.point(15).count, 2);
        assert_eq!(bar, Bar::default());
        assert_eq!(off, BorneOff::default());
    }

    #[test]
    fn hitting_a_blot_sends_it_to_the_bar() {
        let board = board_with(&[(Player::Black, 8, 1), (Player::White, 6, 1)]);
        let mv = GammonMove {
            from: 8,
            to: 6,
            die: 2,
            dice_used: 1,
            uses_both_dice: false,
        };
        let (next, bar, _) =
            apply_move(&board, &Bar::default(), &BorneOff::default(), Player::Black, &mv)
                .expect("apply should succeed");
        assert_eq!(next.point(6).owner, Some(Player::Black));
        assert_eq!(next.point(6).count, 1);
        assert_eq!(next.point(8).owner, None);
        assert_eq!(bar.pieces[Player::White.index()], 1);
    }

    #[test]
    fn bar_entry_decrements_the_bar() {
        let board = board_with(&[(Player::Black, 20, 2)]);
        let mut bar = Bar::default();
        bar.pieces[Player::White.index()] = 2;
        let mv = GammonMove {
            from: BAR,
            to: 3,
            die: 3,
            dice_used: 1,
            uses_both_dice: false,
        };
        let (next, bar, _) = apply_move(&board, &bar, &BorneOff::default(), Player::White, &mv)
            .expect("apply should succeed");
        assert_eq!(bar.pieces[Player::White.index()], 1);
        assert_eq!(next.point(3).owner, Some(Player::White));
    }

    #[test]
    fn bear_off_clears_the_origin_and_grows_the_pool() {
        let board = board_with(&[(Player::Black, 3, 1)]);
        let mut off = BorneOff::default();
        off.pieces[Player::Black.index()] = 14;
        let mv = GammonMove {
            from: 3,
            to: OFF,
            die: 3,
            dice_used: 1,
            uses_both_dice: false,
        };
        let (next, _, off) = apply_move(&board, &Bar::default(), &off, Player::Black, &mv)
            .expect("apply should succeed");
        assert_eq!(next.point(3).owner, None);
        assert_eq!(off.pieces[Player::Black.index()], PIECES_PER_PLAYER);
    }

    #[test]
    fn empty_origin_is_rejected_as_a_programmer_error() {
        let board = board_with(&[(Player::White, 12, 5)]);
        let mv = GammonMove {
            from: 4,
            to: 7,
            die: 3,
            dice_used: 1,
            uses_both_dice: false,
        };
        let result = apply_move(
            &board,
            &Bar::default(),
            &BorneOff::default(),
            Player::White,
            &mv,
        );
        assert!(result.is_err());
    }

    #[test]
    fn applying_a_snapshot_move_consumes_its_dice() {
        let mut game = GameState::new_game();
        game.turn = Player::White;
        game.set_roll(&[3, 1]);
        let moves = legal_moves(&game).expect("move generation should succeed");
        let combined = moves
            .iter()
            .find(|m| m.uses_both_dice)
            .expect("opening 3-1 has combined moves");
        let next = apply_move_to_state(&game, combined).expect("apply should succeed");
        assert!(next.remaining.is_empty());
        assert_eq!(next.piece_total(Player::White), PIECES_PER_PLAYER);
        assert_eq!(next.piece_total(Player::Black), PIECES_PER_PLAYER);

        let single = moves
            .iter()
            .find(|m| m.dice_used == 1 && m.die == 3)
            .expect("opening 3-1 has single-die moves");
        let next = apply_move_to_state(&game, single).expect("apply should succeed");
        assert_eq!(next.remaining, vec![1]);
    }

    #[test]
    fn hit_scenario_end_to_end() {
        let mut game = GameState::new_game();
        game.board = board_with(&[(Player::Black, 8, 1), (Player::White, 6, 1)]);
        game.turn = Player::Black;
        game.set_roll(&[2]);
        let moves = legal_moves(&game).expect("move generation should succeed");
        let hit = moves
            .iter()
            .find(|m| m.from == 8 && m.to == 6)
            .expect("8 -> 6 should be legal");
        let next = apply_move_to_state(&game, hit).expect("apply should succeed");
        assert_eq!(next.bar.pieces[Player::White.index()], 1);
        assert_eq!(next.board.point(6).owner, Some(Player::Black));
        assert_eq!(next.board.point(6).count, 1);
    }
}
