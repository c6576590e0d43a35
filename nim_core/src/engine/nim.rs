use crate::engine::game::Game;
use crate::engine::state::GameState;
use crate::engine::types::{Move, Player};
use crate::error::{Error, Result};

/// 既定の山。
pub const DEFAULT_HEAPS: [u32; 3] = [3, 4, 5];

/// 先手勝ちの効用。
const WIN: i32 = 1;

/// Nim（各手番で1つの山から1個以上取り、最後の石を取った側が勝ち）。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nim {
    /// 初期局面。
    initial: GameState,
}

impl Nim {
    /// 検証済みの石数から生成する。
    ///
    /// 山の列そのものが空のゲームは拒否するが、全ての山が 0 の列（`[0, 0]` など）は
    /// 受け付ける。後者は初期局面がすでに終局しており、効用 0 で終わる。
    ///
    /// # Errors
    ///
    /// 山が1つもない場合、`Error::InvalidConfiguration` を返す。
    #[inline]
    pub fn from_counts(heaps: &[u32]) -> Result<Self> {
        if heaps.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "at least one heap is required".to_owned(),
            });
        }

        Ok(Self {
            initial: GameState::new(Player::First, 0, heaps, &[]),
        })
    }

    /// 山の石数から生成する。
    ///
    /// 全ての山が 0 の列は受け付ける（`from_counts` と同じ）。
    ///
    /// # Errors
    ///
    /// 負の値や `u32` に収まらない値を含む場合、または山が空の場合、
    /// `Error::InvalidConfiguration` を返す。
    #[inline]
    pub fn new(heaps: &[i64]) -> Result<Self> {
        let counts = heaps
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                u32::try_from(count).map_err(|_err| Error::InvalidConfiguration {
                    message: format!("heap {index} has invalid count {count}"),
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Self::from_counts(&counts)
    }
}

impl Default for Nim {
    #[inline]
    fn default() -> Self {
        Self {
            initial: GameState::new(Player::First, 0, &DEFAULT_HEAPS, &[]),
        }
    }
}

impl Game for Nim {
    type Move = Move;
    type State = GameState;

    #[inline]
    fn actions(&self, state: &GameState) -> Vec<Move> {
        state
            .board()
            .iter()
            .enumerate()
            .flat_map(|(heap, &count)| (1..=count).map(move |amount| Move::new(heap, amount)))
            .collect()
    }

    #[inline]
    fn initial(&self) -> &GameState {
        &self.initial
    }

    #[inline]
    fn result(&self, state: &GameState, mv: Move) -> Result<GameState> {
        let invalid = |reason| Error::InvalidMove {
            amount: mv.amount(),
            heap: mv.heap(),
            reason,
        };

        let Some(&count) = state.board().get(mv.heap()) else {
            return Err(invalid("heap index out of range"));
        };
        if mv.amount() == 0 {
            return Err(invalid("must remove at least one object"));
        }
        let Some(remaining) = count.checked_sub(mv.amount()) else {
            return Err(invalid("not enough objects in heap"));
        };

        let mut board = state.board().to_vec();
        if let Some(slot) = board.get_mut(mv.heap()) {
            *slot = remaining;
        }

        let mut moves = state.moves().to_vec();
        moves.push(mv);

        let mover = state.to_move();
        let terminal = board.iter().all(|&heap| heap == 0);
        let utility = match (terminal, mover) {
            (false, _) => 0_i32,
            (true, Player::First) => WIN,
            (true, Player::Second) => WIN.wrapping_neg(),
        };

        Ok(GameState::new(mover.opponent(), utility, &board, &moves))
    }

    #[inline]
    fn terminal_test(&self, state: &GameState) -> bool {
        state.all_heaps_empty()
    }

    #[inline]
    fn to_move(&self, state: &GameState) -> Player {
        state.to_move()
    }

    #[inline]
    fn utility(&self, state: &GameState, player: Player) -> i32 {
        match player {
            Player::First => state.utility(),
            Player::Second => state.utility().wrapping_neg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Nim;
    use crate::engine::game::Game as _;
    use crate::engine::state::GameState;
    use crate::engine::types::{Move, Player};
    use crate::error::Error;

    fn nim(heaps: &[u32]) -> Nim {
        Nim::from_counts(heaps).unwrap_or_default()
    }

    /// 合法手を順に適用する（不正な手なら `None`）。
    fn play(game: &Nim, state: &GameState, script: &[(usize, u32)]) -> Option<GameState> {
        script.iter().try_fold(state.clone(), |current, &mv| {
            game.result(&current, Move::from(mv)).ok()
        })
    }

    #[test]
    fn initial_actions_cover_every_removal_in_order() {
        let game = Nim::default();
        let actions = game.actions(game.initial());
        let expected: Vec<Move> = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (2, 5),
        ]
        .into_iter()
        .map(Move::from)
        .collect();
        assert_eq!(actions.len(), 12);
        assert_eq!(actions, expected);
    }

    #[test]
    fn action_count_matches_remaining_objects() {
        let game = nim(&[2, 0, 3]);
        let mut state = game.initial().clone();
        while !game.terminal_test(&state) {
            let actions = game.actions(&state);
            assert_eq!(u64::try_from(actions.len()).ok(), Some(state.total()));

            let next_opt = actions
                .first()
                .and_then(|&mv| game.result(&state, mv).ok());
            assert!(next_opt.is_some(), "first action must apply to {state}");
            let Some(next) = next_opt else {
                return;
            };
            state = next;
        }
        assert!(game.actions(&state).is_empty());
    }

    #[test]
    fn result_updates_heap_and_turn_without_touching_input() {
        let game = Nim::default();
        let state = game.initial();
        let next_opt = game.result(state, Move::new(1, 2)).ok();
        assert!(next_opt.is_some(), "(1, 2) is legal on [3, 4, 5]");
        let Some(next) = next_opt else {
            return;
        };

        assert_eq!(next.board(), &[3, 2, 5]);
        assert_eq!(next.to_move(), Player::Second);
        assert_eq!(next.utility(), 0_i32);
        assert_eq!(next.moves(), &[Move::new(1, 2)]);
        assert_eq!(state.board(), &[3, 4, 5]);
        assert!(state.moves().is_empty());
    }

    #[test]
    fn taking_the_last_object_credits_the_mover() {
        let game = nim(&[0, 1, 0]);
        let state = game.initial();
        assert_eq!(game.actions(state), vec![Move::new(1, 1)]);

        let last_opt = play(&game, state, &[(1, 1)]);
        assert!(last_opt.is_some(), "(1, 1) is legal on [0, 1, 0]");
        let Some(last) = last_opt else {
            return;
        };
        assert!(game.terminal_test(&last));
        assert_eq!(last.utility(), 1_i32);
        assert_eq!(last.to_move(), Player::Second);
        assert_eq!(game.utility(&last, Player::First), 1_i32);
        assert_eq!(game.utility(&last, Player::Second), -1_i32);
    }

    #[test]
    fn second_player_win_is_negative() {
        let game = nim(&[1, 1]);
        let last_opt = play(&game, game.initial(), &[(0, 1), (1, 1)]);
        assert!(last_opt.is_some(), "both moves are legal on [1, 1]");
        let Some(last) = last_opt else {
            return;
        };
        assert!(game.terminal_test(&last));
        assert_eq!(last.utility(), -1_i32);
        assert_eq!(
            game.utility(&last, Player::Second),
            game.utility(&last, Player::First).wrapping_neg()
        );
    }

    #[test]
    fn move_sequence_reaches_terminal_state() {
        let game = Nim::default();
        let script = [(2, 3), (0, 1), (0, 2), (2, 2), (1, 4)];
        let boards: [&[u32]; 5] = [&[3, 4, 2], &[2, 4, 2], &[0, 4, 2], &[0, 4, 0], &[0, 0, 0]];

        let mut state = game.initial().clone();
        for (mv, board) in script.into_iter().zip(boards) {
            let next_opt = play(&game, &state, &[mv]);
            assert!(next_opt.is_some(), "scripted move {mv:?} must be legal");
            let Some(next) = next_opt else {
                return;
            };
            assert_eq!(next.board(), board);
            state = next;
        }

        assert!(game.terminal_test(&state));
        assert_eq!(state.utility(), 1_i32);
        assert_eq!(state.to_move(), Player::Second);
        assert_eq!(state.moves().len(), 5);
    }

    #[test]
    fn utility_is_zero_before_the_end() {
        let game = Nim::default();
        assert_eq!(game.utility(game.initial(), Player::First), 0_i32);
        assert_eq!(game.utility(game.initial(), Player::Second), 0_i32);
    }

    #[test]
    fn invalid_moves_are_rejected() {
        let game = Nim::default();
        let state = game.initial();
        for mv in [Move::new(3, 1), Move::new(0, 4), Move::new(1, 0)] {
            assert!(
                matches!(game.result(state, mv), Err(Error::InvalidMove { .. })),
                "move {mv} must be rejected"
            );
        }
    }

    #[test]
    fn negative_or_missing_heaps_are_rejected() {
        assert!(matches!(
            Nim::new(&[3, -1, 5]),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Nim::new(&[]),
            Err(Error::InvalidConfiguration { .. })
        ));
        let game = Nim::new(&[0, 2]).unwrap_or_default();
        assert_eq!(game.initial().board(), &[0, 2]);
    }

    #[test]
    fn heaps_beyond_u32_are_rejected() {
        assert!(matches!(
            Nim::new(&[1, 4_294_967_296]),
            Err(Error::InvalidConfiguration { .. })
        ));
        let widest = Nim::new(&[i64::from(u32::MAX)]).unwrap_or_default();
        assert_eq!(widest.initial().board(), &[u32::MAX]);
    }

    #[test]
    fn all_zero_heaps_start_finished() {
        let game = nim(&[0, 0]);
        assert_eq!(game.initial().board(), &[0, 0]);
        assert!(game.terminal_test(game.initial()));
        assert!(game.actions(game.initial()).is_empty());
        assert_eq!(game.utility(game.initial(), Player::First), 0_i32);
    }
}
