use core::fmt;

use crate::engine::types::Player;
use crate::error::Result;

/// 2人零和・完全情報ゲームのルール。
///
/// 探索（`ai`）と対局ループ（`play`）はこのトレイトだけに依存する。
pub trait Game {
    /// 手の型。
    type Move: Copy + Eq + fmt::Debug + fmt::Display;
    /// 局面の型。
    type State: Clone + fmt::Debug + fmt::Display;

    /// 指定局面の合法手を列挙する。
    ///
    /// 列挙順は決定的でなければならない（探索の同点処理がこの順に依存する）。
    /// 終局局面では空を返す。
    fn actions(&self, state: &Self::State) -> Vec<Self::Move>;

    /// 局面を表示する（戻り値なし、副作用のみ）。
    #[inline]
    fn display(&self, state: &Self::State) {
        tracing::info!(%state, "display");
        println!("{state}");
    }

    /// 初期局面を返す。
    fn initial(&self) -> &Self::State;

    /// 手を適用した新しい局面を返す。入力局面は変更しない。
    ///
    /// # Errors
    ///
    /// 手が現局面で合法でない場合、`Error::InvalidMove` を返す。
    fn result(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State>;

    /// 終局しているかを返す。
    fn terminal_test(&self, state: &Self::State) -> bool;

    /// 手番を返す。
    fn to_move(&self, state: &Self::State) -> Player;

    /// `player` から見た効用を返す（非終局では 0）。
    fn utility(&self, state: &Self::State, player: Player) -> i32;
}
