use core::ops::RangeInclusive;

use crate::error::{Error, Result};

/// 遷移確率の合計に許す誤差。
const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// 遷移確率の合計として許す範囲。
const PROBABILITY_TOTAL: RangeInclusive<f64> =
    (1.0_f64 - PROBABILITY_TOLERANCE)..=(1.0_f64 + PROBABILITY_TOLERANCE);

/// 確率的な環境モデル（MDP）。
///
/// グリッドワールドなど強化学習側の環境が満たす契約。探索側を確率遷移へ
/// 一般化する場合はこのトレイトだけに依存する。
pub trait Environment {
    /// 行動の型。
    type Action: Copy + Eq;
    /// 状態の型。
    type State: Clone + Eq;

    /// 状態 `state` で取れる行動を返す。
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// 終端状態かを返す。
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// 状態に入ったときの報酬を返す。
    fn reward(&self, state: &Self::State) -> f64;

    /// 全状態を返す。
    fn states(&self) -> Vec<Self::State>;

    /// `(確率, 次状態)` の組を返す。確率の合計は 1。
    fn transition_model(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Vec<(f64, Self::State)>;
}

/// 遷移モデルが確率分布になっているかを検証する。
///
/// # Errors
///
/// 負の確率を含む、または合計が 1 から外れる場合、
/// `Error::InvalidTransitionModel` を返す。
#[inline]
pub fn check_transition_model<E: Environment + ?Sized>(
    env: &E,
    state: &E::State,
    action: E::Action,
) -> Result<()> {
    let outcomes = env.transition_model(state, action);
    let total: f64 = outcomes.iter().map(|&(probability, _)| probability).sum();
    let negative = outcomes
        .iter()
        .any(|&(probability, _)| probability < 0.0_f64);

    if negative || !PROBABILITY_TOTAL.contains(&total) {
        return Err(Error::InvalidTransitionModel { total });
    }
    Ok(())
}
