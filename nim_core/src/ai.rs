/// アルファベータ探索AI。
pub mod alphabeta;
/// 枝刈りなしのミニマックス探索AI。
pub mod minimax;
/// 人間の入力から手を選ぶAI。
pub mod query;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;

/// 評価値の上限（±∞ の代わり）。
pub(crate) const INF: i32 = i32::MAX;

pub type Decision<M> = types::Decision<M>;
pub type SearchStats = types::SearchStats;
