use crate::engine::game::Game;
use crate::error::Result;

/// 手を選択するAI（プレイヤー戦略）。
pub trait Ai<G: Game + ?Sized> {
    /// 現在局面から次の手を選択する。
    ///
    /// # Errors
    ///
    /// 終局局面で呼ばれた場合は `Error::NoLegalMove` を返す。
    /// 戦略固有の失敗（入力の終端など）もここで返す。
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move>;
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// 枝刈りした回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りした回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈り回数を加算する。
    #[inline]
    pub(crate) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    #[inline]
    pub(crate) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// ルート探索の結果。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decision<M> {
    /// 選択した手。
    action: M,
    /// 探索統計。
    stats: SearchStats,
    /// `action` の評価値（手番視点）。
    value: i32,
}

impl<M: Copy> Decision<M> {
    /// 選択した手を返す。
    #[inline]
    #[must_use]
    pub const fn action(&self) -> M {
        self.action
    }

    /// 探索結果を生成する。
    #[inline]
    pub(crate) const fn new(action: M, value: i32, stats: SearchStats) -> Self {
        Self {
            action,
            stats,
            value,
        }
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 評価値を返す。
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }
}
