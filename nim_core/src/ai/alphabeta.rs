/// αβ付きの再帰探索本体。
mod search;


use crate::ai::INF;
use crate::ai::types::{Ai, Decision, SearchStats};
use crate::engine::game::Game;
use crate::error::{Error, Result};

use search::SearchContext;

/// アルファベータ探索を行うAI。
///
/// 木を終局まで読み切るため、探索深さの設定はない。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent {
    /// 直前の探索結果の統計。
    last: Option<SearchStats>,
}

impl Agent {
    /// 直前の探索統計を返す（未探索なら `None`）。
    #[inline]
    #[must_use]
    pub const fn last_stats(&self) -> Option<SearchStats> {
        self.last
    }

    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }
}

impl<G: Game + ?Sized> Ai<G> for Agent {
    #[inline]
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        let decision = alpha_beta_search(game, state)?;
        self.last = Some(decision.stats());
        Ok(decision.action())
    }
}

/// 手番側を最大化プレイヤーとして、αβ枝刈り付きミニマックスで最善手を返す。
///
/// 同じ評価値の手が複数ある場合は、`Game::actions` の列挙順で最初の手を選ぶ。
///
/// # Errors
///
/// - `Error::NoLegalMove`: 終局局面で呼ばれた場合
/// - `Game::result` が返したエラー（通常は発生しない）
#[inline]
pub fn alpha_beta_search<G: Game + ?Sized>(
    game: &G,
    state: &G::State,
) -> Result<Decision<G::Move>> {
    if game.terminal_test(state) {
        return Err(Error::NoLegalMove);
    }

    let mut ctx = SearchContext::new(game, game.to_move(state));
    ctx.stats_mut().inc_nodes();

    let mut best: Option<(G::Move, i32)> = None;
    let mut alpha = INF.wrapping_neg();
    let beta = INF;

    for mv in game.actions(state) {
        let next = game.result(state, mv)?;
        let score = search::value(&mut ctx, &next, alpha, beta)?;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    let Some((action, value)) = best else {
        return Err(Error::NoLegalMove);
    };

    let stats = ctx.stats();
    tracing::debug!(
        %action,
        value,
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        "alpha-beta decision"
    );

    Ok(Decision::new(action, value, stats))
}
