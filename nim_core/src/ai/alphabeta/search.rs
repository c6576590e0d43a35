use crate::ai::INF;
use crate::ai::types::SearchStats;
use crate::engine::game::Game;
use crate::engine::types::Player;
use crate::error::Result;

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext<'game, G: Game + ?Sized> {
    /// ゲームルール。
    game: &'game G,
    /// 最大化するプレイヤー（ルートの手番）。
    player: Player,
    /// 探索統計。
    stats: SearchStats,
}

impl<'game, G: Game + ?Sized> SearchContext<'game, G> {
    /// 探索コンテキストを生成する。
    pub(super) fn new(game: &'game G, player: Player) -> Self {
        Self {
            game,
            player,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}

/// 局面の値を返す。手番に応じて最大化/最小化を切り替える。
pub(super) fn value<G: Game + ?Sized>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    alpha: i32,
    beta: i32,
) -> Result<i32> {
    ctx.stats_mut().inc_nodes();

    if ctx.game.terminal_test(state) {
        return Ok(ctx.game.utility(state, ctx.player));
    }

    if ctx.game.to_move(state) == ctx.player {
        max_value(ctx, state, alpha, beta)
    } else {
        min_value(ctx, state, alpha, beta)
    }
}

/// 最大化ノード。`beta` 以上になった時点で残りの手を打ち切る。
fn max_value<G: Game + ?Sized>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    mut alpha: i32,
    beta: i32,
) -> Result<i32> {
    let mut best = INF.wrapping_neg();

    for mv in ctx.game.actions(state) {
        let next = ctx.game.result(state, mv)?;
        let score = value(ctx, &next, alpha, beta)?;
        if score > best {
            best = score;
        }
        if best >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
        if best > alpha {
            alpha = best;
        }
    }

    Ok(best)
}

/// 最小化ノード。`alpha` 以下になった時点で残りの手を打ち切る。
fn min_value<G: Game + ?Sized>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    alpha: i32,
    mut beta: i32,
) -> Result<i32> {
    let mut best = INF;

    for mv in ctx.game.actions(state) {
        let next = ctx.game.result(state, mv)?;
        let score = value(ctx, &next, alpha, beta)?;
        if score < best {
            best = score;
        }
        if best <= alpha {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
        if best < beta {
            beta = best;
        }
    }

    Ok(best)
}
