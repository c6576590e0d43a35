use crate::ai::INF;
use crate::ai::types::{Ai, Decision, SearchStats};
use crate::engine::game::Game;
use crate::engine::types::Player;
use crate::error::{Error, Result};

/// 枝刈りなしのミニマックス探索を行うAI。
///
/// 全ノードを展開するため、小さな局面（テストの比較対象など）向け。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<G: Game + ?Sized> Ai<G> for Agent {
    #[inline]
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        minimax_decision(game, state).map(|decision| decision.action())
    }
}

/// 手番側から見た最善手をミニマックスで返す（同点は列挙順で最初の手）。
///
/// # Errors
///
/// 終局局面で呼ばれた場合、`Error::NoLegalMove` を返す。
#[inline]
pub fn minimax_decision<G: Game + ?Sized>(game: &G, state: &G::State) -> Result<Decision<G::Move>> {
    if game.terminal_test(state) {
        return Err(Error::NoLegalMove);
    }

    let player = game.to_move(state);
    let mut stats = SearchStats::default();
    stats.inc_nodes();

    let mut best: Option<(G::Move, i32)> = None;
    for mv in game.actions(state) {
        let next = game.result(state, mv)?;
        let score = minimax_value(game, &next, player, &mut stats)?;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best.map(|(action, value)| Decision::new(action, value, stats))
        .ok_or(Error::NoLegalMove)
}

/// `player` から見た局面の値を返す。
fn minimax_value<G: Game + ?Sized>(
    game: &G,
    state: &G::State,
    player: Player,
    stats: &mut SearchStats,
) -> Result<i32> {
    stats.inc_nodes();

    if game.terminal_test(state) {
        return Ok(game.utility(state, player));
    }

    let maximizing = game.to_move(state) == player;
    let mut best = if maximizing { INF.wrapping_neg() } else { INF };

    for mv in game.actions(state) {
        let next = game.result(state, mv)?;
        let score = minimax_value(game, &next, player, stats)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    Ok(best)
}
