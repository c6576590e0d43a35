use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;

use crate::ai::types::Ai;
use crate::engine::game::Game;
use crate::error::{Error, Result};

/// 合法手から一様ランダムに1手を選択するAI。
///
/// `seed` を指定すれば決定的に再現可能。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: StdRng,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: Game + ?Sized> Ai<G> for Agent {
    #[inline]
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        let moves = game.actions(state);
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMove)
    }
}
