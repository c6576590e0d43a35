use tracing::level_filters::LevelFilter;

use crate::engine::nim::{DEFAULT_HEAPS, Nim};
use crate::error::Result;
use crate::logging::{self, LogConfig};
use crate::play::{GameLoop, StrategyKind};

/// 1局分の設定。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct GameConfig {
    /// 各山の初期石数。
    pub heaps: Vec<i64>,
    /// ログ設定。
    pub log: LogConfig,
    /// 先手・後手の戦略。
    pub players: [StrategyKind; 2],
    /// ランダム戦略の乱数シード。
    pub seed: u64,
}

impl GameConfig {
    /// 設定を検証し、対局ループを生成する。
    ///
    /// # Errors
    ///
    /// 山が不正な場合、`Error::InvalidConfiguration` を返す。
    #[inline]
    pub fn build(&self) -> Result<GameLoop<Nim>> {
        let game = Nim::new(&self.heaps)?;
        let [first, second] = self.players;
        tracing::info!(
            heaps = ?self.heaps,
            %first,
            %second,
            seed = self.seed,
            "starting Nim"
        );
        Ok(GameLoop::new(game, self.players, self.seed))
    }

    /// ログ設定に従ってサブスクライバを設定する。
    ///
    /// # Errors
    ///
    /// `logging::init` のエラーを返す。
    #[inline]
    pub fn init_logging(&self) -> Result<()> {
        logging::init(self.log)
    }

    /// 詳細ログ（`DEBUG`）を有効にした設定を返す。
    #[inline]
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.log.level = LevelFilter::DEBUG;
        self
    }
}

impl Default for GameConfig {
    #[inline]
    fn default() -> Self {
        Self {
            heaps: DEFAULT_HEAPS
                .iter()
                .map(|&count| i64::from(count))
                .collect(),
            log: LogConfig::default(),
            players: [StrategyKind::Random, StrategyKind::Random],
            seed: 0,
        }
    }
}
