use std::io;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::set_global_default;

use crate::error::{Error, Result};

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人間向けのテキスト。
    #[default]
    Pretty,
}

/// ログ設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct LogConfig {
    /// 出力形式。
    pub format: LogFormat,
    /// 出力する最大レベル（`OFF` で無効）。
    pub level: LevelFilter,
}

impl Default for LogConfig {
    #[inline]
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: LevelFilter::INFO,
        }
    }
}

/// 設定に従って `fmt` サブスクライバを生成する（出力先は標準エラー）。
///
/// グローバルには設定しないので、`tracing::subscriber::with_default` で
/// 範囲を限って使うこともできる。
#[inline]
#[must_use]
pub fn build_subscriber(config: LogConfig) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(false)
        .with_writer(io::stderr);

    match config.format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.finish()),
    }
}

/// グローバルな `tracing` サブスクライバを設定する。
///
/// # Errors
///
/// すでに別のサブスクライバが設定されている場合、`Error::Logging` を返す。
#[inline]
pub fn init(config: LogConfig) -> Result<()> {
    set_global_default(build_subscriber(config)).map_err(|err| Error::Logging {
        message: err.to_string(),
    })
}
