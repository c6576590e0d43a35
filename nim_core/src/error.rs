use core::result;
use std::io;

use thiserror::Error;

/// クレート共通の結果型。
pub type Result<T> = result::Result<T, Error>;

/// ルール違反・設定不備・入出力失敗を表すエラー。
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// 標準入力が閉じられ、人間の手を受け取れない。
    #[error("input closed before a move was selected")]
    InputClosed,

    /// 盤面や戦略名などの設定が不正。
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// 不正の内容。
        message: String,
    },

    /// 指定された手が現局面では適用できない。
    #[error("invalid move ({heap}, {amount}): {reason}")]
    InvalidMove {
        /// 取る石の数。
        amount: u32,
        /// 対象の山のインデックス。
        heap: usize,
        /// 不正の理由。
        reason: &'static str,
    },

    /// 遷移確率の合計が 1 にならない、または負の確率を含む。
    #[error("transition probabilities must be non-negative and sum to 1.0, got total {total}")]
    InvalidTransitionModel {
        /// 確率の合計。
        total: f64,
    },

    /// 人間入力の読み書きに失敗した。
    #[error("failed to talk to the human player: {0}")]
    Io(#[from] io::Error),

    /// グローバルなサブスクライバを設定できなかった。
    #[error("failed to install tracing subscriber: {message}")]
    Logging {
        /// 失敗の内容。
        message: String,
    },

    /// 終局した局面で手を選ぼうとした。
    #[error("no legal move: the game is already over")]
    NoLegalMove,
}
