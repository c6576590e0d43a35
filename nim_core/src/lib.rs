//! Nim adversarial search core.
//!
//! このクレートはゲームルールと局面を管理する `engine` と、手を選択する `ai`、
//! 2つの戦略を交互に呼び出して対局を進める `play` を提供します。
//! 強化学習側（グリッドワールド MDP）との境界は `mdp` に定義しています。

#![forbid(unsafe_code)]

/// ゲームルール・局面・Nim の実装を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// 対局設定。
pub mod config;

/// クレート共通のエラー型。
pub mod error;

/// `tracing` サブスクライバの初期化。
pub mod logging;

/// MDP 環境モデルとの境界。
pub mod mdp;

/// 対局ループ。
pub mod play;
