use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::io::{self, BufRead, Write};

use crate::ai::types::Ai;
use crate::ai::{alphabeta, minimax, query, random};
use crate::engine::game::Game;
use crate::engine::nim::Nim;
use crate::engine::types::Player;
use crate::error::{Error, Result};

/// 人間プレイヤーの入出力。
pub type HumanAgent = query::Agent<Box<dyn BufRead>, Box<dyn Write>>;

/// 戦略の種類（設定値）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum StrategyKind {
    /// アルファベータ探索。
    AlphaBeta,
    /// 標準入力から手を受け取る。
    Human,
    /// 枝刈りなしのミニマックス探索。
    Minimax,
    /// 合法手から一様ランダム。
    Random,
}

impl StrategyKind {
    /// 受け付ける名前の一覧。
    pub const NAMES: [&'static str; 5] = ["me", "random", "alpha_beta", "ab", "minimax"];
}

impl FromStr for StrategyKind {
    type Err = Error;

    #[inline]
    fn from_str(name: &str) -> Result<Self> {
        match name.trim() {
            "me" => Ok(Self::Human),
            "random" => Ok(Self::Random),
            "alpha_beta" | "ab" => Ok(Self::AlphaBeta),
            "minimax" => Ok(Self::Minimax),
            other => Err(Error::InvalidConfiguration {
                message: format!(
                    "unknown player type '{other}', expected one of {}",
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::AlphaBeta => "alpha_beta",
            Self::Human => "me",
            Self::Minimax => "minimax",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// 実行時の戦略。
#[derive(Debug)]
#[non_exhaustive]
pub enum Controller {
    /// アルファベータ探索。
    AlphaBeta(alphabeta::Agent),
    /// 人間。
    Human(HumanAgent),
    /// ミニマックス探索。
    Minimax(minimax::Agent),
    /// ランダム（乱数生成器の状態が大きいので箱に入れる）。
    Random(Box<random::Agent>),
}

impl Controller {
    /// 設定値から戦略を生成する。人間は標準入出力を使う。
    #[inline]
    #[must_use]
    pub fn from_kind(kind: StrategyKind, seed: u64) -> Self {
        match kind {
            StrategyKind::AlphaBeta => Self::AlphaBeta(alphabeta::Agent::new()),
            StrategyKind::Human => Self::human(io::stdin().lock(), io::stdout()),
            StrategyKind::Minimax => Self::Minimax(minimax::Agent::new()),
            StrategyKind::Random => Self::Random(Box::new(random::Agent::new(seed))),
        }
    }

    /// 入出力を指定して人間の戦略を生成する。
    #[inline]
    #[must_use]
    pub fn human<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        let reader: Box<dyn BufRead> = Box::new(input);
        let writer: Box<dyn Write> = Box::new(output);
        Self::Human(query::Agent::new(reader, writer))
    }

    /// 人間が操作する戦略かを返す。
    #[inline]
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(*self, Self::Human(_))
    }
}

impl<G: Game + ?Sized> Ai<G> for Controller {
    #[inline]
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        match *self {
            Self::AlphaBeta(ref mut agent) => agent.select_move(game, state),
            Self::Human(ref mut agent) => agent.select_move(game, state),
            Self::Minimax(ref mut agent) => agent.select_move(game, state),
            Self::Random(ref mut agent) => agent.select_move(game, state),
        }
    }
}

/// 対局結果（先手視点の効用）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    /// 終局局面の効用。
    utility: i32,
}

impl Outcome {
    /// 先手視点の効用を返す。
    #[inline]
    #[must_use]
    pub const fn utility(self) -> i32 {
        self.utility
    }

    /// 勝者を返す（効用が 0 なら `None`）。
    #[inline]
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self.utility.cmp(&0_i32) {
            Ordering::Greater => Some(Player::First),
            Ordering::Less => Some(Player::Second),
            Ordering::Equal => None,
        }
    }
}

impl From<i32> for Outcome {
    #[inline]
    fn from(utility: i32) -> Self {
        Self { utility }
    }
}

impl fmt::Display for Outcome {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{player} wins!"),
            None => write!(f, "Game ended with utility {}", self.utility),
        }
    }
}

/// ゲームと2人分の戦略を保持する対局ループ。
#[derive(Debug)]
pub struct GameLoop<G = Nim> {
    /// ゲームルール（初期局面を含む）。
    game: G,
    /// 先手・後手の戦略。
    players: [Controller; 2],
}

impl<G: Game> GameLoop<G> {
    /// ゲームを返す。
    #[inline]
    pub const fn game(&self) -> &G {
        &self.game
    }

    /// 設定値から対局ループを生成する。ランダム戦略は `seed`（後手は `seed + 1`）で初期化する。
    #[inline]
    pub fn new(game: G, kinds: [StrategyKind; 2], seed: u64) -> Self {
        let [first, second] = kinds;
        Self::with_controllers(
            game,
            [
                Controller::from_kind(first, seed),
                Controller::from_kind(second, seed.wrapping_add(1)),
            ],
        )
    }

    /// 戦略を返す（先手、後手の順）。
    #[inline]
    pub const fn players(&self) -> &[Controller; 2] {
        &self.players
    }

    /// 終局まで対局する。
    ///
    /// # Errors
    ///
    /// `play_game` のエラーを返す。
    #[inline]
    pub fn run(&mut self) -> Result<Outcome> {
        let [ref mut first, ref mut second] = self.players;
        let utility = play_game(&self.game, first, second)?;
        let outcome = Outcome::from(utility);
        tracing::info!(%outcome, "outcome");
        Ok(outcome)
    }

    /// 生成済みの戦略から対局ループを生成する。
    #[inline]
    pub const fn with_controllers(game: G, players: [Controller; 2]) -> Self {
        Self { game, players }
    }
}

/// 2つの戦略を交互に呼び出し、終局時の効用（先手視点）を返す。
///
/// 初期局面がすでに終局している場合、戦略を呼ばずにその効用を返す。
/// 終局局面は `Game::display` で表示する。
///
/// # Errors
///
/// 戦略または `Game::result` のエラーをそのまま返し、対局を打ち切る。
#[inline]
pub fn play_game<G, P1, P2>(game: &G, player1: &mut P1, player2: &mut P2) -> Result<i32>
where
    G: Game + ?Sized,
    P1: Ai<G> + ?Sized,
    P2: Ai<G> + ?Sized,
{
    let mut state = game.initial().clone();
    tracing::info!(initial = %state, "game started");

    while !game.terminal_test(&state) {
        let player = game.to_move(&state);
        let mv = match player {
            Player::First => player1.select_move(game, &state)?,
            Player::Second => player2.select_move(game, &state)?,
        };
        state = game.result(&state, mv)?;
        tracing::debug!(%player, %mv, %state, "move played");
    }

    game.display(&state);
    let utility = game.utility(&state, Player::First);
    tracing::info!(utility, "game finished");
    Ok(utility)
}
