use core::fmt;

/// 手番（プレイヤー）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "two-player games only; callers match both sides exhaustively"
)]
pub enum Player {
    /// 先手。
    First,
    /// 後手。
    Second,
}

impl Player {
    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Player {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::First => f.write_str("Player 1"),
            Self::Second => f.write_str("Player 2"),
        }
    }
}

/// 1手（どの山から何個取るか）。
///
/// 合法性は適用先の局面に対してのみ定義される。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// 取る石の数。
    amount: u32,
    /// 対象の山のインデックス。
    heap: usize,
}

impl Move {
    /// 取る石の数を返す。
    #[inline]
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.amount
    }

    /// 対象の山のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn heap(self) -> usize {
        self.heap
    }

    /// `(heap, amount)` から手を生成する（範囲チェックは `Game::result` が行う）。
    #[inline]
    #[must_use]
    pub const fn new(heap: usize, amount: u32) -> Self {
        Self { amount, heap }
    }
}

impl From<(usize, u32)> for Move {
    #[inline]
    fn from((heap, amount): (usize, u32)) -> Self {
        Self::new(heap, amount)
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.heap, self.amount)
    }
}
