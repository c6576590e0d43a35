use core::fmt;
use core::hash::{Hash, Hasher};

use crate::engine::types::{Move, Player};

/// 局面（手番＋効用＋山＋棋譜）。
///
/// 生成後は変更しない。探索木の兄弟ノード同士が盤面を共有しないよう、
/// 山の列は常にコピーして保持する。
#[derive(Clone, Debug)]
pub struct GameState {
    /// 各山に残っている石の数。
    board: Vec<u32>,
    /// この局面に至るまでの手順（追跡用で、等価性には関与しない）。
    moves: Vec<Move>,
    /// 手番。
    to_move: Player,
    /// 終局時の効用（先手視点、非終局では 0）。
    utility: i32,
}

impl GameState {
    /// 終局しているか（全ての山が空か）を返す。
    #[inline]
    #[must_use]
    pub fn all_heaps_empty(&self) -> bool {
        self.board.iter().all(|&count| count == 0)
    }

    /// 山の列を返す。
    #[inline]
    #[must_use]
    pub fn board(&self) -> &[u32] {
        &self.board
    }

    /// この局面に至るまでの手順を返す。
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// 局面を生成する。`board` と `moves` はコピーされる。
    #[inline]
    #[must_use]
    pub fn new(to_move: Player, utility: i32, board: &[u32], moves: &[Move]) -> Self {
        Self {
            board: board.to_vec(),
            moves: moves.to_vec(),
            to_move,
            utility,
        }
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// 石の総数を返す。
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.board.iter().map(|&count| u64::from(count)).sum()
    }

    /// 先手視点の効用を返す。
    #[inline]
    #[must_use]
    pub const fn utility(&self) -> i32 {
        self.utility
    }
}

impl PartialEq for GameState {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_move == other.to_move && self.utility == other.utility && self.board == other.board
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_move.hash(state);
        self.utility.hash(state);
        self.board.hash(state);
    }
}

impl fmt::Display for GameState {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to move | heaps [", self.to_move)?;
        for (index, count) in self.board.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count}")?;
        }
        f.write_str("]")
    }
}
