use core::fmt;
use std::io::{BufRead, Write};

use crate::ai::types::Ai;
use crate::engine::game::Game;
use crate::error::{Error, Result};

/// 人間の入力から手を選ぶAI。
///
/// 合法手を一覧表示し、入力を待つ。不正な入力には再入力を求める。
/// 入力は一覧の番号（`3`）か、手そのもの（`1 2`、`1,2`、`(1, 2)`）で受け付ける。
pub struct Agent<R, W> {
    /// 入力元。
    input: R,
    /// 表示先。
    output: W,
}

impl<R, W> fmt::Debug for Agent<R, W> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent").finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Agent<R, W> {
    /// 入出力を分解して返す。
    #[inline]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// 入出力を指定して初期化する。
    #[inline]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<G, R, W> Ai<G> for Agent<R, W>
where
    G: Game + ?Sized,
    R: BufRead,
    W: Write,
{
    #[inline]
    fn select_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        let moves = game.actions(state);
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }

        writeln!(self.output, "{state}")?;
        writeln!(self.output, "available moves:")?;
        for (number, mv) in (1_usize..).zip(&moves) {
            writeln!(self.output, "  {number}: {mv}")?;
        }

        loop {
            write!(self.output, "your move? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            if let Some(mv) = parse_choice(&line, &moves) {
                return Ok(mv);
            }

            tracing::debug!(input = line.trim(), "rejected human input");
            writeln!(self.output, "invalid move: {}", line.trim())?;
        }
    }
}

/// 入力行を合法手の1つに解決する。
fn parse_choice<M: Copy + ToString>(line: &str, moves: &[M]) -> Option<M> {
    if line.contains('-') {
        return None;
    }

    let wanted = numbers(line)?;
    match wanted.as_slice() {
        [] => None,
        [number] => {
            let index = usize::try_from(*number).ok()?.checked_sub(1)?;
            moves.get(index).copied()
        }
        _ => moves
            .iter()
            .find(|mv| numbers(&mv.to_string()).as_deref() == Some(wanted.as_slice()))
            .copied(),
    }
}

/// 文字列中の10進整数を順に取り出す（桁あふれは `None`）。
fn numbers(text: &str) -> Option<Vec<u64>> {
    text.split(|ch: char| !ch.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect()
}
