/// ゲームの抽象（`Game` トレイト）。
pub mod game;
/// Nim（山から石を取るゲーム）の実装。
pub mod nim;
/// 局面（手番・効用・山・棋譜）。
pub mod state;
pub mod types;

pub type GameState = state::GameState;
pub type Move = types::Move;
pub type Nim = nim::Nim;
pub type Player = types::Player;
