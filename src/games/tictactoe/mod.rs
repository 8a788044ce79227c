//! Tic-tac-toe: board, rules, turn order and the match engine.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod turn_order;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameEngine, GameState};
pub use position::Position;
pub use turn_order::{Coin, CoinFace, FixedCoin, SeededCoin, TurnOrder};
pub use types::{Board, Cell, Outcome, PlayerId};
