//! Tic-tac-toe library - a pure game engine with a console front end
//!
//! # Architecture
//!
//! - **Engine**: board, move rules, win/draw detection and turn sequencing,
//!   with no I/O ([`GameEngine`], [`GameState`])
//! - **Turn order**: decided once per match by an injected [`Coin`]
//! - **Console**: text rendering and the read/print loop ([`ConsoleSession`])
//! - **Config**: optional TOML match settings ([`MatchConfig`])
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, MoveError, Outcome, PlayerId, TurnOrder};
//!
//! let mut engine = GameEngine::new(TurnOrder::from_first(true));
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.make_move(row, col)?;
//! }
//! assert_eq!(engine.make_move(0, 2)?, Outcome::Won(PlayerId::Player1));
//! assert_eq!(engine.make_move(2, 2), Err(MoveError::GameOver));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod match_config;

// Crate-level exports - Match configuration
pub use match_config::{ConfigError, MatchConfig};

// Crate-level exports - Console front end
pub use console::{ConsoleSession, InputError, SessionOptions, parse_coordinates, render};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Coin, CoinFace, FixedCoin, GameEngine, GameState, Move, MoveError, Outcome,
    PlayerId, Position, SeededCoin, TurnOrder, invariants, rules,
};
