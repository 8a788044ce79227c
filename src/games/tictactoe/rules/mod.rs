//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and its invariants can share them.

pub mod draw;
pub mod placement;
pub mod win;

pub use draw::{MAX_MOVES, check_draw};
pub use placement::{apply_move, place};
pub use win::{LINES, check_win};
