//! Console front end: text rendering, move parsing and the match loop.

pub mod input;
pub mod render;
mod session;

pub use input::{InputError, parse_coordinates};
pub use session::{ConsoleSession, SessionOptions};
