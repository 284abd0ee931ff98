//! Core tic-tac-toe game engine (no_std compatible)
//!
//! Pure game logic with no I/O. The only dependency is the `log` facade,
//! so the engine can be embedded anywhere a 3x3 board is needed.

pub mod board;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use board::Board;
pub use common::{Cell, MoveError, Player};
pub use config::*;
pub use game::{GameEngine, GameStatus};
