//! Move solicitation and rendering
//!
//! The game loop talks to players only through [`Interface`], so the same
//! loop runs against the real console or a scripted transcript:
//! - `TextInterface`: line-based prompt and board rendering over any
//!   `BufRead`/`Write` pair
//! - `parse_move`: validation of a raw input line into a slot index

#![cfg(feature = "std")]

use std::io;

use crate::core::{Board, MoveError, Player};

/// Something the game loop wants the players to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The last input was rejected; the same player moves again.
    InvalidMove(MoveError),
    Win(Player),
    Draw,
}

/// Interface implemented by the different front-ends.
pub trait Interface {
    /// Ask `player` for a move. `Ok(None)` means the input is exhausted.
    fn prompt_move(&mut self, player: Player) -> io::Result<Option<String>>;

    /// Render the whole board.
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Report a rejected move or the final outcome.
    fn announce(&mut self, notice: Notice) -> io::Result<()>;
}

/// Turn a raw input line into a slot index.
pub fn parse_move(input: &str) -> Result<usize, MoveError> {
    let value: i64 = input.trim().parse().map_err(|_| MoveError::Unparseable)?;
    usize::try_from(value)
        .ok()
        .filter(|&i| i < crate::core::NUM_CELLS)
        .ok_or(MoveError::OutOfRange)
}

pub mod text;
pub use text::TextInterface;
