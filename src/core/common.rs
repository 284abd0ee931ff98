//! Common types for tic-tac-toe: players, cell contents and move errors.

use crate::core::config::NUM_CELLS;

/// One of the two marks. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    /// Moves first.
    #[default]
    X,
    /// Moves second.
    O,
}

impl Player {
    /// The player who moves after `self`.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character drawn for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the given player's mark for the rest of the game.
    Taken(Player),
}

impl Cell {
    /// Returns `true` if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used when rendering the board; a space for empty slots.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Taken(p) => p.symbol(),
        }
    }
}

/// Reasons a move is rejected. All of them leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The slot already holds a mark.
    OccupiedSlot(usize),
    /// Index outside 0..=8 (negative input included).
    OutOfRange,
    /// Input was not an integer.
    Unparseable,
    /// The game already reached a win or a draw.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OccupiedSlot(i) => write!(f, "Slot {} is already taken", i),
            MoveError::OutOfRange => {
                write!(f, "Move is out of range - must be 0-{}", NUM_CELLS - 1)
            }
            MoveError::Unparseable => write!(f, "Move is not a whole number"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
