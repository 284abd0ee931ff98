//! The 3x3 grid: slot ownership, move validation and win detection.

use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{Cell, MoveError, Player};
use crate::core::config::{ANTI_DIAGONAL, BOARD_SIDE, DIAGONAL, NUM_CELLS};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
    last_move: Option<(usize, Player)>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable view of all nine slots in row-major order.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Contents of a slot, or `None` when `index` is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Index and player of the most recently accepted move.
    pub fn last_move(&self) -> Option<(usize, Player)> {
        self.last_move
    }

    /// Indices of every empty slot, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns `true` while at least one slot is still empty.
    pub fn has_empty_square(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Number of slots holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Put `player`'s mark on `index`. Rejected moves never touch the board.
    pub fn place_mark(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let slot = self.cells.get_mut(index).ok_or(MoveError::OutOfRange)?;
        if !slot.is_empty() {
            return Err(MoveError::OccupiedSlot(index));
        }
        *slot = Cell::Taken(player);
        self.last_move = Some((index, player));
        Ok(())
    }

    /// Boolean form of [`Board::place_mark`]: `true` iff the mark was placed.
    pub fn try_place_mark(&mut self, index: usize, player: Player) -> bool {
        self.place_mark(index, player).is_ok()
    }

    /// Does a line through `index` belong entirely to `player`?
    ///
    /// Only the row and column of `index` are inspected, plus both diagonals
    /// when `index` is even; odd slots never sit on a diagonal.
    pub fn check_win(&self, index: usize, player: Player) -> bool {
        if index >= NUM_CELLS {
            return false;
        }
        let row_start = BOARD_SIDE * (index / BOARD_SIDE);
        let row = [row_start, row_start + 1, row_start + 2];
        let col_start = index % BOARD_SIDE;
        let col = [col_start, col_start + BOARD_SIDE, col_start + 2 * BOARD_SIDE];

        if self.line_owned_by(&row, player) || self.line_owned_by(&col, player) {
            return true;
        }
        index % 2 == 0
            && (self.line_owned_by(&DIAGONAL, player) || self.line_owned_by(&ANTI_DIAGONAL, player))
    }

    fn line_owned_by(&self, line: &[usize; 3], player: Player) -> bool {
        line.iter().all(|&i| self.cells[i] == Cell::Taken(player))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIDE) {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  cells: {:?},\n  last_move: {:?}\n}}",
            self.cells, self.last_move
        )
    }
}
