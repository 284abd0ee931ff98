/// Cells along one side of the grid.
pub const BOARD_SIDE: usize = 3;
/// Total number of slots, indexed 0..NUM_CELLS in row-major order.
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Every three-in-a-row: rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Main diagonal, top-left to bottom-right.
pub const DIAGONAL: [usize; 3] = LINES[6];
/// Anti-diagonal, top-right to bottom-left.
pub const ANTI_DIAGONAL: [usize; 3] = LINES[7];
