//! Line checks used for win detection.

use super::super::{Board, Cell, Player};

/// Returns the owner of three cells if all three hold the same mark.
fn line_owner(a: Cell, b: Cell, c: Cell) -> Option<Player> {
    a.owner().filter(|_| a == b && b == c)
}

/// Checks the row with index `row`.
pub fn winning_row(board: &Board, row: usize) -> Option<Player> {
    line_owner(board.get(row, 0), board.get(row, 1), board.get(row, 2))
}

/// Checks the column with index `col`.
pub fn winning_col(board: &Board, col: usize) -> Option<Player> {
    line_owner(board.get(0, col), board.get(1, col), board.get(2, col))
}

/// Checks the main diagonal, then the anti-diagonal.
pub fn winning_diagonal(board: &Board) -> Option<Player> {
    line_owner(board.get(0, 0), board.get(1, 1), board.get(2, 2))
        .or_else(|| line_owner(board.get(2, 0), board.get(1, 1), board.get(0, 2)))
}
