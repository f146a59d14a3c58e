//! Text rendering of the board.

use tictac_rules::{Board, Cell, Player};

/// Symbol printed for one cell.
fn symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => " ",
        Cell::Occupied(Player::X) => "X",
        Cell::Occupied(Player::O) => "O",
    }
}

/// Formats the board as a labelled grid.
///
/// ```text
///   0 1 2
///   ------
/// 0|X O  |
/// 1|  X  |
/// 2|     |
///   ------
/// ```
pub fn render_board(board: &Board) -> String {
    let mut result = String::from("  0 1 2\n  ------\n");
    for (index, row) in board.rows().iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|cell| symbol(*cell)).collect();
        result.push_str(&format!("{}|{}|\n", index, cells.join(" ")));
    }
    result.push_str("  ------\n");
    result
}
