//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};

/// Three cell indices forming a winning arrangement.
pub type WinLine = [usize; 3];

/// The 8 winning lines in canonical order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board)
        .and_then(|[a, _, _]| board.get(a))
        .and_then(Cell::mark)
}
