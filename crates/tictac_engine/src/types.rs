//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from explicit cells.
    ///
    /// No mark-count check is made; the board may be unreachable in real play.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if a cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for an index outside 0-8.
    pub fn is_empty(&self, index: usize) -> Result<bool, EngineError> {
        self.get(index)
            .map(|cell| cell == Cell::Empty)
            .ok_or(EngineError::OutOfRange { index })
    }

    /// Writes `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] if the index is out of range or the
    /// cell is taken. The board is unchanged on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), EngineError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(EngineError::out_of_range_move(index))?;
        if *cell != Cell::Empty {
            return Err(EngineError::occupied(index));
        }
        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// Resets a cell to empty. Only speculative search undoes marks.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Places a mark for the lifetime of the returned guard.
    ///
    /// The guard gives read-only access to the board; deeper marks go through
    /// [`Speculation::speculate`]. Dropping the guard clears the cell again.
    ///
    /// # Errors
    ///
    /// Same as [`Board::place`].
    pub fn speculate(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<Speculation<'_>, EngineError> {
        self.place(index, player)?;
        Ok(Speculation { board: self, index })
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of cells holding `player`'s mark.
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Nine-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Occupied(Player::X) => 'X',
                Cell::Occupied(Player::O) => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses nine cells: `X`/`O` (any case) for marks, and `.`, `_`, `-` or
    /// a space for empty. Row separators `|`, `/` and newlines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(EngineError::ParseBoard {
                message: format!("expected {} cells, found {}", CELL_COUNT, symbols.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                other => {
                    return Err(EngineError::ParseBoard {
                        message: format!("unexpected symbol {:?}", other),
                    });
                }
            };
        }
        Ok(Self { cells })
    }
}

/// A mark placed for the duration of a search branch.
///
/// Holds the board's exclusive borrow, so nothing else can observe the
/// speculative mark. The cell is cleared when the guard drops.
///
/// The board is only reachable read-only through the guard, so a branch
/// cannot leave a mark behind:
///
/// ```compile_fail
/// use tictac_engine::{Board, Player};
///
/// let mut board = Board::new();
/// let mut guard = board.speculate(0, Player::X).unwrap();
/// guard.place(1, Player::O).unwrap();
/// ```
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Speculation<'_> {
    /// Index of the speculative mark.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Places a further mark on top of this one.
    ///
    /// # Errors
    ///
    /// Same as [`Board::place`].
    pub fn speculate(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<Speculation<'_>, EngineError> {
        self.board.speculate(index, player)
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

/// A position a search can read and branch from.
///
/// Implemented by [`Board`] for the root of a search and by [`Speculation`]
/// for every node below it.
pub trait SearchNode {
    /// The position as it stands, speculative marks included.
    fn board(&self) -> &Board;

    /// Branches with `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::place`].
    fn speculate(&mut self, index: usize, player: Player) -> Result<Speculation<'_>, EngineError>;
}

impl SearchNode for Board {
    fn board(&self) -> &Board {
        self
    }

    fn speculate(&mut self, index: usize, player: Player) -> Result<Speculation<'_>, EngineError> {
        Board::speculate(self, index, player)
    }
}

impl SearchNode for Speculation<'_> {
    fn board(&self) -> &Board {
        self.board
    }

    fn speculate(&mut self, index: usize, player: Player) -> Result<Speculation<'_>, EngineError> {
        Speculation::speculate(self, index, player)
    }
}
