//! Validated board coordinates.

use crate::action::MoveError;
use crate::types::{Board, CELLS, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate with `row` and `col` both in `0..3`.
///
/// Construction goes through [`Position::new`], so a `Position` held by
/// the caller always addresses a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; CELLS] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// The centre cell.
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// Creates a position, failing with [`MoveError::OutOfRange`] off the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIDE || col >= SIDE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts position to row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Creates position from row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the empty positions of a board in row-major order.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
