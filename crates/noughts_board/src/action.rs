//! Moves and the errors that reject them.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} -> {}", mark, position)]
pub struct Move {
    /// Where the mark goes.
    pub position: Position,
    /// The mark being written.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }
}

/// Error that rejects a move. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
