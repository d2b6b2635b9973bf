//! Win detection for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// (0,0)-(1,1)-(2,2)
    Primary,
    /// (0,2)-(1,1)-(2,0)
    Anti,
}

/// A line of three cells that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row by index (0-2).
    Row(usize),
    /// Column by index (0-2).
    Col(usize),
    /// A diagonal.
    Diag(Diagonal),
}

impl Line {
    /// All eight lines in classification precedence order:
    /// rows top to bottom, columns left to right, primary then anti diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Col(0),
        Line::Col(1),
        Line::Col(2),
        Line::Diag(Diagonal::Primary),
        Line::Diag(Diagonal::Anti),
    ];

    /// The three positions on this line, or `None` for a row or column
    /// index of 3 or more.
    pub fn cells(self) -> Option<[Position; 3]> {
        let at = |row: usize, col: usize| Position::ALL[row * SIDE + col];
        let cells = match self {
            Line::Row(r) if r < SIDE => [at(r, 0), at(r, 1), at(r, 2)],
            Line::Col(c) if c < SIDE => [at(0, c), at(1, c), at(2, c)],
            Line::Row(_) | Line::Col(_) => return None,
            Line::Diag(Diagonal::Primary) => [at(0, 0), at(1, 1), at(2, 2)],
            Line::Diag(Diagonal::Anti) => [at(0, 2), at(1, 1), at(2, 0)],
        };
        Some(cells)
    }

    /// Checks if all three cells hold the same non-empty value.
    pub fn is_won(self, board: &Board) -> bool {
        let Some(cells) = self.cells() else {
            return false;
        };
        let [a, b, c] = cells.map(|pos| board.get(pos));
        a != Cell::Empty && a == b && b == c
    }
}

/// Returns the first winning line in precedence order, if any.
///
/// Boards reached by legal play have at most one winner, but arbitrary
/// boards can hold several complete lines. Rows beat columns, columns
/// beat diagonals, and lower indices beat higher ones.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| line.is_won(board))
}
