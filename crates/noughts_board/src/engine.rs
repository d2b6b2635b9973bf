//! Board engine operations.
//!
//! Every function here is a pure function of its arguments. Boards are
//! values: a move returns a new board and leaves its input alone, so a
//! rejected move can never leave a half-applied grid behind.

use crate::action::{Move, MoveError};
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Returns an all-empty board.
#[instrument]
pub fn new_game() -> Board {
    Board::new()
}

/// Writes `mark` at `(row, col)`.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if either coordinate is 3 or more.
/// - [`MoveError::CellOccupied`] if the target cell is not empty.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, row: usize, col: usize, mark: Mark) -> Result<Board, MoveError> {
    let position = Position::new(row, col)?;
    board.apply(Move::new(position, mark))
}

/// Classifies the board.
///
/// Rows are checked top to bottom, then columns left to right, then the
/// primary diagonal, then the anti-diagonal; the first complete line is
/// reported. Without a complete line a full board is a `Draw`.
#[instrument]
pub fn classify(board: &Board) -> GameOutcome {
    if let Some(line) = rules::winning_line(board) {
        return line.into();
    }
    if rules::is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Checks if no cell is empty.
pub fn is_full(board: &Board) -> bool {
    rules::is_full(board)
}

impl Board {
    /// Applies a move, returning the updated board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the target cell is not empty.
    #[instrument(skip(self), fields(position = %mov.position, mark = ?mov.mark))]
    pub fn apply(&self, mov: Move) -> Result<Board, MoveError> {
        let current = self.get(mov.position);
        if current != Cell::Empty {
            debug!(?current, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(mov.position));
        }
        Ok(self.with(mov.position, mov.mark.into()))
    }
}
