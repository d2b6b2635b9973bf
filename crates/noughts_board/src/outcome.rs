//! Classified state of a board.

use crate::position::Position;
use crate::rules::{Diagonal, Line};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Outcome of a board, recomputed from the whole grid on every query.
///
/// Deserializing rejects row and column indices of 3 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRepr")]
pub enum GameOutcome {
    /// No winning line and at least one empty cell.
    InProgress,
    /// A full row, by index.
    RowWin(usize),
    /// A full column, by index.
    ColWin(usize),
    /// A full diagonal.
    DiagWin(Diagonal),
    /// Board full with no winning line.
    Draw,
}

/// Unchecked wire form of [`GameOutcome`].
#[derive(Deserialize)]
enum OutcomeRepr {
    InProgress,
    RowWin(usize),
    ColWin(usize),
    DiagWin(Diagonal),
    Draw,
}

impl TryFrom<OutcomeRepr> for GameOutcome {
    type Error = String;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        let outcome = match repr {
            OutcomeRepr::InProgress => GameOutcome::InProgress,
            OutcomeRepr::RowWin(r) => GameOutcome::RowWin(r),
            OutcomeRepr::ColWin(c) => GameOutcome::ColWin(c),
            OutcomeRepr::DiagWin(d) => GameOutcome::DiagWin(d),
            OutcomeRepr::Draw => GameOutcome::Draw,
        };
        match outcome.line() {
            Some(line) if line.cells().is_none() => {
                Err(format!("Line index out of range in {:?}", outcome))
            }
            _ => Ok(outcome),
        }
    }
}

impl GameOutcome {
    /// Returns true for every outcome but `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns true if a line has been won.
    pub fn is_win(self) -> bool {
        self.line().is_some()
    }

    /// The winning line, if any.
    pub fn line(self) -> Option<Line> {
        match self {
            GameOutcome::RowWin(r) => Some(Line::Row(r)),
            GameOutcome::ColWin(c) => Some(Line::Col(c)),
            GameOutcome::DiagWin(d) => Some(Line::Diag(d)),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Positions of the winning line, for highlighting.
    ///
    /// `None` when nothing is won, or when a row or column index is off
    /// the board.
    pub fn winning_cells(self) -> Option<[Position; 3]> {
        self.line().and_then(Line::cells)
    }

    /// The mark occupying the winning line on `board`.
    ///
    /// `board` should be the board this outcome was classified from.
    pub fn winner(self, board: &Board) -> Option<Mark> {
        let [first, ..] = self.winning_cells()?;
        board.get(first).mark()
    }
}

impl From<Line> for GameOutcome {
    fn from(line: Line) -> Self {
        match line {
            Line::Row(r) => GameOutcome::RowWin(r),
            Line::Col(c) => GameOutcome::ColWin(c),
            Line::Diag(d) => GameOutcome::DiagWin(d),
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::RowWin(r) => write!(f, "Row {} wins", r),
            GameOutcome::ColWin(c) => write!(f, "Column {} wins", c),
            GameOutcome::DiagWin(Diagonal::Primary) => write!(f, "Primary diagonal wins"),
            GameOutcome::DiagWin(Diagonal::Anti) => write!(f, "Anti-diagonal wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
