//! Board-to-vector encoding.

use noughts_board::{Board, CELLS, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Numeric code fed to the network for each cell value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellCodes {
    /// Code for an empty cell.
    pub empty: f64,
    /// Code for a cell holding the human mark.
    pub player_a: f64,
    /// Code for a cell holding the automated mark.
    pub player_b: f64,
}

impl CellCodes {
    /// Creates a code table.
    pub fn new(empty: f64, player_a: f64, player_b: f64) -> Self {
        Self {
            empty,
            player_a,
            player_b,
        }
    }

    /// Returns the code for a cell.
    pub fn code(&self, cell: Cell) -> f64 {
        match cell {
            Cell::Empty => self.empty,
            Cell::PlayerA => self.player_a,
            Cell::PlayerB => self.player_b,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.empty.is_finite() && self.player_a.is_finite() && self.player_b.is_finite()
    }
}

impl Default for CellCodes {
    /// Empty `-1`, human `1`, automated `0`.
    fn default() -> Self {
        Self::new(-1.0, 1.0, 0.0)
    }
}

/// Encodes a board as one code per cell, row-major.
#[instrument(skip(board))]
pub fn encode(board: &Board, codes: &CellCodes) -> [f64; CELLS] {
    let mut input = [0.0; CELLS];
    for (slot, cell) in input.iter_mut().zip(board.cells()) {
        *slot = codes.code(cell);
    }
    input
}
