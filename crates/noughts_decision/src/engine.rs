//! Move selection for the automated player.

use crate::encoding::{CellCodes, encode};
use crate::error::{ConfigurationError, DecisionError};
use crate::model::ModelConfig;
use crate::network::Network;
use noughts_board::{Board, CELLS, Position, classify};
use tracing::{debug, instrument};

/// Pure-inference move selector.
///
/// Holds validated weights only. Selecting a move borrows the engine
/// immutably, so one engine can serve any number of boards and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionEngine {
    network: Network,
    codes: CellCodes,
}

impl DecisionEngine {
    /// Creates an engine from a validated network.
    ///
    /// # Errors
    ///
    /// Fails if a cell code is not finite.
    pub fn new(network: Network, codes: CellCodes) -> Result<Self, ConfigurationError> {
        if !codes.is_finite() {
            return Err(ConfigurationError::new("Cell codes must be finite"));
        }
        Ok(Self { network, codes })
    }

    /// Validates a model description into an engine.
    #[instrument(skip(config), fields(layers = config.layers.len()))]
    pub fn from_config(config: ModelConfig) -> Result<Self, ConfigurationError> {
        let network = Network::new(config.layers)?;
        Self::new(network, config.codes)
    }

    /// Returns the network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Returns the cell codes.
    pub fn codes(&self) -> &CellCodes {
        &self.codes
    }

    /// Scores every cell of the board, row-major.
    ///
    /// Occupied cells are scored too; [`DecisionEngine::select_move`]
    /// ignores them.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::Configuration`] if the network yields a
    /// non-finite score.
    pub fn scores(&self, board: &Board) -> Result<[f64; CELLS], DecisionError> {
        let input = encode(board, &self.codes);
        let output = self.network.forward(&input)?;

        if output.len() != CELLS {
            return Err(ConfigurationError::new(format!(
                "Network produced {} scores, expected {}",
                output.len(),
                CELLS
            ))
            .into());
        }
        let mut scores = [0.0; CELLS];
        scores.copy_from_slice(&output);

        if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
            return Err(
                ConfigurationError::new(format!("Score for cell {} is not finite", index)).into(),
            );
        }
        Ok(scores)
    }

    /// Chooses the empty cell with the highest score.
    ///
    /// Ties go to the lowest row, then the lowest column, so identical
    /// boards and weights always yield the same cell.
    ///
    /// # Errors
    ///
    /// - [`DecisionError::NoLegalMove`] if the board is full or already won.
    /// - [`DecisionError::Configuration`] if scoring fails.
    #[instrument(skip(self, board))]
    pub fn select_move(&self, board: &Board) -> Result<Position, DecisionError> {
        let outcome = classify(board);
        if outcome.is_terminal() {
            debug!(%outcome, "No move on a finished board");
            return Err(DecisionError::NoLegalMove);
        }

        let scores = self.scores(board)?;
        let mut best: Option<(Position, f64)> = None;
        for pos in Position::empty_cells(board) {
            let score = scores[pos.index()];
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((pos, score)),
            }
        }

        let (pos, score) = best.ok_or(DecisionError::NoLegalMove)?;
        debug!(position = %pos, score, "Selected move");
        Ok(pos)
    }
}

/// Chooses the automated player's move on `board` using `engine`.
///
/// See [`DecisionEngine::select_move`].
pub fn select_move(board: &Board, engine: &DecisionEngine) -> Result<Position, DecisionError> {
    engine.select_move(board)
}
